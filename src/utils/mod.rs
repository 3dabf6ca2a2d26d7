pub mod links;

pub use links::{is_link, join_links, openable_links};
