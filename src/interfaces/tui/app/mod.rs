//! App module: state and business logic
//!
//! - state: Core App struct and the two-page navigation
//! - selector: category list with filter and multi-selection
//! - results: per-category tables
//! - navigation: cursor movement
//! - link_operations: open / copy

mod link_operations;
mod navigation;
mod results;
mod selector;
mod state;

pub use navigation::ListCursor;
pub use results::{Column, ResultRow, ResultsTable, ResultsView, SortState};
pub use selector::{CategorySelector, Submission};
pub use state::{App, ViewState, Warning};
