//! 可复用 UI 组件
//!
//! 提供通用的 UI 组件，减少重复代码

mod filter_bar;
mod popup;

pub use filter_bar::FilterBar;
pub use popup::Popup;
