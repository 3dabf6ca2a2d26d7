//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// Window title
pub const APP_NAME: &str = "Hacker Search Engines Pro";

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// Shown in place of an empty description
pub const DESCRIPTION_PLACEHOLDER: &str = "-";

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 警告弹窗
    pub const WARNING: PopupSize = PopupSize::new(50, 25);
}

/// 状态栏提示
pub mod hints {
    pub const SELECTING: &str =
        "Select categories. Tip: press Enter on a category to open it on its own.";
    pub const VIEWING_RESULTS: &str =
        "Enter opens the link under the cursor. o opens the selected links, y copies them.";
}
