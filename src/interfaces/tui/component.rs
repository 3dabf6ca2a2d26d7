//! Component trait 定义
//!
//! 页面组件接口：按键 → Action，渲染到给定区域

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use super::action::Action;
use super::theme::Palette;

/// TUI 组件 trait
///
/// 组件只修改自己的状态；需要跨页面生效的操作通过返回的 [`Action`]
/// 交给 App 执行。
pub trait Component {
    /// 处理键盘事件，不处理时返回 `Action::Noop`
    fn handle_key(&mut self, _key: KeyEvent) -> Action {
        Action::Noop
    }

    /// 渲染组件
    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette);
}
