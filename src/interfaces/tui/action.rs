//! Action 系统
//!
//! 页面组件只返回 Action，由 App 统一执行

use super::app::Submission;

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    // ========== 导航 ==========
    /// 提交分类选择，进入结果页
    Submit(Submission),
    /// 返回分类选择页
    Back,

    // ========== 链接操作 ==========
    /// 打开链接（非链接值会被跳过）
    OpenLinks(Vec<String>),
    /// 复制链接到剪贴板
    CopyLinks(Vec<String>),

    // ========== 系统 ==========
    /// 切换主题
    ToggleTheme,
    /// 显示帮助
    ShowHelp,
    /// 退出程序
    Quit,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否应该导致程序退出
    pub fn should_quit(&self) -> bool {
        matches!(self, Action::Quit)
    }
}
