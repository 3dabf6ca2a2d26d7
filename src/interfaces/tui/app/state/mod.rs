//! App state definition and basic state management
//!
//! 核心 App 结构：数据集、两个页面、导航状态机、主题和弹窗

mod modal;

pub use modal::Warning;

use tracing::{debug, info};

use super::results::ResultsView;
use super::selector::{CategorySelector, Submission};
use crate::catalog::Catalog;
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::constants::hints;
use crate::interfaces::tui::theme::Theme;
use crate::services::{ClipboardSink, LinkOpener};

/// 当前页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Selecting,
    ViewingResults,
}

pub struct App {
    pub catalog: Catalog,
    pub view: ViewState,
    pub selector: CategorySelector,
    /// Only present while viewing results
    pub results: Option<ResultsView>,
    pub theme: Theme,

    // Modal state
    pub warning: Option<Warning>,
    pub show_help: bool,

    pub status_message: String,

    pub(super) opener: Box<dyn LinkOpener>,
    pub(super) clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(
        catalog: Catalog,
        opener: Box<dyn LinkOpener>,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let selector = CategorySelector::new(catalog.names());
        App {
            catalog,
            view: ViewState::Selecting,
            selector,
            results: None,
            theme: Theme::default(),
            warning: None,
            show_help: false,
            status_message: hints::SELECTING.to_string(),
            opener,
            clipboard,
        }
    }

    /// App wired to the platform browser and clipboard
    pub fn with_system_services(catalog: Catalog) -> Self {
        Self::new(
            catalog,
            Box::new(crate::services::SystemOpener),
            Box::new(crate::services::SystemClipboard::new()),
        )
    }

    /// Selecting → ViewingResults
    ///
    /// Returns whether the view changed. An empty submission only raises the
    /// warning popup.
    pub fn submit(&mut self, submission: Submission) -> bool {
        if submission.is_empty() {
            debug!("Empty submission rejected");
            self.warning = Some(Warning::no_selection());
            return false;
        }

        let data = self.catalog.subset(submission.categories());
        info!("Showing {} categories", data.len());
        self.results = Some(ResultsView::new(data));
        self.view = ViewState::ViewingResults;
        self.set_status(hints::VIEWING_RESULTS);
        true
    }

    /// ViewingResults → Selecting; the results view is dropped
    pub fn back(&mut self) {
        self.results = None;
        self.view = ViewState::Selecting;
        self.set_status(hints::SELECTING);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        debug!("Theme switched to {}", self.theme.as_ref());
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn dismiss_warning(&mut self) {
        self.warning = None;
    }

    /// 处理 Action，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        if action.should_quit() {
            return true;
        }
        match action {
            Action::Submit(submission) => {
                self.submit(submission);
            }
            Action::Back => self.back(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::ShowHelp => self.show_help = true,
            Action::OpenLinks(links) => {
                self.open_links(&links);
            }
            Action::CopyLinks(links) => {
                self.copy_links(&links);
            }
            Action::Quit | Action::Noop => {}
        }
        false
    }
}
