use std::fmt;

#[derive(Debug, Clone)]
pub enum DeckError {
    Config(String),
    FileOperation(String),
    CatalogFormat(String),
    Terminal(String),
    Clipboard(String),
    LinkOpen(String),
    Validation(String),
}

impl DeckError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            DeckError::Config(_) => "E001",
            DeckError::FileOperation(_) => "E002",
            DeckError::CatalogFormat(_) => "E003",
            DeckError::Terminal(_) => "E004",
            DeckError::Clipboard(_) => "E005",
            DeckError::LinkOpen(_) => "E006",
            DeckError::Validation(_) => "E007",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            DeckError::Config(_) => "Configuration Error",
            DeckError::FileOperation(_) => "File Operation Error",
            DeckError::CatalogFormat(_) => "Catalog Format Error",
            DeckError::Terminal(_) => "Terminal Error",
            DeckError::Clipboard(_) => "Clipboard Error",
            DeckError::LinkOpen(_) => "Link Open Error",
            DeckError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            DeckError::Config(msg) => msg,
            DeckError::FileOperation(msg) => msg,
            DeckError::CatalogFormat(msg) => msg,
            DeckError::Terminal(msg) => msg,
            DeckError::Clipboard(msg) => msg,
            DeckError::LinkOpen(msg) => msg,
            DeckError::Validation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DeckError {}

// 便捷的构造函数
impl DeckError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        DeckError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        DeckError::FileOperation(msg.into())
    }

    pub fn catalog_format<T: Into<String>>(msg: T) -> Self {
        DeckError::CatalogFormat(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        DeckError::Terminal(msg.into())
    }

    pub fn clipboard<T: Into<String>>(msg: T) -> Self {
        DeckError::Clipboard(msg.into())
    }

    pub fn link_open<T: Into<String>>(msg: T) -> Self {
        DeckError::LinkOpen(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        DeckError::Validation(msg.into())
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        DeckError::FileOperation(err.to_string())
    }
}

impl From<toml::de::Error> for DeckError {
    fn from(err: toml::de::Error) -> Self {
        DeckError::CatalogFormat(err.to_string())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        DeckError::CatalogFormat(err.to_string())
    }
}

impl From<config::ConfigError> for DeckError {
    fn from(err: config::ConfigError) -> Self {
        DeckError::Config(err.to_string())
    }
}

#[cfg(feature = "tui")]
impl From<arboard::Error> for DeckError {
    fn from(err: arboard::Error) -> Self {
        DeckError::Clipboard(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
