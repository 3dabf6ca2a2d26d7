/// Blocking warning popup; swallows keys until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl Warning {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn no_selection() -> Self {
        Self::new("No Selection", "Choose at least one category.")
    }
}
