use searchdeck::errors::{DeckError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let error = DeckError::config("bad level");

        assert!(matches!(error, DeckError::Config(_)));
        assert!(error.to_string().contains("Configuration Error"));
        assert!(error.to_string().contains("bad level"));
    }

    #[test]
    fn test_catalog_format_error() {
        let error = DeckError::catalog_format("record needs a url");

        assert!(matches!(error, DeckError::CatalogFormat(_)));
        assert!(error.to_string().contains("Catalog Format Error"));
        assert!(error.to_string().contains("record needs a url"));
    }

    #[test]
    fn test_clipboard_error() {
        let error = DeckError::clipboard("no display");

        assert!(matches!(error, DeckError::Clipboard(_)));
        assert_eq!(error.format_simple(), "Clipboard Error: no display");
    }

    #[test]
    fn test_link_open_error() {
        let error = DeckError::link_open("no handler");

        assert!(matches!(error, DeckError::LinkOpen(_)));
        assert_eq!(error.message(), "no handler");
    }
}

#[cfg(test)]
mod error_code_tests {
    use super::*;

    #[test]
    fn test_codes_are_stable_and_unique() {
        let errors = [
            DeckError::config(""),
            DeckError::file_operation(""),
            DeckError::catalog_format(""),
            DeckError::terminal(""),
            DeckError::clipboard(""),
            DeckError::link_open(""),
            DeckError::validation(""),
        ];
        let codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(
            codes,
            vec!["E001", "E002", "E003", "E004", "E005", "E006", "E007"]
        );
    }

    #[test]
    fn test_colored_format_contains_code_and_message() {
        let formatted = DeckError::terminal("raw mode").format_colored();
        assert!(formatted.contains("E004"));
        assert!(formatted.contains("Terminal Error"));
        assert!(formatted.contains("raw mode"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog.toml");
        let error: DeckError = io_error.into();

        assert!(matches!(error, DeckError::FileOperation(_)));
        assert!(error.to_string().contains("catalog.toml"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_error = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let error: DeckError = toml_error.into();
        assert!(matches!(error, DeckError::CatalogFormat(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: DeckError = json_error.into();
        assert!(matches!(error, DeckError::CatalogFormat(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here/catalog.toml")?)
        }
        let error = read_missing().unwrap_err();
        assert!(matches!(error, DeckError::FileOperation(_)));
        assert!(error.source().is_none());
    }
}
