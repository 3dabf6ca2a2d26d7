//! Catalog sources
//!
//! A source produces a [`Catalog`]. Failures never reach the UI: the caller
//! goes through [`load_catalog`], which degrades to an empty catalog.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

use super::{Catalog, CategoryName, LinkRecord};
use crate::errors::{DeckError, Result};

/// 内置目录（编译进二进制）
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Anything that can supply the category → records mapping
pub trait CatalogSource {
    /// Human readable description used in logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<Catalog>;
}

/// Catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl CatalogSource for BuiltinSource {
    fn describe(&self) -> String {
        "built-in catalog".to_string()
    }

    fn load(&self) -> Result<Catalog> {
        parse_toml(BUILTIN_CATALOG)
    }
}

/// Catalog read from a TOML or JSON file, chosen by extension
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }

    fn load(&self) -> Result<Catalog> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            DeckError::file_operation(format!("{}: {}", self.path.display(), e))
        })?;
        if self.is_json() {
            parse_json(&content)
        } else {
            parse_toml(&content)
        }
    }
}

/// Pick the source for an optional configured path
pub fn source_for(path: Option<&str>) -> Box<dyn CatalogSource> {
    match path {
        Some(p) if !p.trim().is_empty() => Box::new(FileSource::new(p.trim())),
        _ => Box::new(BuiltinSource),
    }
}

/// Load a catalog, substituting an empty one on any failure
pub fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.load() {
        Ok(catalog) => {
            info!(
                "Loaded {} with {} categories ({} links)",
                source.describe(),
                catalog.len(),
                catalog.record_count()
            );
            catalog
        }
        Err(e) => {
            warn!(
                "Failed to load {}, starting with no categories: {}",
                source.describe(),
                e
            );
            Catalog::default()
        }
    }
}

/// Records accept either a table or a positional `[name, url, description]` array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRecord {
    Table {
        name: String,
        url: String,
        #[serde(default)]
        description: Option<String>,
    },
    Fields(Vec<Option<String>>),
}

impl RawRecord {
    fn into_record(self, category: &str) -> Result<LinkRecord> {
        match self {
            RawRecord::Table {
                name,
                url,
                description,
            } => Ok(LinkRecord::new(name, url, description.unwrap_or_default())),
            RawRecord::Fields(fields) => {
                if !(2..=3).contains(&fields.len()) {
                    return Err(DeckError::catalog_format(format!(
                        "record in '{}' must have 2 or 3 fields, got {}",
                        category,
                        fields.len()
                    )));
                }
                let mut fields = fields.into_iter();
                let name = fields.next().flatten().unwrap_or_default();
                let url = fields.next().flatten().unwrap_or_default();
                let description = fields.next().flatten().unwrap_or_default();
                Ok(LinkRecord::new(name, url, description))
            }
        }
    }
}

type RawCatalog = BTreeMap<CategoryName, Vec<RawRecord>>;

fn convert(raw: RawCatalog) -> Result<Catalog> {
    let mut categories = BTreeMap::new();
    for (category, records) in raw {
        if category.trim().is_empty() {
            return Err(DeckError::validation("category name must not be empty"));
        }
        let records = records
            .into_iter()
            .map(|r| r.into_record(&category))
            .collect::<Result<Vec<_>>>()?;
        categories.insert(category, records);
    }
    Ok(Catalog::new(categories))
}

pub fn parse_toml(content: &str) -> Result<Catalog> {
    let raw: RawCatalog = toml::from_str(content)?;
    convert(raw)
}

pub fn parse_json(content: &str) -> Result<Catalog> {
    let raw: RawCatalog = serde_json::from_str(content)?;
    convert(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_category_name_rejected() {
        let err = parse_json(r#"{ " ": [["a", "http://a"]] }"#).unwrap_err();
        assert!(matches!(err, DeckError::Validation(_)));
    }

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = BuiltinSource.load().unwrap();
        assert!(!catalog.is_empty());
        for name in catalog.names() {
            assert!(!catalog.records(name).is_empty(), "{} has no links", name);
        }
    }

    #[test]
    fn test_parse_toml_tables_and_arrays() {
        let content = r#"
"Servers" = [
    { name = "Shodan", url = "https://www.shodan.io", description = "Devices" },
    ["Censys", "https://search.censys.io"],
]
"#;
        let catalog = parse_toml(content).unwrap();
        let records = catalog.records("Servers");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Shodan");
        assert_eq!(records[1].url, "https://search.censys.io");
        assert_eq!(records[1].description, "");
    }

    #[test]
    fn test_parse_json_tuples_with_null_description() {
        let content = r#"{"Cat": [["A", "http://a", null], ["B", "http://b", "bee"]]}"#;
        let catalog = parse_json(content).unwrap();
        let records = catalog.records("Cat");
        assert_eq!(records[0].description, "");
        assert_eq!(records[1].description, "bee");
    }

    #[test]
    fn test_parse_rejects_short_tuple() {
        let err = parse_json(r#"{"Cat": [["only-name"]]}"#).unwrap_err();
        assert!(matches!(err, DeckError::CatalogFormat(_)));
    }

    #[test]
    fn test_file_source_picks_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"Cat": [{{"name": "A", "url": "http://a"}}]}}"#).unwrap();

        let catalog = FileSource::new(file.path()).load().unwrap();
        assert_eq!(catalog.records("Cat")[0].name, "A");
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let source = FileSource::new("/definitely/not/here/catalog.toml");
        assert!(matches!(source.load(), Err(DeckError::FileOperation(_))));
        assert!(load_catalog(&source).is_empty());
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "this is = = not toml").unwrap();
        assert!(load_catalog(&FileSource::new(file.path())).is_empty());
    }

    #[test]
    fn test_source_for_blank_path_uses_builtin() {
        assert_eq!(source_for(None).describe(), "built-in catalog");
        assert_eq!(source_for(Some("  ")).describe(), "built-in catalog");
        assert!(source_for(Some("x.toml")).describe().contains("x.toml"));
    }
}
