//! Link catalog
//!
//! The catalog maps a category name to an ordered list of link records.
//! It is loaded once at startup and never mutated afterwards.

mod source;

pub use source::{
    BuiltinSource, CatalogSource, FileSource, load_catalog, parse_json, parse_toml, source_for,
};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category key, unique within a catalog
pub type CategoryName = String;

/// 单条链接记录：(名称, 链接, 描述)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl LinkRecord {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
        }
    }
}

/// Read-only category → records mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: BTreeMap<CategoryName, Vec<LinkRecord>>,
}

impl Catalog {
    pub fn new(categories: BTreeMap<CategoryName, Vec<LinkRecord>>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Total number of records across all categories
    pub fn record_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Category names, in no particular display order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Records of one category; unknown categories have none
    pub fn records(&self, category: &str) -> &[LinkRecord] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Build the sub-mapping for a submission, keeping the submitted order
    pub fn subset<S: AsRef<str>>(&self, categories: &[S]) -> Vec<(CategoryName, Vec<LinkRecord>)> {
        categories
            .iter()
            .map(|c| {
                let name = c.as_ref();
                (name.to_string(), self.records(name).to_vec())
            })
            .collect()
    }
}

impl FromIterator<(CategoryName, Vec<LinkRecord>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (CategoryName, Vec<LinkRecord>)>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}
