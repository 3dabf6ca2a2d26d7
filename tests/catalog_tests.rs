//! 目录加载集成测试

use std::fs;

use searchdeck::catalog::{BuiltinSource, CatalogSource, FileSource, load_catalog, source_for};
use searchdeck::config::AppConfig;
use tempfile::TempDir;

const TOML_CATALOG: &str = r#"
"Cat1" = [
    { name = "N1", url = "http://x.com", description = "d1" },
]
"Cat2" = [
    ["N2", "http://y.com", ""],
]
"#;

#[test]
fn test_toml_file_source() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, TOML_CATALOG).unwrap();

    let catalog = FileSource::new(&path).load().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records("Cat1")[0].description, "d1");
    assert_eq!(catalog.records("Cat2")[0].url, "http://y.com");
}

#[test]
fn test_json_file_source_preserves_record_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.JSON");
    fs::write(
        &path,
        r#"{"Servers": [["Zeta", "http://z"], {"name": "Alpha", "url": "http://a"}]}"#,
    )
    .unwrap();

    let catalog = load_catalog(&FileSource::new(&path));
    let names: Vec<&str> = catalog
        .records("Servers")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn test_unreadable_sources_degrade_to_empty() {
    let dir = TempDir::new().unwrap();

    let missing = dir.path().join("missing.toml");
    assert!(load_catalog(&FileSource::new(&missing)).is_empty());

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ not json").unwrap();
    assert!(load_catalog(&FileSource::new(&broken)).is_empty());
}

#[test]
fn test_builtin_catalog_has_links() {
    let catalog = load_catalog(&BuiltinSource);
    assert!(catalog.len() >= 5);
    assert!(catalog.record_count() > catalog.len());
    for name in catalog.names() {
        for record in catalog.records(name) {
            assert!(!record.name.is_empty(), "{} has an unnamed record", name);
        }
    }
}

#[test]
fn test_config_catalog_path_selects_file_source() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("links.toml");
    fs::write(&catalog_path, TOML_CATALOG).unwrap();

    let config_path = dir.path().join("searchdeck.toml");
    fs::write(
        &config_path,
        format!(
            "[catalog]\npath = {:?}\n\n[logging]\nlevel = \"debug\"\n",
            catalog_path.to_str().unwrap()
        ),
    )
    .unwrap();

    let config = AppConfig::try_load(config_path.to_str()).unwrap();
    assert_eq!(config.logging.level, "debug");

    let source = source_for(config.catalog.path.as_deref());
    assert!(source.describe().contains("links.toml"));
    assert_eq!(load_catalog(source.as_ref()).len(), 2);
}
