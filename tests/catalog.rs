use pattern_catalog::catalog::{self, PatternEntry, CATALOG};
use pattern_catalog::docs;
use pattern_catalog::verify;
use pattern_catalog::{CatalogConfig, CatalogError};
use std::fs;
use tempfile::TempDir;

#[test]
fn every_demo_prints_its_documented_output() {
    let entries: Vec<&PatternEntry> = CATALOG.iter().collect();
    let report = verify::verify_all(&entries);
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "{failures:#?}");
}

#[test]
fn documented_assertions_hold() {
    let run = |slug: &str| catalog::find(slug).unwrap().run().into_lines();

    assert_eq!(run("singleton")[0], "true");
    assert_eq!(run("strategy"), vec!["8", "2"]);
    assert_eq!(run("decorator"), vec!["5", "6", "6.5"]);
    assert_eq!(
        run("builder"),
        vec!["Foundation: Concrete", "Structure: Wood", "Roof: Shingles"]
    );
    assert_eq!(run("prototype"), vec!["Alice 30", "Bob 30", "Alice 30"]);
}

#[test]
fn site_round_trip_and_tamper_detection() {
    let dir = TempDir::new().unwrap();
    let config = CatalogConfig::default();

    docs::write_site(CATALOG, &config, dir.path()).unwrap();
    assert!(docs::audit_site(CATALOG, &config, dir.path()).unwrap().is_clean());

    let index = fs::read_to_string(dir.path().join(docs::INDEX_FILE)).unwrap();
    assert!(index.contains("[Singleton](Singleton/singleton.md)"));

    let page = dir.path().join("Strategy/strategy.md");
    let tampered = fs::read_to_string(&page).unwrap().replace("a - b", "b - a");
    fs::write(&page, tampered).unwrap();

    let report = docs::audit_site(CATALOG, &config, dir.path()).unwrap();
    assert_eq!(report.stale, vec!["strategy"]);
    assert!(report.missing.is_empty());
}

#[test]
fn config_from_disk_drives_index_title() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "title = \"Patterns Handbook\"\n").unwrap();

    let config = CatalogConfig::load(&path).unwrap();
    assert!(docs::render_index(CATALOG, &config).starts_with("# Patterns Handbook"));

    fs::write(&path, "title = [").unwrap();
    assert!(matches!(CatalogConfig::load(&path), Err(CatalogError::Config { .. })));
}
