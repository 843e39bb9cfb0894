//! Markdown documentation for the catalog: an index page linking every
//! pattern, one page per pattern, and an audit of an existing docs tree.

use crate::catalog::{Category, PatternEntry};
use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const INDEX_FILE: &str = "README.md";

lazy_static! {
    static ref RUST_FENCE: Regex = Regex::new(r"(?m)^```rust[ \t]*$").expect("valid regex");
}

/// Path of a pattern page relative to the docs root: `<Name>/<slug>.md`.
pub fn page_path(entry: &PatternEntry) -> PathBuf {
    Path::new(entry.name).join(format!("{}.md", entry.slug))
}

fn page_link(entry: &PatternEntry) -> String {
    format!("{}/{}.md", entry.name.replace(' ', "%20"), entry.slug)
}

pub fn render_index(entries: &[PatternEntry], config: &CatalogConfig) -> String {
    let mut page = format!("# {}\n", config.title);

    for category in Category::ALL {
        let rows: Vec<&PatternEntry> = entries.iter().filter(|e| e.category == category).collect();
        if rows.is_empty() {
            continue;
        }

        let _ = write!(page, "\n## {category}\n\n| Pattern | Summary |\n| --- | --- |\n");
        for entry in rows {
            let _ = writeln!(page, "| [{}]({}) | {} |", entry.name, page_link(entry), entry.summary);
        }
    }
    page
}

pub fn render_page(entry: &PatternEntry) -> String {
    format!(
        "# {name}\n\n*Category:* {category}\n\n{summary}\n\n## Rust\n\n```rust\n{code}\n```\n\n## Output\n\n```text\n{output}\n```\n",
        name = entry.name,
        category = entry.category,
        summary = entry.summary,
        code = entry.snippet(),
        output = entry.expected.iter().join("\n"),
    )
}

#[derive(Debug, Clone, Default)]
pub struct SiteSummary {
    pub written: Vec<PathBuf>,
}

impl SiteSummary {
    pub fn pages(&self) -> usize {
        self.written.len()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| CatalogError::io(parent, err))?;
    }
    fs::write(path, content).map_err(|err| CatalogError::io(path, err))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

/// Writes the index and every pattern page under `root`.
pub fn write_site(entries: &[PatternEntry], config: &CatalogConfig, root: &Path) -> Result<SiteSummary> {
    let mut summary = SiteSummary::default();

    let index = root.join(INDEX_FILE);
    write_file(&index, &render_index(entries, config))?;
    summary.written.push(index);

    for entry in entries {
        let path = root.join(page_path(entry));
        write_file(&path, &render_page(entry))?;
        summary.written.push(path);
    }
    Ok(summary)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub index_current: bool,
    pub missing: Vec<&'static str>,
    pub stale: Vec<&'static str>,
    pub without_rust: Vec<&'static str>,
    pub orphans: Vec<PathBuf>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.index_current
            && self.missing.is_empty()
            && self.stale.is_empty()
            && self.without_rust.is_empty()
            && self.orphans.is_empty()
    }
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(CatalogError::io(path, err)),
    }
}

/// Compares a docs tree on disk with what `write_site` would produce.
pub fn audit_site(entries: &[PatternEntry], config: &CatalogConfig, root: &Path) -> Result<AuditReport> {
    let mut report = AuditReport {
        index_current: read_if_exists(&root.join(INDEX_FILE))?
            .is_some_and(|content| content == render_index(entries, config)),
        ..AuditReport::default()
    };
    if !report.index_current {
        tracing::warn!("Index {} is missing or out of date", root.join(INDEX_FILE).display());
    }

    let mut known: HashSet<PathBuf> = HashSet::new();
    known.insert(PathBuf::from(INDEX_FILE));

    for entry in entries {
        let relative = page_path(entry);
        let content = read_if_exists(&root.join(&relative))?;
        known.insert(relative);

        let Some(content) = content else {
            tracing::warn!("{}: page missing", entry.slug);
            report.missing.push(entry.slug);
            continue;
        };
        if !RUST_FENCE.is_match(&content) {
            tracing::warn!("{}: page has no rust block", entry.slug);
            report.without_rust.push(entry.slug);
        }
        if content != render_page(entry) {
            tracing::warn!("{}: page is stale", entry.slug);
            report.stale.push(entry.slug);
        }
    }

    // A docs tree that was never written has no orphans, only missing pages
    if !root.is_dir() {
        return Ok(report);
    }

    for item in WalkDir::new(root).sort_by_file_name() {
        let item = item.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            CatalogError::io(path, err.into())
        })?;
        let path = item.path();
        if !item.file_type().is_file() || path.extension().map_or(true, |ext| !ext.eq_ignore_ascii_case("md")) {
            continue;
        }
        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        if !known.contains(&relative) {
            tracing::warn!("Orphan page {}", relative.display());
            report.orphans.push(relative);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find, CATALOG};
    use tempfile::TempDir;

    #[test]
    fn test_index_links_every_pattern() {
        let index = render_index(CATALOG, &CatalogConfig::default());
        assert!(index.starts_with("# Design Patterns\n"));
        for entry in CATALOG {
            assert!(index.contains(&format!("[{}]({})", entry.name, page_link(entry))));
        }
        assert!(index.contains("## Creational"));
        assert!(index.contains("## Behavioral"));
    }

    #[test]
    fn test_index_encodes_spaces() {
        let entry = find("chain of responsibility").unwrap();
        assert_eq!(
            page_link(entry),
            "Chain%20of%20Responsibility/chain-of-responsibility.md"
        );
    }

    #[test]
    fn test_index_uses_configured_title() {
        let config = CatalogConfig {
            title: "Patterns in Rust".to_string(),
            ..CatalogConfig::default()
        };
        assert!(render_index(CATALOG, &config).starts_with("# Patterns in Rust\n"));
    }

    #[test]
    fn test_index_skips_empty_categories() {
        let index = render_index(&CATALOG[..1], &CatalogConfig::default());
        assert!(index.contains("## Creational"));
        assert!(!index.contains("## Structural"));
    }

    #[test]
    fn test_page_has_code_and_output() {
        let entry = find("strategy").unwrap();
        let page = render_page(entry);
        assert!(page.starts_with("# Strategy\n"));
        assert!(RUST_FENCE.is_match(&page));
        assert!(page.contains("pub trait Strategy"));
        assert!(page.contains("```text\n8\n2\n```"));
        assert!(!page.contains("mod tests"));
    }

    #[test]
    fn test_written_site_audits_clean() {
        let dir = TempDir::new().unwrap();
        let config = CatalogConfig::default();

        let summary = write_site(CATALOG, &config, dir.path()).unwrap();
        assert_eq!(summary.pages(), CATALOG.len() + 1);
        assert!(dir.path().join("Decorator/decorator.md").is_file());

        let report = audit_site(CATALOG, &config, dir.path()).unwrap();
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_audit_finds_problems() {
        let dir = TempDir::new().unwrap();
        let config = CatalogConfig::default();
        write_site(CATALOG, &config, dir.path()).unwrap();

        fs::remove_file(dir.path().join("Proxy/proxy.md")).unwrap();
        fs::write(dir.path().join("Visitor/visitor.md"), "# Visitor\n").unwrap();
        fs::write(dir.path().join("notes.md"), "scratch").unwrap();

        let report = audit_site(CATALOG, &config, dir.path()).unwrap();
        assert!(!report.is_clean());
        assert!(report.index_current);
        assert_eq!(report.missing, vec!["proxy"]);
        assert_eq!(report.stale, vec!["visitor"]);
        assert_eq!(report.without_rust, vec!["visitor"]);
        assert_eq!(report.orphans, vec![PathBuf::from("notes.md")]);
    }

    #[test]
    fn test_audit_never_written_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("never-written");

        let report = audit_site(CATALOG, &CatalogConfig::default(), &root).unwrap();
        assert!(!report.is_clean());
        assert!(!report.index_current);
        assert_eq!(report.missing.len(), CATALOG.len());
        assert!(report.orphans.is_empty());
    }

    #[test]
    fn test_audit_orphan_extension_ignores_case() {
        let dir = TempDir::new().unwrap();
        let config = CatalogConfig::default();
        write_site(CATALOG, &config, dir.path()).unwrap();
        fs::write(dir.path().join("EXTRA.MD"), "shouting").unwrap();

        let report = audit_site(CATALOG, &config, dir.path()).unwrap();
        assert_eq!(report.orphans, vec![PathBuf::from("EXTRA.MD")]);
    }

    #[test]
    fn test_audit_empty_directory() {
        let dir = TempDir::new().unwrap();
        let report = audit_site(CATALOG, &CatalogConfig::default(), dir.path()).unwrap();
        assert!(!report.index_current);
        assert_eq!(report.missing.len(), CATALOG.len());
    }
}
