use crate::error::{CatalogError, Result};
use crate::patterns::{behavioral, creational, structural};
use crate::transcript::Transcript;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Creational, Category::Structural, Category::Behavioral];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }

    pub fn parse(value: &str) -> Option<Category> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(value.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One pattern of the catalog: its snippet module, seen from the outside.
pub struct PatternEntry {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
    pub demo: fn(&mut Transcript),
    pub expected: &'static [&'static str],
    pub source: &'static str,
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("slug", &self.slug)
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

/// Serializable view used by `patterns list --json`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub summary: &'static str,
}

impl PatternEntry {
    pub fn run(&self) -> Transcript {
        tracing::debug!("Running demo for {}", self.slug);
        Transcript::capture(self.demo)
    }

    /// The snippet as shown in documentation: the module source without its tests.
    pub fn snippet(&self) -> &'static str {
        let code = match self.source.find("#[cfg(test)]") {
            Some(pos) => &self.source[..pos],
            None => self.source,
        };
        code.trim_end()
    }

    pub fn summary_row(&self) -> SummaryRow {
        SummaryRow {
            slug: self.slug,
            name: self.name,
            category: self.category,
            summary: self.summary,
        }
    }
}

macro_rules! pattern {
    ($category:ident, $dir:ident :: $module:ident, $slug:literal, $name:literal, $summary:literal) => {
        PatternEntry {
            slug: $slug,
            name: $name,
            category: Category::$category,
            summary: $summary,
            demo: $dir::$module::demo,
            expected: $dir::$module::EXPECTED,
            source: include_str!(concat!(
                "patterns/",
                stringify!($dir),
                "/",
                stringify!($module),
                ".rs"
            )),
        }
    };
}

/// Every pattern, in index order: by category, then alphabetically.
pub static CATALOG: &[PatternEntry] = &[
    // Creational
    pattern!(
        Creational,
        creational::abstract_factory,
        "abstract-factory",
        "Abstract Factory",
        "Create families of related objects without naming their concrete types."
    ),
    pattern!(
        Creational,
        creational::builder,
        "builder",
        "Builder",
        "Construct a complex object step by step through a fluent interface."
    ),
    pattern!(
        Creational,
        creational::factory_method,
        "factory-method",
        "Factory Method",
        "Let implementors decide which concrete product a creator returns."
    ),
    pattern!(
        Creational,
        creational::prototype,
        "prototype",
        "Prototype",
        "Create new objects by copying an existing instance."
    ),
    pattern!(
        Creational,
        creational::singleton,
        "singleton",
        "Singleton",
        "Share exactly one lazily created instance across the program."
    ),
    // Structural
    pattern!(
        Structural,
        structural::adapter,
        "adapter",
        "Adapter",
        "Make an existing type usable through an interface it does not implement."
    ),
    pattern!(
        Structural,
        structural::bridge,
        "bridge",
        "Bridge",
        "Split an abstraction from its implementation so both can vary."
    ),
    pattern!(
        Structural,
        structural::composite,
        "composite",
        "Composite",
        "Treat single objects and trees of objects through one interface."
    ),
    pattern!(
        Structural,
        structural::decorator,
        "decorator",
        "Decorator",
        "Add behavior to an object by wrapping it in another of the same interface."
    ),
    pattern!(
        Structural,
        structural::facade,
        "facade",
        "Facade",
        "Offer one simple entry point to a set of subsystems."
    ),
    pattern!(
        Structural,
        structural::flyweight,
        "flyweight",
        "Flyweight",
        "Share immutable state between many small objects."
    ),
    pattern!(
        Structural,
        structural::proxy,
        "proxy",
        "Proxy",
        "Stand in for another object to control when and how it is used."
    ),
    // Behavioral
    pattern!(
        Behavioral,
        behavioral::chain_of_responsibility,
        "chain-of-responsibility",
        "Chain of Responsibility",
        "Pass a request along a chain of handlers until one handles it."
    ),
    pattern!(
        Behavioral,
        behavioral::command,
        "command",
        "Command",
        "Turn a request into an object that can be stored and undone."
    ),
    pattern!(
        Behavioral,
        behavioral::iterator,
        "iterator",
        "Iterator",
        "Traverse a collection without exposing its representation."
    ),
    pattern!(
        Behavioral,
        behavioral::mediator,
        "mediator",
        "Mediator",
        "Route communication between objects through one coordinator."
    ),
    pattern!(
        Behavioral,
        behavioral::memento,
        "memento",
        "Memento",
        "Capture and restore an object's state without exposing it."
    ),
    pattern!(
        Behavioral,
        behavioral::observer,
        "observer",
        "Observer",
        "Notify a list of subscribers whenever a subject publishes an event."
    ),
    pattern!(
        Behavioral,
        behavioral::state,
        "state",
        "State",
        "Change an object's behavior by swapping its internal state object."
    ),
    pattern!(
        Behavioral,
        behavioral::strategy,
        "strategy",
        "Strategy",
        "Select an interchangeable algorithm at runtime."
    ),
    pattern!(
        Behavioral,
        behavioral::template_method,
        "template-method",
        "Template Method",
        "Fix the skeleton of an algorithm and let implementors fill in the steps."
    ),
    pattern!(
        Behavioral,
        behavioral::visitor,
        "visitor",
        "Visitor",
        "Add operations over an object structure without changing its types."
    ),
];

pub fn entries() -> &'static [PatternEntry] {
    CATALOG
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static PatternEntry> {
    CATALOG.iter().filter(move |entry| entry.category == category)
}

/// Pretty JSON array of summary rows, for `patterns list --json`.
pub fn to_json(entries: &[&PatternEntry]) -> Result<String> {
    let rows: Vec<SummaryRow> = entries.iter().map(|entry| entry.summary_row()).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Lowercases and joins alphanumeric runs with `-`: "Chain of Responsibility"
/// becomes "chain-of-responsibility".
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Finds a pattern by slug or display name, ignoring case and separators.
pub fn find(query: &str) -> Result<&'static PatternEntry> {
    let wanted = slugify(query);
    if let Some(entry) = CATALOG.iter().find(|entry| entry.slug == wanted) {
        return Ok(entry);
    }

    let suggestion = if wanted.is_empty() {
        None
    } else {
        CATALOG
            .iter()
            .find(|entry| entry.slug.starts_with(&wanted) || wanted.starts_with(entry.slug))
            .map(|entry| entry.slug.to_string())
    };
    Err(CatalogError::unknown_pattern(query, suggestion))
}
