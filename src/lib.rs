//! # Design Patterns Catalog
//!
//! Classic design patterns, each written as a small self-contained Rust
//! snippet with a runnable `demo` and the output it is documented to print.
//!
//! ## Creational
//! - Singleton, Factory Method, Abstract Factory, Builder, Prototype
//!
//! ## Structural
//! - Adapter, Bridge, Composite, Decorator, Facade, Flyweight, Proxy
//!
//! ## Behavioral
//! - Chain of Responsibility, Command, Iterator, Mediator, Memento,
//!   Observer, State, Strategy, Template Method, Visitor
//!
//! The [`catalog`] ties the snippets together for the `patterns` binary:
//! ```bash
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run strategy
//! cargo run --bin patterns -- verify
//! cargo run --bin patterns -- docs --out docs
//! ```

pub mod catalog;
pub mod config;
pub mod docs;
pub mod error;
pub mod logging;
pub mod patterns;
pub mod transcript;
pub mod verify;

pub use catalog::{Category, PatternEntry, CATALOG};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use transcript::Transcript;
