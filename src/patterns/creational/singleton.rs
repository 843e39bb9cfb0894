//! Singleton: a single shared instance, created lazily on first lookup.
//!
//! `OnceLock` runs the initializer at most once, even when several threads
//! race for the first lookup. No `static mut`, no `unsafe`.

use crate::transcript::Transcript;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Singleton {
    label: &'static str,
}

impl Singleton {
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
            Singleton { label: "shared" }
        })
    }

    pub fn label(&self) -> &str {
        self.label
    }
}

/// How many times the initializer has run in this process.
pub fn initializations() -> usize {
    INITIALIZATIONS.load(Ordering::SeqCst)
}

pub fn demo(out: &mut Transcript) {
    let singleton1 = Singleton::instance();
    let singleton2 = Singleton::instance();

    out.line(std::ptr::eq(singleton1, singleton2));
    out.line(format!("initialized {} time(s)", initializations()));
}

pub const EXPECTED: &[&str] = &["true", "initialized 1 time(s)"];
