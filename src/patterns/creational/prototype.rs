//! Prototype: new objects are copies of an existing one. In Rust the
//! prototype interface is simply `Clone`.

use crate::transcript::Transcript;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.age)
    }
}

pub fn demo(out: &mut Transcript) {
    let original = Person::new("Alice", 30);
    out.line(&original);

    let mut copy = original.clone();
    copy.name = "Bob".to_string();
    out.line(&copy);

    // The clone owns its own String, so the original is untouched
    out.line(&original);
}

pub const EXPECTED: &[&str] = &["Alice 30", "Bob 30", "Alice 30"];
