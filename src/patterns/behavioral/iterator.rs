//! Iterator: walk a collection without exposing how it is stored. Rust
//! builds the pattern into the language through `Iterator` and `IntoIterator`.

use crate::transcript::Transcript;

pub struct NameRepository {
    names: Vec<String>,
}

impl NameRepository {
    pub fn new(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
        }
    }

    pub fn iter(&self) -> NameIter<'_> {
        NameIter {
            repository: self,
            index: 0,
        }
    }
}

pub struct NameIter<'a> {
    repository: &'a NameRepository,
    index: usize,
}

impl<'a> Iterator for NameIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.repository.names.get(self.index)?;
        self.index += 1;
        Some(name.as_str())
    }
}

impl<'a> IntoIterator for &'a NameRepository {
    type Item = &'a str;
    type IntoIter = NameIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn demo(out: &mut Transcript) {
    let repository = NameRepository::new(&["Robert", "John", "Julie", "Lora"]);
    for name in &repository {
        out.line(name);
    }
}

pub const EXPECTED: &[&str] = &["Robert", "John", "Julie", "Lora"];
