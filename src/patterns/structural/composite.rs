use crate::transcript::Transcript;

/// Leaves and containers answer the same questions.
pub trait Component {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
}

pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl Component for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }
}

pub struct Directory {
    name: String,
    children: Vec<Box<dyn Component>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: Box<dyn Component>) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.children.iter().map(|child| child.size()).sum()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut docs = Directory::new("docs");
    docs.add(Box::new(File::new("c.md", 100)))
        .add(Box::new(File::new("d.md", 200)));
    let docs_size = docs.size();

    let mut root = Directory::new("root");
    root.add(Box::new(File::new("a.txt", 100)))
        .add(Box::new(File::new("b.txt", 200)))
        .add(Box::new(docs));

    out.line(format!("{}: {}", root.name(), root.size()));
    out.line(format!("docs: {docs_size}"));
}

pub const EXPECTED: &[&str] = &["root: 600", "docs: 300"];
