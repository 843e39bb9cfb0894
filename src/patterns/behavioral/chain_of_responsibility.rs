//! Chain of Responsibility: a request travels along a chain of handlers
//! until one of them takes it.

use crate::transcript::Transcript;

pub struct Request {
    pub description: String,
    pub severity: u8,
}

impl Request {
    pub fn new(description: impl Into<String>, severity: u8) -> Self {
        Self {
            description: description.into(),
            severity,
        }
    }
}

pub trait Handler {
    fn name(&self) -> &str;
    fn can_handle(&self, request: &Request) -> bool;
    fn next(&self) -> Option<&dyn Handler>;

    fn handle(&self, request: &Request) -> String {
        if self.can_handle(request) {
            format!("{} handled {}", self.name(), request.description)
        } else if let Some(next) = self.next() {
            next.handle(request)
        } else {
            format!("Nobody handled {}", request.description)
        }
    }
}

pub struct SupportTier {
    name: String,
    max_severity: u8,
    next: Option<Box<dyn Handler>>,
}

impl SupportTier {
    pub fn new(name: impl Into<String>, max_severity: u8) -> Self {
        Self {
            name: name.into(),
            max_severity,
            next: None,
        }
    }

    pub fn then(mut self, next: impl Handler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }
}

impl Handler for SupportTier {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_handle(&self, request: &Request) -> bool {
        request.severity <= self.max_severity
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

pub fn support_chain() -> SupportTier {
    SupportTier::new("Level 1", 1)
        .then(SupportTier::new("Level 2", 2).then(SupportTier::new("Manager", 3)))
}

pub fn demo(out: &mut Transcript) {
    let chain = support_chain();
    let requests = [
        Request::new("password reset", 1),
        Request::new("billing dispute", 2),
        Request::new("legal threat", 3),
        Request::new("alien invasion", 9),
    ];

    for request in &requests {
        out.line(chain.handle(request));
    }
}

pub const EXPECTED: &[&str] = &[
    "Level 1 handled password reset",
    "Level 2 handled billing dispute",
    "Manager handled legal threat",
    "Nobody handled alien invasion",
];
