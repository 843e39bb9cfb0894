//! Memento: capture an object's state so it can be restored later, without
//! exposing the state's internals to whoever stores the snapshot.

use crate::transcript::Transcript;

/// Opaque snapshot. Only `Editor` can read it back.
#[derive(Debug, Clone)]
pub struct Memento {
    content: String,
}

#[derive(Debug, Default)]
pub struct Editor {
    content: String,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn save(&self) -> Memento {
        Memento {
            content: self.content.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.content = memento.content.clone();
    }
}

/// Caretaker: keeps snapshots but never looks inside them.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<Memento>,
}

impl History {
    pub fn push(&mut self, memento: Memento) {
        self.snapshots.push(memento);
    }

    pub fn pop(&mut self) -> Option<Memento> {
        self.snapshots.pop()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut editor = Editor::new();
    let mut history = History::default();

    editor.write("Hello");
    history.push(editor.save());
    editor.write(", World");
    out.line(format!("Current: {}", editor.content()));

    if let Some(snapshot) = history.pop() {
        editor.restore(&snapshot);
    }
    out.line(format!("Restored: {}", editor.content()));
}

pub const EXPECTED: &[&str] = &["Current: Hello, World", "Restored: Hello"];
