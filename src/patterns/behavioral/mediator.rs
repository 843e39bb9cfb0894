use crate::transcript::Transcript;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct User {
    pub name: String,
    inbox: Vec<String>,
}

impl User {
    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

/// Users never hold references to each other; every message goes through the room.
#[derive(Debug, Default)]
pub struct ChatRoom {
    users: HashMap<String, User>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, name: &str) {
        self.users.entry(name.to_string()).or_insert_with(|| User {
            name: name.to_string(),
            inbox: Vec::new(),
        });
    }

    pub fn send(&mut self, from: &str, to: &str, message: &str) -> Result<(), String> {
        if !self.users.contains_key(from) {
            return Err(format!("{from} is not in the room"));
        }
        let recipient = self
            .users
            .get_mut(to)
            .ok_or_else(|| format!("{to} is not in the room"))?;
        recipient.inbox.push(format!("[{from} -> {to}] {message}"));
        Ok(())
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.users.get(name)
    }
}

pub fn demo(out: &mut Transcript) {
    let mut room = ChatRoom::new();
    room.join("Alice");
    room.join("Bob");

    let conversation = [("Alice", "Bob", "Hi Bob!"), ("Bob", "Alice", "Hello Alice!")];
    for (from, to, message) in conversation {
        if let Err(err) = room.send(from, to, message) {
            out.line(err);
        }
    }

    for name in ["Bob", "Alice"] {
        if let Some(user) = room.user(name) {
            for message in user.inbox() {
                out.line(message);
            }
        }
    }
}

pub const EXPECTED: &[&str] = &["[Alice -> Bob] Hi Bob!", "[Bob -> Alice] Hello Alice!"];
