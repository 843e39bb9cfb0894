//! State: the light delegates to its current state object, and each state
//! decides which one comes next.

use crate::transcript::Transcript;

pub trait State {
    fn name(&self) -> &'static str;
    fn next(self: Box<Self>) -> Box<dyn State>;
}

struct Green;
struct Yellow;
struct Red;

impl State for Green {
    fn name(&self) -> &'static str {
        "Green"
    }

    fn next(self: Box<Self>) -> Box<dyn State> {
        Box::new(Yellow)
    }
}

impl State for Yellow {
    fn name(&self) -> &'static str {
        "Yellow"
    }

    fn next(self: Box<Self>) -> Box<dyn State> {
        Box::new(Red)
    }
}

impl State for Red {
    fn name(&self) -> &'static str {
        "Red"
    }

    fn next(self: Box<Self>) -> Box<dyn State> {
        Box::new(Green)
    }
}

pub struct TrafficLight {
    state: Option<Box<dyn State>>,
}

impl TrafficLight {
    pub fn new() -> Self {
        Self {
            state: Some(Box::new(Green)),
        }
    }

    pub fn current(&self) -> &'static str {
        self.state.as_ref().map_or("Off", |state| state.name())
    }

    pub fn advance(&mut self) {
        if let Some(state) = self.state.take() {
            self.state = Some(state.next());
        }
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut light = TrafficLight::new();
    out.line(light.current());
    for _ in 0..3 {
        light.advance();
        out.line(light.current());
    }
}

pub const EXPECTED: &[&str] = &["Green", "Yellow", "Red", "Green"];
