//! Template Method: `play` fixes the order of the steps; implementors fill in
//! the steps. Required trait methods play the part of abstract operations, so
//! a game that forgets one fails to compile instead of failing at runtime.

use crate::transcript::Transcript;

pub trait Game {
    fn name(&self) -> &str;

    fn initialize(&self) -> String;
    fn start(&self) -> String;

    // Hook with a default; games may override it
    fn finish(&self) -> String {
        format!("{} finished", self.name())
    }

    fn play(&self, out: &mut Transcript) {
        out.line(self.initialize());
        out.line(self.start());
        out.line(self.finish());
    }
}

pub struct Cricket;

impl Game for Cricket {
    fn name(&self) -> &str {
        "Cricket"
    }

    fn initialize(&self) -> String {
        "Cricket initialized".to_string()
    }

    fn start(&self) -> String {
        "Cricket started".to_string()
    }
}

pub struct Football;

impl Game for Football {
    fn name(&self) -> &str {
        "Football"
    }

    fn initialize(&self) -> String {
        "Football initialized".to_string()
    }

    fn start(&self) -> String {
        "Football started".to_string()
    }
}

pub fn demo(out: &mut Transcript) {
    let games: [&dyn Game; 2] = [&Cricket, &Football];
    for game in games {
        game.play(out);
    }
}

pub const EXPECTED: &[&str] = &[
    "Cricket initialized",
    "Cricket started",
    "Cricket finished",
    "Football initialized",
    "Football started",
    "Football finished",
];
