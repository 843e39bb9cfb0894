use crate::transcript::Transcript;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug, Default)]
pub struct Light {
    on: bool,
}

impl Light {
    pub fn turn_on(&mut self) {
        self.on = true;
    }

    pub fn turn_off(&mut self) {
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn status(&self) -> &'static str {
        if self.on {
            "Light is on"
        } else {
            "Light is off"
        }
    }
}

// ============================================================================
// Commands
// ============================================================================

pub trait Command {
    fn execute(&mut self);
    fn undo(&mut self);
}

pub struct LightOn {
    light: Rc<RefCell<Light>>,
}

impl LightOn {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOn {
    fn execute(&mut self) {
        self.light.borrow_mut().turn_on();
    }

    fn undo(&mut self) {
        self.light.borrow_mut().turn_off();
    }
}

pub struct LightOff {
    light: Rc<RefCell<Light>>,
}

impl LightOff {
    pub fn new(light: Rc<RefCell<Light>>) -> Self {
        Self { light }
    }
}

impl Command for LightOff {
    fn execute(&mut self) {
        self.light.borrow_mut().turn_off();
    }

    fn undo(&mut self) {
        self.light.borrow_mut().turn_on();
    }
}

// ============================================================================
// Invoker
// ============================================================================

#[derive(Default)]
pub struct RemoteControl {
    history: Vec<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, mut command: Box<dyn Command>) {
        command.execute();
        self.history.push(command);
    }

    /// Returns false when there is nothing left to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(mut command) => {
                command.undo();
                true
            }
            None => false,
        }
    }
}

pub fn demo(out: &mut Transcript) {
    let light = Rc::new(RefCell::new(Light::default()));
    let mut remote = RemoteControl::new();

    remote.press(Box::new(LightOn::new(light.clone())));
    out.line(light.borrow().status());

    remote.press(Box::new(LightOff::new(light.clone())));
    out.line(light.borrow().status());

    remote.undo();
    out.line(light.borrow().status());
}

pub const EXPECTED: &[&str] = &["Light is on", "Light is off", "Light is on"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(Transcript::capture(demo).lines(), EXPECTED);
    }

    #[test]
    fn test_undo_everything() {
        let light = Rc::new(RefCell::new(Light::default()));
        let mut remote = RemoteControl::new();
        remote.press(Box::new(LightOn::new(light.clone())));

        assert!(remote.undo());
        assert!(!light.borrow().is_on());
        assert!(!remote.undo());
    }
}
