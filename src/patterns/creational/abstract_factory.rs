//! Abstract Factory: one factory per product family, so a button and a
//! checkbox from the same factory always match.

use crate::transcript::Transcript;

pub trait Button {
    fn paint(&self) -> String;
}

pub trait Checkbox {
    fn paint(&self) -> String;
}

pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

struct WindowsButton;
struct WindowsCheckbox;
struct MacButton;
struct MacCheckbox;

impl Button for WindowsButton {
    fn paint(&self) -> String {
        "Windows button".to_string()
    }
}

impl Checkbox for WindowsCheckbox {
    fn paint(&self) -> String {
        "Windows checkbox".to_string()
    }
}

impl Button for MacButton {
    fn paint(&self) -> String {
        "Mac button".to_string()
    }
}

impl Checkbox for MacCheckbox {
    fn paint(&self) -> String {
        "Mac checkbox".to_string()
    }
}

pub struct WindowsFactory;

impl GuiFactory for WindowsFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

pub struct MacFactory;

impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

/// Client code: depends on the factory trait only.
pub fn render_form(factory: &dyn GuiFactory) -> Vec<String> {
    vec![
        factory.create_button().paint(),
        factory.create_checkbox().paint(),
    ]
}

pub fn demo(out: &mut Transcript) {
    let factories: Vec<Box<dyn GuiFactory>> = vec![Box::new(WindowsFactory), Box::new(MacFactory)];
    for factory in &factories {
        for widget in render_form(factory.as_ref()) {
            out.line(widget);
        }
    }
}

pub const EXPECTED: &[&str] = &["Windows button", "Windows checkbox", "Mac button", "Mac checkbox"];
