use crate::transcript::Transcript;
use std::cell::OnceCell;

pub trait Image {
    fn display(&self, out: &mut Transcript);
}

pub struct RealImage {
    filename: String,
}

impl RealImage {
    // Expensive: only the proxy decides when this happens
    pub fn load(filename: &str, out: &mut Transcript) -> Self {
        out.line(format!("Loading {filename}"));
        Self {
            filename: filename.to_string(),
        }
    }
}

impl Image for RealImage {
    fn display(&self, out: &mut Transcript) {
        out.line(format!("Displaying {}", self.filename));
    }
}

/// Stands in for a `RealImage` and loads it on first display.
pub struct ImageProxy {
    filename: String,
    real: OnceCell<RealImage>,
}

impl ImageProxy {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: OnceCell::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.get().is_some()
    }
}

impl Image for ImageProxy {
    fn display(&self, out: &mut Transcript) {
        let image = self
            .real
            .get_or_init(|| RealImage::load(&self.filename, out));
        image.display(out);
    }
}

pub fn demo(out: &mut Transcript) {
    let image = ImageProxy::new("photo.png");
    image.display(out);
    image.display(out);
}

pub const EXPECTED: &[&str] = &["Loading photo.png", "Displaying photo.png", "Displaying photo.png"];
