//! Bridge: the shape abstraction and the rendering implementation vary
//! independently. A circle holds a renderer instead of subclassing per backend.

use crate::transcript::Transcript;

pub trait Renderer {
    fn render_circle(&self, radius: f64) -> String;
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing Circle of radius {radius} as vectors")
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render_circle(&self, radius: f64) -> String {
        format!("Drawing Circle of radius {radius} as pixels")
    }
}

pub struct Circle {
    radius: f64,
    renderer: Box<dyn Renderer>,
}

impl Circle {
    pub fn new(radius: f64, renderer: Box<dyn Renderer>) -> Self {
        Self { radius, renderer }
    }

    pub fn draw(&self) -> String {
        self.renderer.render_circle(self.radius)
    }

    pub fn resize(&mut self, factor: f64) {
        self.radius *= factor;
    }
}

pub fn demo(out: &mut Transcript) {
    let shapes = [
        Circle::new(5.0, Box::new(VectorRenderer)),
        Circle::new(5.0, Box::new(RasterRenderer)),
    ];
    for shape in &shapes {
        out.line(shape.draw());
    }
}

pub const EXPECTED: &[&str] = &[
    "Drawing Circle of radius 5 as vectors",
    "Drawing Circle of radius 5 as pixels",
];
