use crate::transcript::Transcript;
use std::f64::consts::PI;

// ============================================================================
// Element hierarchy
// ============================================================================

pub struct Circle {
    pub radius: f64,
}

pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

pub trait Shape {
    fn accept(&self, visitor: &mut dyn ShapeVisitor);
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_circle(self);
    }
}

impl Shape for Rectangle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor) {
        visitor.visit_rectangle(self);
    }
}

// ============================================================================
// Visitors: new operations without touching the shapes
// ============================================================================

pub trait ShapeVisitor {
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rectangle(&mut self, rectangle: &Rectangle);
}

#[derive(Default)]
pub struct AreaCalculator {
    pub report: Vec<String>,
    pub total: f64,
}

impl ShapeVisitor for AreaCalculator {
    fn visit_circle(&mut self, circle: &Circle) {
        let area = PI * circle.radius * circle.radius;
        self.total += area;
        self.report.push(format!("Circle area: {area:.2}"));
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        let area = rectangle.width * rectangle.height;
        self.total += area;
        self.report.push(format!("Rectangle area: {area:.2}"));
    }
}

#[derive(Default)]
pub struct ShapeCounter {
    pub circles: usize,
    pub rectangles: usize,
}

impl ShapeVisitor for ShapeCounter {
    fn visit_circle(&mut self, _circle: &Circle) {
        self.circles += 1;
    }

    fn visit_rectangle(&mut self, _rectangle: &Rectangle) {
        self.rectangles += 1;
    }
}

pub fn demo(out: &mut Transcript) {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle { radius: 5.0 }),
        Box::new(Rectangle {
            width: 4.0,
            height: 6.0,
        }),
    ];

    let mut calculator = AreaCalculator::default();
    for shape in &shapes {
        shape.accept(&mut calculator);
    }
    for line in calculator.report {
        out.line(line);
    }
}

pub const EXPECTED: &[&str] = &["Circle area: 78.54", "Rectangle area: 24.00"];
