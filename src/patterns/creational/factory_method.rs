use crate::transcript::Transcript;

// ============================================================================
// Products
// ============================================================================

pub trait Transport {
    fn deliver(&self) -> String;
}

pub struct Truck;

impl Transport for Truck {
    fn deliver(&self) -> String {
        "Truck delivers by land in a box".to_string()
    }
}

pub struct Ship;

impl Transport for Ship {
    fn deliver(&self) -> String {
        "Ship delivers by sea in a container".to_string()
    }
}

// ============================================================================
// Creators: the factory method is `create_transport`
// ============================================================================

pub trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    // Shared logic only knows about the Transport trait
    fn plan_delivery(&self) -> String {
        self.create_transport().deliver()
    }
}

pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

pub fn demo(out: &mut Transcript) {
    let companies: [&dyn Logistics; 2] = [&RoadLogistics, &SeaLogistics];
    for logistics in companies {
        out.line(logistics.plan_delivery());
    }
}

pub const EXPECTED: &[&str] = &[
    "Truck delivers by land in a box",
    "Ship delivers by sea in a container",
];
