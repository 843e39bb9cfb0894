use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq)]
pub struct House {
    pub foundation: String,
    pub structure: String,
    pub roof: String,
}

/// Fluent builder. Every part is required; `build` reports the first one missing.
#[derive(Debug, Default)]
pub struct HouseBuilder {
    foundation: Option<String>,
    structure: Option<String>,
    roof: Option<String>,
}

impl HouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foundation(mut self, foundation: impl Into<String>) -> Self {
        self.foundation = Some(foundation.into());
        self
    }

    pub fn structure(mut self, structure: impl Into<String>) -> Self {
        self.structure = Some(structure.into());
        self
    }

    pub fn roof(mut self, roof: impl Into<String>) -> Self {
        self.roof = Some(roof.into());
        self
    }

    pub fn build(self) -> Result<House, String> {
        Ok(House {
            foundation: self.foundation.ok_or("House is missing a foundation")?,
            structure: self.structure.ok_or("House is missing a structure")?,
            roof: self.roof.ok_or("House is missing a roof")?,
        })
    }
}

pub fn demo(out: &mut Transcript) {
    let house = HouseBuilder::new()
        .foundation("Concrete")
        .structure("Wood")
        .roof("Shingles")
        .build();

    match house {
        Ok(house) => {
            out.line(format!("Foundation: {}", house.foundation));
            out.line(format!("Structure: {}", house.structure));
            out.line(format!("Roof: {}", house.roof));
        }
        Err(err) => out.line(err),
    }
}

pub const EXPECTED: &[&str] = &["Foundation: Concrete", "Structure: Wood", "Roof: Shingles"];
