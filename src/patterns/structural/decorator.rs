//! Decorator: wrap an object in another that implements the same trait and
//! adds to its behavior. Wrappers stack in any order.

use crate::transcript::Transcript;

pub trait Coffee {
    fn cost(&self) -> f64;
}

pub struct BasicCoffee;

impl Coffee for BasicCoffee {
    fn cost(&self) -> f64 {
        5.0
    }
}

pub struct MilkDecorator {
    coffee: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for MilkDecorator {
    fn cost(&self) -> f64 {
        self.coffee.cost() + 1.0
    }
}

pub struct SugarDecorator {
    coffee: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        Self { coffee }
    }
}

impl Coffee for SugarDecorator {
    fn cost(&self) -> f64 {
        self.coffee.cost() + 0.5
    }
}

pub fn demo(out: &mut Transcript) {
    let coffee = BasicCoffee;
    out.line(coffee.cost());

    let coffee_with_milk = MilkDecorator::new(Box::new(coffee));
    out.line(coffee_with_milk.cost());

    let coffee_with_milk_and_sugar = SugarDecorator::new(Box::new(coffee_with_milk));
    out.line(coffee_with_milk_and_sugar.cost());
}

pub const EXPECTED: &[&str] = &["5", "6", "6.5"];
