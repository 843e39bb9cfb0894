use crate::transcript::Transcript;

pub trait Strategy {
    fn execute(&self, a: i32, b: i32) -> i32;
}

pub struct Add;

impl Strategy for Add {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

pub struct Subtract;

impl Strategy for Subtract {
    fn execute(&self, a: i32, b: i32) -> i32 {
        a - b
    }
}

// Any matching closure is a strategy too
impl<F> Strategy for F
where
    F: Fn(i32, i32) -> i32,
{
    fn execute(&self, a: i32, b: i32) -> i32 {
        self(a, b)
    }
}

pub struct Context {
    strategy: Box<dyn Strategy>,
}

impl Context {
    pub fn new(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategy = strategy;
    }

    pub fn execute(&self, a: i32, b: i32) -> i32 {
        self.strategy.execute(a, b)
    }
}

pub fn demo(out: &mut Transcript) {
    let mut context = Context::new(Box::new(Add));
    out.line(context.execute(5, 3));

    context.set_strategy(Box::new(Subtract));
    out.line(context.execute(5, 3));
}

pub const EXPECTED: &[&str] = &["8", "2"];
