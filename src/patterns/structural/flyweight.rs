//! Flyweight: many trees share a few immutable `TreeType` values. The factory
//! hands out the same `Arc` for the same intrinsic state.

use crate::transcript::Transcript;
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct TreeType {
    pub name: String,
    pub color: String,
}

#[derive(Default)]
pub struct TreeFactory {
    types: DashMap<(String, String), Arc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tree_type(&self, name: &str, color: &str) -> Arc<TreeType> {
        self.types
            .entry((name.to_string(), color.to_string()))
            .or_insert_with(|| {
                Arc::new(TreeType {
                    name: name.to_string(),
                    color: color.to_string(),
                })
            })
            .clone()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

// Extrinsic state (position) lives in each tree, intrinsic state is shared
pub struct Tree {
    pub x: i32,
    pub y: i32,
    pub kind: Arc<TreeType>,
}

#[derive(Default)]
pub struct Forest {
    factory: TreeFactory,
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant(&mut self, x: i32, y: i32, name: &str, color: &str) {
        let kind = self.factory.tree_type(name, color);
        self.trees.push(Tree { x, y, kind });
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn type_count(&self) -> usize {
        self.factory.type_count()
    }
}

pub fn demo(out: &mut Transcript) {
    let mut forest = Forest::new();
    forest.plant(1, 1, "Oak", "green");
    forest.plant(2, 3, "Oak", "green");
    forest.plant(5, 8, "Birch", "white");
    forest.plant(13, 21, "Birch", "white");

    out.line(format!("trees: {}", forest.trees().len()));
    out.line(format!("tree types: {}", forest.type_count()));
}

pub const EXPECTED: &[&str] = &["trees: 4", "tree types: 2"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_output() {
        assert_eq!(Transcript::capture(demo).lines(), EXPECTED);
    }

    #[test]
    fn test_same_key_shares_instance() {
        let factory = TreeFactory::new();
        let a = factory.tree_type("Oak", "green");
        let b = factory.tree_type("Oak", "green");
        let c = factory.tree_type("Oak", "red");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(factory.type_count(), 2);
    }

    #[test]
    fn test_trees_keep_own_position() {
        let mut forest = Forest::new();
        forest.plant(1, 2, "Pine", "dark");
        forest.plant(3, 4, "Pine", "dark");

        let trees = forest.trees();
        assert_eq!((trees[0].x, trees[0].y), (1, 2));
        assert_eq!((trees[1].x, trees[1].y), (3, 4));
        assert!(Arc::ptr_eq(&trees[0].kind, &trees[1].kind));
    }
}
