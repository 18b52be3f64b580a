//! Unbalanced binary search tree with parent links.
//!
//! Keys are attached as leaves in the order they arrive, so the shape of the tree depends on the
//! insertion order. Use [`balance_tree`](crate::tree::balance_tree) to flatten it after the fact.

mod node;
mod tree;

pub use self::node::BstNode;
pub use self::tree::BstTree;
