//! Ordered, in-memory binary search trees with parent links.
//!
//! Three variants share one engine ([`tree::BinaryTree`]) and one container contract
//! ([`tree::SearchTree`]):
//!
//! - [`bst::BstTree`]: an unbalanced tree.
//! - [`red_black_tree::RedBlackTree`]: a self-balancing tree with a shared black sentinel.
//! - [`splay_tree::SplayTree`]: a self-adjusting tree that moves accessed nodes to the root.
//!
//! [`tree::balance_tree`] rebalances any of them in place with the Day-Stout-Warren algorithm.
//!
//! The trees are single-owner structures without internal locking.

pub mod arena;
pub mod bst;
pub mod red_black_tree;
pub mod splay_tree;
pub mod tree;
