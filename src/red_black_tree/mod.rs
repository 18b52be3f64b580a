//! Self-balancing binary search tree that uses a color bit to keep every root-to-leaf path within
//! a factor of two of every other.
//!
//! Absent links point at a shared black [`SENTINEL`] instead of being `None`, so the insertion
//! fixup can read the color of a missing uncle without special-casing it.

mod node;
mod tree;

pub use self::node::{Color, RedBlackLink, RedBlackNode, SENTINEL};
pub use self::tree::RedBlackTree;
