//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.

mod tree;

pub use self::tree::SplayTree;
