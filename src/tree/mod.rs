//! Core binary search tree engine shared by every tree variant.
//!
//! All variants store their nodes in an [`Arena`](crate::arena::Arena) and expose the root,
//! child, and parent links through [`BinaryTree`]. Every structural change funnels through
//! [`BinaryTree::rotate_left`], [`BinaryTree::rotate_right`], and [`BinaryTree::transplant`].

mod balance;
mod engine;
mod link;
mod seq;

pub use self::balance::{balance_tree, power_of_two_floor};
pub use self::engine::{BinaryTree, Iter, SearchTree};
pub use self::link::{Link, Node};
pub(crate) use self::seq::KeySeqVisitor;

use std::error;
use std::fmt;
use std::result;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// The tree variant does not implement the operation.
    Unsupported { operation: &'static str },
    /// An argument was outside the domain of the operation.
    InvalidArgument(String),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unsupported { operation } => write!(f, "operation not supported: {}", operation),
            Error::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
