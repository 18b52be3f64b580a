use crate::arena::NodeId;
use crate::tree::{Link, Node};
use serde_derive::{Deserialize, Serialize};

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A link in a red black tree: either a stored node or the shared sentinel.
///
/// The sentinel has no storage behind it. It always reads as black with sentinel children, and
/// since every setter takes the `NodeId` of a stored node, no code path can recolor or relink it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RedBlackLink {
    Sentinel,
    Node(NodeId),
}

/// The link every red black tree uses in place of an absent node.
pub const SENTINEL: RedBlackLink = RedBlackLink::Sentinel;

impl RedBlackLink {
    pub fn is_sentinel(self) -> bool {
        self == SENTINEL
    }
}

impl Link for RedBlackLink {
    const NULL: Self = SENTINEL;

    fn from_node(node: NodeId) -> Self {
        RedBlackLink::Node(node)
    }

    fn node(self) -> Option<NodeId> {
        match self {
            RedBlackLink::Sentinel => None,
            RedBlackLink::Node(node) => Some(node),
        }
    }
}

/// A struct representing an internal node of a red black tree.
pub struct RedBlackNode<T> {
    key: T,
    color: Color,
    parent: RedBlackLink,
    left: RedBlackLink,
    right: RedBlackLink,
}

impl<T> RedBlackNode<T> {
    pub fn new(key: T, color: Color, parent: RedBlackLink) -> Self {
        RedBlackNode {
            key,
            color,
            parent,
            left: SENTINEL,
            right: SENTINEL,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl<T> Node for RedBlackNode<T> {
    type Key = T;
    type Link = RedBlackLink;

    fn key(&self) -> &T {
        &self.key
    }

    fn parent(&self) -> RedBlackLink {
        self.parent
    }

    fn left(&self) -> RedBlackLink {
        self.left
    }

    fn right(&self) -> RedBlackLink {
        self.right
    }

    fn set_parent(&mut self, parent: RedBlackLink) {
        self.parent = parent;
    }

    fn set_left(&mut self, left: RedBlackLink) {
        self.left = left;
    }

    fn set_right(&mut self, right: RedBlackLink) {
        self.right = right;
    }

    fn into_key(self) -> T {
        self.key
    }
}
