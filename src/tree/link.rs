use crate::arena::NodeId;
use std::fmt::Debug;

/// A reference from one node to another, or to the absence of a node.
///
/// Trees differ only in how they represent absence: the plain trees use `Option<NodeId>`, while
/// the red-black tree uses a shared sentinel. Every shared algorithm is written against this trait.
pub trait Link: Copy + Debug + Eq {
    /// The value representing "no node".
    const NULL: Self;

    /// Wraps a real node.
    fn from_node(node: NodeId) -> Self;

    /// Returns the node this link points at, or `None` if it is the absence marker.
    fn node(self) -> Option<NodeId>;

    fn is_null(self) -> bool {
        self.node().is_none()
    }
}

impl Link for Option<NodeId> {
    const NULL: Self = None;

    fn from_node(node: NodeId) -> Self {
        Some(node)
    }

    fn node(self) -> Option<NodeId> {
        self
    }
}

/// A tree node holding a key and its parent and child links.
///
/// The parent link is a back-reference: whenever `b` is a child of `a`, `b.parent()` equals `a`.
/// Setters only exist on stored nodes, so the absence marker can never be written through.
pub trait Node {
    type Key;
    type Link: Link;

    fn key(&self) -> &Self::Key;

    fn parent(&self) -> Self::Link;

    fn left(&self) -> Self::Link;

    fn right(&self) -> Self::Link;

    fn set_parent(&mut self, parent: Self::Link);

    fn set_left(&mut self, left: Self::Link);

    fn set_right(&mut self, right: Self::Link);

    fn into_key(self) -> Self::Key;
}
