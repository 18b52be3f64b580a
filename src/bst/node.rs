use crate::arena::NodeId;
use crate::tree::Node;

/// A node of an unbalanced binary search tree. Absent links are `None`.
pub struct BstNode<T> {
    key: T,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> BstNode<T> {
    pub fn new(key: T, parent: Option<NodeId>) -> Self {
        BstNode {
            key,
            parent,
            left: None,
            right: None,
        }
    }
}

impl<T> Node for BstNode<T> {
    type Key = T;
    type Link = Option<NodeId>;

    fn key(&self) -> &T {
        &self.key
    }

    fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn left(&self) -> Option<NodeId> {
        self.left
    }

    fn right(&self) -> Option<NodeId> {
        self.right
    }

    fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }

    fn into_key(self) -> T {
        self.key
    }
}
