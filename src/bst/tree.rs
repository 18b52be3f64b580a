use crate::arena::{Arena, NodeId};
use crate::bst::node::BstNode;
use crate::tree::{BinaryTree, KeySeqVisitor, Node, Result, SearchTree};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::result;

/// An ordered set of keys stored in an unbalanced binary search tree.
///
/// The tree hands out [`NodeId`] handles so callers can walk it in either direction with
/// [`get_successor`](SearchTree::get_successor) and
/// [`get_predecessor`](SearchTree::get_predecessor). A handle stays valid until its key is deleted.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BstTree;
/// use ordered_trees::tree::{BinaryTree, SearchTree};
///
/// let mut tree = BstTree::new();
/// tree.insert(10);
/// tree.insert(15);
/// tree.insert(5);
///
/// let min = tree.get_min().unwrap();
/// assert_eq!(tree.key(min), &5);
/// assert_eq!(tree.get_successor(min).map(|node| *tree.key(node)), Some(10));
///
/// assert_eq!(tree.delete(&10), Ok(Some(10)));
/// assert_eq!(tree.delete(&10), Ok(None));
/// assert!(tree.search(&10).is_none());
/// ```
pub struct BstTree<T> {
    nodes: Arena<BstNode<T>>,
    root: Option<NodeId>,
}

impl<T> BstTree<T> {
    /// Constructs a new, empty `BstTree<T>`.
    pub fn new() -> Self {
        BstTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Constructs a new, empty `BstTree<T>` with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        BstTree {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }
}

impl<T> BstTree<T>
where
    T: Ord,
{
    // Unlinks the node holding `key` and returns its key along with its former parent.
    pub(crate) fn remove<V>(&mut self, key: &V) -> Option<(T, Option<NodeId>)>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let node = self.find(key)?;
        let parent = self.nodes[node].parent();
        let left = self.nodes[node].left();
        let right = self.nodes[node].right();

        match (left, right) {
            (None, _) => self.transplant(node, right),
            (_, None) => self.transplant(node, left),
            (Some(left), Some(right)) => {
                let replacement = self
                    .min(Some(right))
                    .expect("Expected non-empty right subtree.");

                if replacement != right {
                    let replacement_right = self.nodes[replacement].right();
                    self.transplant(replacement, replacement_right);
                    self.set_right(replacement, Some(right));
                    self.set_parent(right, Some(replacement));
                }

                self.transplant(node, Some(replacement));
                self.set_left(replacement, Some(left));
                self.set_parent(left, Some(replacement));
            },
        }

        Some((self.nodes.free(&node).into_key(), parent))
    }
}

impl<T> BinaryTree for BstTree<T>
where
    T: Ord,
{
    type Key = T;
    type Link = Option<NodeId>;
    type Node = BstNode<T>;

    fn nodes(&self) -> &Arena<BstNode<T>> {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Arena<BstNode<T>> {
        &mut self.nodes
    }

    fn root(&self) -> Option<NodeId> {
        self.root
    }

    fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }
}

impl<T> SearchTree for BstTree<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> NodeId {
        let parent = match self.walk(&key) {
            None => {
                let node = self.nodes.allocate(BstNode::new(key, None));
                self.root = Some(node);
                return node;
            },
            Some(parent) => parent,
        };

        match key.cmp(self.key(parent)) {
            Ordering::Less => {
                let node = self.nodes.allocate(BstNode::new(key, Some(parent)));
                self.set_left(parent, Some(node));
                node
            },
            Ordering::Greater => {
                let node = self.nodes.allocate(BstNode::new(key, Some(parent)));
                self.set_right(parent, Some(node));
                node
            },
            Ordering::Equal => parent,
        }
    }

    fn delete<V>(&mut self, key: &V) -> Result<Option<T>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Ok(self.remove(key).map(|(key, _)| key))
    }
}

impl<T> Default for BstTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Two trees are equal when they hold the same keys, whatever their shapes.
impl<T> PartialEq for BstTree<T>
where
    T: Ord,
{
    fn eq(&self, other: &BstTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for BstTree<T> where T: Ord {}

impl<T> fmt::Debug for BstTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for BstTree<T>
where
    T: Ord + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T> Deserialize<'de> for BstTree<T>
where
    T: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(KeySeqVisitor::<Self>::new())
    }
}
