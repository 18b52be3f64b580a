use crate::arena::{Arena, NodeId};
use crate::red_black_tree::node::{Color, RedBlackLink, RedBlackNode, SENTINEL};
use crate::tree::{balance_tree, BinaryTree, Error, KeySeqVisitor, Node, Result, SearchTree};
use log::trace;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::result;

/// An ordered set of keys stored in a red black tree.
///
/// A red black tree is a binary search tree where every node is colored red or black such that
/// the root is black, no red node has a red child, and every path from a node down to an absent
/// link passes through the same number of black nodes. Insertion restores these invariants with
/// recoloring and at most two rotations.
///
/// Deletion is not supported and reports [`Error::Unsupported`] without touching the tree.
///
/// # Examples
///
/// ```
/// use ordered_trees::red_black_tree::{Color, RedBlackTree};
/// use ordered_trees::tree::{BinaryTree, Link, SearchTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(30);
///
/// let root = tree.get_root().node().unwrap();
/// assert_eq!(tree.key(root), &20);
/// assert_eq!(tree.color(tree.get_root()), Color::Black);
/// assert_eq!(tree.color(tree.left(tree.get_root())), Color::Red);
///
/// assert!(tree.delete(&20).is_err());
/// assert!(tree.contains(&20));
/// ```
pub struct RedBlackTree<T> {
    nodes: Arena<RedBlackNode<T>>,
    root: RedBlackLink,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    pub fn new() -> Self {
        RedBlackTree {
            nodes: Arena::new(),
            root: SENTINEL,
        }
    }

    /// Constructs a new, empty `RedBlackTree<T>` with room for `capacity` keys before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackTree {
            nodes: Arena::with_capacity(capacity),
            root: SENTINEL,
        }
    }

    /// Returns the color of `link`. The sentinel is always black.
    pub fn color(&self, link: RedBlackLink) -> Color {
        match link {
            RedBlackLink::Sentinel => Color::Black,
            RedBlackLink::Node(node) => self.nodes[node].color(),
        }
    }

    fn set_color(&mut self, node: NodeId, color: Color) {
        self.nodes[node].set_color(color);
    }

    fn is_red(&self, link: RedBlackLink) -> bool {
        self.color(link) == Color::Red
    }
}

impl<T> RedBlackTree<T>
where
    T: Ord,
{
    fn insert_fixup(&mut self, mut child: NodeId) {
        loop {
            let parent = match self.nodes[child].parent() {
                RedBlackLink::Node(parent) if self.nodes[parent].color() == Color::Red => parent,
                _ => break,
            };
            // a red parent is never the root
            let grandparent = match self.nodes[parent].parent() {
                RedBlackLink::Node(grandparent) => grandparent,
                RedBlackLink::Sentinel => break,
            };

            if self.nodes[grandparent].left() == RedBlackLink::Node(parent) {
                let uncle = self.nodes[grandparent].right();
                if let RedBlackLink::Node(uncle) = uncle {
                    if self.nodes[uncle].color() == Color::Red {
                        trace!("recoloring below {:?}", grandparent);
                        self.set_color(parent, Color::Black);
                        self.set_color(uncle, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        child = grandparent;
                        continue;
                    }
                }

                let top = if self.nodes[parent].right() == RedBlackLink::Node(child) {
                    trace!("straightening zig-zag at {:?}", parent);
                    self.rotate_left(parent)
                } else {
                    parent
                };
                trace!("rotating right at {:?}", grandparent);
                self.set_color(top, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_right(grandparent);
            } else {
                let uncle = self.nodes[grandparent].left();
                if let RedBlackLink::Node(uncle) = uncle {
                    if self.nodes[uncle].color() == Color::Red {
                        trace!("recoloring below {:?}", grandparent);
                        self.set_color(parent, Color::Black);
                        self.set_color(uncle, Color::Black);
                        self.set_color(grandparent, Color::Red);
                        child = grandparent;
                        continue;
                    }
                }

                let top = if self.nodes[parent].left() == RedBlackLink::Node(child) {
                    trace!("straightening zig-zag at {:?}", parent);
                    self.rotate_right(parent)
                } else {
                    parent
                };
                trace!("rotating left at {:?}", grandparent);
                self.set_color(top, Color::Black);
                self.set_color(grandparent, Color::Red);
                self.rotate_left(grandparent);
            }
            break;
        }

        if let RedBlackLink::Node(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Rebalances the tree with [`balance_tree`]. Returns the number of nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::red_black_tree::RedBlackTree;
    /// use ordered_trees::tree::{BinaryTree, SearchTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// for key in 0..100 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.balance().unwrap(), 100);
    /// assert_eq!(tree.height(), 7);
    /// ```
    pub fn balance(&mut self) -> Result<usize> {
        balance_tree(self)
    }
}

impl<T> BinaryTree for RedBlackTree<T>
where
    T: Ord,
{
    type Key = T;
    type Link = RedBlackLink;
    type Node = RedBlackNode<T>;

    fn nodes(&self) -> &Arena<RedBlackNode<T>> {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut Arena<RedBlackNode<T>> {
        &mut self.nodes
    }

    fn root(&self) -> RedBlackLink {
        self.root
    }

    fn set_root(&mut self, root: RedBlackLink) {
        self.root = root;
    }

    // Nodes on the deepest level are red if that level is incomplete; every other node is black.
    fn rebalanced(&mut self, node_count: usize) {
        let height = self.height();
        let is_full = (node_count + 1).is_power_of_two();
        let mut stack = Vec::new();
        if let RedBlackLink::Node(root) = self.root {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            let color = if depth == height && !is_full {
                Color::Red
            } else {
                Color::Black
            };
            self.set_color(node, color);
            if let RedBlackLink::Node(left) = self.nodes[node].left() {
                stack.push((left, depth + 1));
            }
            if let RedBlackLink::Node(right) = self.nodes[node].right() {
                stack.push((right, depth + 1));
            }
        }
    }
}

impl<T> SearchTree for RedBlackTree<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> NodeId {
        let parent = match self.walk(&key) {
            RedBlackLink::Sentinel => {
                let node = self
                    .nodes
                    .allocate(RedBlackNode::new(key, Color::Black, SENTINEL));
                self.root = RedBlackLink::Node(node);
                return node;
            },
            RedBlackLink::Node(parent) => parent,
        };

        let ordering = key.cmp(self.key(parent));
        if ordering == Ordering::Equal {
            return parent;
        }

        let node = self.nodes.allocate(RedBlackNode::new(
            key,
            Color::Red,
            RedBlackLink::Node(parent),
        ));
        if ordering == Ordering::Less {
            self.set_left(parent, RedBlackLink::Node(node));
        } else {
            self.set_right(parent, RedBlackLink::Node(node));
        }

        if self.is_red(RedBlackLink::Node(parent)) {
            self.insert_fixup(node);
        }
        node
    }

    fn delete<V>(&mut self, _key: &V) -> Result<Option<T>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Err(Error::Unsupported {
            operation: "red-black delete",
        })
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for RedBlackTree<T>
where
    T: Ord,
{
    fn eq(&self, other: &RedBlackTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RedBlackTree<T> where T: Ord {}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for RedBlackTree<T>
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

impl<'de, T> Deserialize<'de> for RedBlackTree<T>
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
