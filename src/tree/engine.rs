use crate::arena::{Arena, NodeId};
use crate::tree::link::{Link, Node};
use crate::tree::Result;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

/// Storage and structural primitives of a binary search tree with parent links.
///
/// Implementors provide access to their node arena and root; everything else is provided: the
/// search walk, extremes, in-order neighbours, transplant, and the two rotations. None of the
/// provided methods validate the tree; they assume it is well formed on entry.
pub trait BinaryTree {
    type Key: Ord;
    type Link: Link;
    type Node: Node<Key = Self::Key, Link = Self::Link>;

    fn nodes(&self) -> &Arena<Self::Node>;

    fn nodes_mut(&mut self) -> &mut Arena<Self::Node>;

    fn root(&self) -> Self::Link;

    fn set_root(&mut self, root: Self::Link);

    /// Called by [`balance_tree`](crate::tree::balance_tree) after it has reshaped the tree, so a
    /// variant can recompute metadata that rotations do not maintain. Does nothing by default.
    fn rebalanced(&mut self, _node_count: usize) {}

    fn is_null(&self, link: Self::Link) -> bool {
        link.is_null()
    }

    /// Returns the key stored in `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the tree.
    fn key(&self, node: NodeId) -> &Self::Key {
        self.nodes()[node].key()
    }

    /// Returns the parent of `link`, or the absence marker if `link` is absent or the root.
    fn parent(&self, link: Self::Link) -> Self::Link {
        match link.node() {
            Some(node) => self.nodes()[node].parent(),
            None => Self::Link::NULL,
        }
    }

    fn left(&self, link: Self::Link) -> Self::Link {
        match link.node() {
            Some(node) => self.nodes()[node].left(),
            None => Self::Link::NULL,
        }
    }

    fn right(&self, link: Self::Link) -> Self::Link {
        match link.node() {
            Some(node) => self.nodes()[node].right(),
            None => Self::Link::NULL,
        }
    }

    fn set_parent(&mut self, node: NodeId, parent: Self::Link) {
        self.nodes_mut()[node].set_parent(parent);
    }

    fn set_left(&mut self, node: NodeId, left: Self::Link) {
        self.nodes_mut()[node].set_left(left);
    }

    fn set_right(&mut self, node: NodeId, right: Self::Link) {
        self.nodes_mut()[node].set_right(right);
    }

    /// Returns the number of nodes in the tree.
    fn len(&self) -> usize {
        self.nodes().len()
    }

    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Some(root) = self.root().node() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            height = cmp::max(height, depth);
            if let Some(left) = self.nodes()[node].left().node() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = self.nodes()[node].right().node() {
                stack.push((right, depth + 1));
            }
        }
        height
    }

    /// Returns the leftmost node of the subtree rooted at `root`.
    fn min(&self, root: Self::Link) -> Self::Link {
        let mut prev = Self::Link::NULL;
        let mut curr = root;
        while let Some(node) = curr.node() {
            prev = curr;
            curr = self.nodes()[node].left();
        }
        prev
    }

    /// Returns the rightmost node of the subtree rooted at `root`.
    fn max(&self, root: Self::Link) -> Self::Link {
        let mut prev = Self::Link::NULL;
        let mut curr = root;
        while let Some(node) = curr.node() {
            prev = curr;
            curr = self.nodes()[node].right();
        }
        prev
    }

    /// Returns the node with the next larger key, or the absence marker if `node` holds the
    /// largest key.
    fn successor(&self, node: NodeId) -> Self::Link {
        let right = self.nodes()[node].right();
        if !right.is_null() {
            return self.min(right);
        }

        let mut child = Self::Link::from_node(node);
        let mut parent = self.nodes()[node].parent();
        while let Some(id) = parent.node() {
            if self.nodes()[id].right() != child {
                break;
            }
            child = parent;
            parent = self.nodes()[id].parent();
        }
        parent
    }

    /// Returns the node with the next smaller key, or the absence marker if `node` holds the
    /// smallest key.
    fn predecessor(&self, node: NodeId) -> Self::Link {
        let left = self.nodes()[node].left();
        if !left.is_null() {
            return self.max(left);
        }

        let mut child = Self::Link::from_node(node);
        let mut parent = self.nodes()[node].parent();
        while let Some(id) = parent.node() {
            if self.nodes()[id].left() != child {
                break;
            }
            child = parent;
            parent = self.nodes()[id].parent();
        }
        parent
    }

    /// Walks down from the root towards `key`. Returns the node holding `key` if there is one,
    /// otherwise the last node visited (the would-be parent of `key`).
    fn walk<V>(&self, key: &V) -> Self::Link
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut prev = Self::Link::NULL;
        let mut curr = self.root();
        while let Some(node) = curr.node() {
            prev = curr;
            curr = match key.cmp(self.key(node).borrow()) {
                Ordering::Less => self.nodes()[node].left(),
                Ordering::Greater => self.nodes()[node].right(),
                Ordering::Equal => return curr,
            };
        }
        prev
    }

    /// Returns the node holding `key` without restructuring the tree.
    fn find<V>(&self, key: &V) -> Self::Link
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        let curr = self.walk(key);
        match curr.node() {
            Some(node) if key.cmp(self.key(node).borrow()) == Ordering::Equal => curr,
            _ => Self::Link::NULL,
        }
    }

    fn is_left_child(&self, link: Self::Link) -> bool {
        let parent = self.parent(link);
        !parent.is_null() && self.left(parent) == link
    }

    fn is_right_child(&self, link: Self::Link) -> bool {
        let parent = self.parent(link);
        !parent.is_null() && self.right(parent) == link
    }

    /// Puts `replacement` in the child slot of `remove`'s parent, or in the root slot if `remove`
    /// is the root. The children of `remove` are left untouched.
    fn transplant(&mut self, remove: NodeId, replacement: Self::Link) {
        let parent = self.nodes()[remove].parent();
        match parent.node() {
            None => self.set_root(replacement),
            Some(id) => {
                if self.nodes()[id].left() == Self::Link::from_node(remove) {
                    self.set_left(id, replacement);
                } else {
                    self.set_right(id, replacement);
                }
            },
        }

        if let Some(id) = replacement.node() {
            self.set_parent(id, parent);
        }
    }

    /// Promotes the right child of `old_top` into its place and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `old_top` has no right child.
    fn rotate_left(&mut self, old_top: NodeId) -> NodeId {
        let new_top = self.nodes()[old_top]
            .right()
            .node()
            .expect("Expected right child node to be `Some`.");

        let inner = self.nodes()[new_top].left();
        self.set_right(old_top, inner);
        if let Some(id) = inner.node() {
            self.set_parent(id, Self::Link::from_node(old_top));
        }

        self.transplant(old_top, Self::Link::from_node(new_top));
        self.set_left(new_top, Self::Link::from_node(old_top));
        self.set_parent(old_top, Self::Link::from_node(new_top));
        new_top
    }

    /// Promotes the left child of `old_top` into its place and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `old_top` has no left child.
    fn rotate_right(&mut self, old_top: NodeId) -> NodeId {
        let new_top = self.nodes()[old_top]
            .left()
            .node()
            .expect("Expected left child node to be `Some`.");

        let inner = self.nodes()[new_top].right();
        self.set_left(old_top, inner);
        if let Some(id) = inner.node() {
            self.set_parent(id, Self::Link::from_node(old_top));
        }

        self.transplant(old_top, Self::Link::from_node(new_top));
        self.set_right(new_top, Self::Link::from_node(old_top));
        self.set_parent(old_top, Self::Link::from_node(new_top));
        new_top
    }

    /// Returns an iterator over the keys in ascending order.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter {
            tree: self,
            current: self.min(self.root()),
            remaining: self.len(),
        }
    }
}

/// The container contract shared by every tree variant.
///
/// Trees hold unique keys: two keys comparing `Equal` are the same key.
pub trait SearchTree: BinaryTree {
    /// Inserts `key` and returns its node. If an equal key is already present, no node is created
    /// and the existing node is returned.
    fn insert(&mut self, key: Self::Key) -> NodeId;

    /// Removes the node holding `key` and returns the removed key, or `Ok(None)` if the key is
    /// not present.
    fn delete<V>(&mut self, key: &V) -> Result<Option<Self::Key>>
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized;

    /// Returns the node holding `key`, or the absence marker.
    fn search<V>(&mut self, key: &V) -> Self::Link
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key)
    }

    fn contains<V>(&self, key: &V) -> bool
    where
        Self::Key: Borrow<V>,
        V: Ord + ?Sized,
    {
        !self.find(key).is_null()
    }

    fn get_root(&self) -> Self::Link {
        self.root()
    }

    fn get_min(&self) -> Self::Link {
        self.min(self.root())
    }

    fn get_max(&self) -> Self::Link {
        self.max(self.root())
    }

    fn get_successor(&self, node: NodeId) -> Self::Link {
        self.successor(node)
    }

    fn get_predecessor(&self, node: NodeId) -> Self::Link {
        self.predecessor(node)
    }

    /// Removes every key from the tree.
    fn clear(&mut self) {
        self.nodes_mut().clear();
        self.set_root(Self::Link::NULL);
    }
}

/// An iterator over the keys of a tree in ascending order.
///
/// Each step follows [`BinaryTree::successor`], so a full traversal is linear in the size of the
/// tree.
pub struct Iter<'a, B>
where
    B: BinaryTree,
{
    tree: &'a B,
    current: B::Link,
    remaining: usize,
}

impl<'a, B> Iterator for Iter<'a, B>
where
    B: BinaryTree,
{
    type Item = &'a B::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = self.current.node()?;
        self.current = tree.successor(node);
        self.remaining -= 1;
        Some(tree.key(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, B> ExactSizeIterator for Iter<'a, B> where B: BinaryTree {}
