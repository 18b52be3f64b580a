use crate::arena::{Arena, NodeId};
use crate::bst::{BstNode, BstTree};
use crate::tree::{BinaryTree, KeySeqVisitor, Result, SearchTree};
use log::trace;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::result;

/// An ordered set of keys stored in a splay tree.
///
/// A splay tree is an unbalanced binary search tree that moves every node it touches to the root.
/// After each successful `insert` or `search` the accessed node is the root, and after a
/// successful `delete` the removed node's former parent is. Splaying uses the paired zig-zig and
/// zig-zag rotations, so any sequence of `M` operations on a tree of `N` keys takes
/// `O(M log N)` time.
///
/// `contains` and the other `&self` queries do not splay.
///
/// # Examples
///
/// ```
/// use ordered_trees::splay_tree::SplayTree;
/// use ordered_trees::tree::{BinaryTree, SearchTree};
///
/// let mut tree = SplayTree::new();
/// for key in 0..10 {
///     tree.insert(key);
/// }
/// assert_eq!(tree.get_root().map(|node| *tree.key(node)), Some(9));
///
/// tree.search(&3);
/// assert_eq!(tree.get_root().map(|node| *tree.key(node)), Some(3));
///
/// assert_eq!(tree.delete(&3), Ok(Some(3)));
/// assert!(!tree.contains(&3));
/// ```
pub struct SplayTree<T> {
    tree: BstTree<T>,
}

impl<T> SplayTree<T> {
    /// Constructs a new, empty `SplayTree<T>`.
    pub fn new() -> Self {
        SplayTree {
            tree: BstTree::new(),
        }
    }

    /// Constructs a new, empty `SplayTree<T>` with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        SplayTree {
            tree: BstTree::with_capacity(capacity),
        }
    }
}

impl<T> SplayTree<T>
where
    T: Ord,
{
    /// Rotates `node` up until it becomes the root.
    pub fn splay(&mut self, node: NodeId) {
        while let Some(parent) = self.parent(Some(node)) {
            let is_left = self.is_left_child(Some(node));
            match self.parent(Some(parent)) {
                None => {
                    trace!("zig at {:?}", node);
                    if is_left {
                        self.rotate_right(parent);
                    } else {
                        self.rotate_left(parent);
                    }
                },
                Some(grandparent) => {
                    if is_left == self.is_left_child(Some(parent)) {
                        trace!("zig-zig at {:?}", node);
                        if is_left {
                            self.rotate_right(grandparent);
                            self.rotate_right(parent);
                        } else {
                            self.rotate_left(grandparent);
                            self.rotate_left(parent);
                        }
                    } else {
                        trace!("zig-zag at {:?}", node);
                        if is_left {
                            self.rotate_right(parent);
                            self.rotate_left(grandparent);
                        } else {
                            self.rotate_left(parent);
                            self.rotate_right(grandparent);
                        }
                    }
                },
            }
        }
    }
}

impl<T> BinaryTree for SplayTree<T>
where
    T: Ord,
{
    type Key = T;
    type Link = Option<NodeId>;
    type Node = BstNode<T>;

    fn nodes(&self) -> &Arena<BstNode<T>> {
        self.tree.nodes()
    }

    fn nodes_mut(&mut self) -> &mut Arena<BstNode<T>> {
        self.tree.nodes_mut()
    }

    fn root(&self) -> Option<NodeId> {
        self.tree.root()
    }

    fn set_root(&mut self, root: Option<NodeId>) {
        self.tree.set_root(root);
    }
}

impl<T> SearchTree for SplayTree<T>
where
    T: Ord,
{
    fn insert(&mut self, key: T) -> NodeId {
        let node = self.tree.insert(key);
        self.splay(node);
        node
    }

    fn delete<V>(&mut self, key: &V) -> Result<Option<T>>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        Ok(self.tree.remove(key).map(|(key, parent)| {
            if let Some(parent) = parent {
                self.splay(parent);
            }
            key
        }))
    }

    fn search<V>(&mut self, key: &V) -> Option<NodeId>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let ret = self.find(key);
        if let Some(node) = ret {
            self.splay(node);
        }
        ret
    }
}

impl<T> Default for SplayTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for SplayTree<T>
where
    T: Ord,
{
    fn eq(&self, other: &SplayTree<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for SplayTree<T> where T: Ord {}

impl<T> fmt::Debug for SplayTree<T>
where
    T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Serialize for SplayTree<T>
where
    T: Ord + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tree.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SplayTree<T>
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

#[cfg(test)]
mod tests {
    use super::SplayTree;
    use crate::tree::{BinaryTree, SearchTree};

    fn root_key(tree: &SplayTree<u32>) -> Option<u32> {
        tree.get_root().map(|node| *tree.key(node))
    }

    fn assert_links(tree: &SplayTree<u32>) {
        let mut stack: Vec<_> = tree.get_root().into_iter().collect();
        assert_eq!(tree.parent(tree.get_root()), None);
        while let Some(node) = stack.pop() {
            if let Some(left) = tree.left(Some(node)) {
                assert_eq!(tree.parent(Some(left)), Some(node));
                assert!(tree.key(left) < tree.key(node));
                stack.push(left);
            }
            if let Some(right) = tree.right(Some(node)) {
                assert_eq!(tree.parent(Some(right)), Some(node));
                assert!(tree.key(right) > tree.key(node));
                stack.push(right);
            }
        }
    }

    #[test]
    fn test_insert_splays() {
        let mut tree = SplayTree::new();
        for key in &[5, 3, 8, 1, 4, 7, 9, 2, 6] {
            tree.insert(*key);
            assert_eq!(root_key(&tree), Some(*key));
            assert_links(&tree);
        }
        assert_eq!(tree.len(), 9);
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), (1..10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_insert_duplicate_splays_existing() {
        let mut tree = SplayTree::new();
        let node = tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        assert_eq!(tree.insert(1), node);
        assert_eq!(tree.get_root(), Some(node));
        assert_eq!(tree.len(), 3);
        assert_links(&tree);
    }

    #[test]
    fn test_search_splays() {
        let mut tree = SplayTree::new();
        for key in 0..32 {
            tree.insert(key);
        }
        for key in &[0, 31, 16, 7, 7, 25] {
            assert!(tree.search(key).is_some());
            assert_eq!(root_key(&tree), Some(*key));
            assert_links(&tree);
        }
    }

    #[test]
    fn test_search_missing_keeps_shape() {
        let mut tree = SplayTree::new();
        for key in 0..8 {
            tree.insert(key * 2);
        }
        let root = tree.get_root();
        assert_eq!(tree.search(&3), None);
        assert_eq!(tree.get_root(), root);
    }

    #[test]
    fn test_contains_does_not_splay() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(2);
        assert!(tree.contains(&1));
        assert_eq!(root_key(&tree), Some(2));
    }

    #[test]
    fn test_zig_zig_halves_depth() {
        let mut tree = SplayTree::new();
        for key in (0..16).rev() {
            tree.insert(key);
        }
        assert_eq!(tree.height(), 16);
        tree.search(&15);
        assert!(tree.height() < 16);
        assert_links(&tree);
    }

    #[test]
    fn test_delete_splays_former_parent() {
        let mut tree = SplayTree::new();
        for key in &[10, 5, 15, 3] {
            tree.insert(*key);
        }
        let ten = tree.find(&10).unwrap();
        let parent = tree.parent(Some(ten)).unwrap();
        let parent_key = *tree.key(parent);

        assert_eq!(tree.delete(&10), Ok(Some(10)));
        assert_eq!(root_key(&tree), Some(parent_key));
        assert!(!tree.contains(&10));
        assert_links(&tree);
    }

    #[test]
    fn test_delete_root() {
        let mut tree = SplayTree::new();
        tree.insert(1);
        tree.insert(2);
        assert_eq!(tree.delete(&2), Ok(Some(2)));
        assert_eq!(root_key(&tree), Some(1));
        assert_eq!(tree.delete(&1), Ok(Some(1)));
        assert_eq!(tree.get_root(), None);
        assert_eq!(tree.delete(&1), Ok(None));
    }
}
