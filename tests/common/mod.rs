use ordered_trees::tree::{BinaryTree, Link};
use std::fmt::Debug;

/// Checks parent back-references, search order, and the node count of `tree`.
pub fn assert_search_tree<B>(tree: &B)
where
    B: BinaryTree,
    B::Key: Debug,
{
    let root = tree.root();
    assert!(tree.parent(root).is_null());

    let mut count = 0;
    let mut stack = Vec::new();
    if let Some(node) = root.node() {
        stack.push(node);
    }
    while let Some(node) = stack.pop() {
        count += 1;
        let link = B::Link::from_node(node);
        let left = tree.left(link);
        let right = tree.right(link);
        if let Some(child) = left.node() {
            assert_eq!(tree.parent(left), link);
            assert!(tree.key(child) < tree.key(node));
            stack.push(child);
        }
        if let Some(child) = right.node() {
            assert_eq!(tree.parent(right), link);
            assert!(tree.key(child) > tree.key(node));
            stack.push(child);
        }
    }
    assert_eq!(count, tree.len());

    let keys = tree.iter().collect::<Vec<&B::Key>>();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}
