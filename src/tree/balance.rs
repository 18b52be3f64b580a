//! Day-Stout-Warren rebalancing.
//!
//! The tree is first flattened into a right-leaning vine with right rotations, then compressed
//! back into a balanced shape with left rotations down the right spine. No nodes are allocated.
//!
//! See Stout and Warren, "Tree Rebalancing in Optimal Time and Space" (CACM, 1986).

use crate::arena::NodeId;
use crate::tree::engine::BinaryTree;
use crate::tree::link::Link;
use crate::tree::{Error, Result};
use log::debug;

/// Rebalances `tree` in place in `O(N)` time and `O(1)` extra space and returns its node count.
///
/// Afterwards the height of the tree is at most one more than the height of a perfectly balanced
/// tree with the same number of nodes. Keys and node handles are preserved; only links change.
/// Once the shape is final, [`BinaryTree::rebalanced`] gives the variant a chance to fix up its own
/// metadata, which is how red black trees get recolored.
///
/// # Examples
///
/// ```
/// use ordered_trees::bst::BstTree;
/// use ordered_trees::tree::{balance_tree, BinaryTree, SearchTree};
///
/// let mut tree = BstTree::new();
/// for key in 0..7 {
///     tree.insert(key);
/// }
/// assert_eq!(tree.height(), 7);
///
/// assert_eq!(balance_tree(&mut tree).unwrap(), 7);
/// assert_eq!(tree.height(), 3);
/// ```
pub fn balance_tree<B>(tree: &mut B) -> Result<usize>
where
    B: BinaryTree,
{
    let node_count = construct_vine(tree);
    debug!("constructed vine of {} nodes", node_count);

    if node_count > 1 {
        let full_tree_size = power_of_two_floor(node_count + 1)? - 1;

        compress(tree, node_count - full_tree_size);
        let mut size = full_tree_size / 2;
        while size > 0 {
            compress(tree, size);
            size /= 2;
        }
    }

    tree.rebalanced(node_count);
    Ok(node_count)
}

/// Returns the largest power of two that does not exceed `value`.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `value` is zero, since no power of two is that small.
///
/// # Examples
///
/// ```
/// use ordered_trees::tree::power_of_two_floor;
///
/// assert_eq!(power_of_two_floor(1), Ok(1));
/// assert_eq!(power_of_two_floor(12), Ok(8));
/// assert!(power_of_two_floor(0).is_err());
/// ```
pub fn power_of_two_floor(value: usize) -> Result<usize> {
    if value == 0 {
        return Err(Error::InvalidArgument(String::from(
            "no power of two is less than or equal to zero",
        )));
    }

    let mut result = 1;
    while result <= value / 2 {
        result *= 2;
    }
    Ok(result)
}

// Turns the tree into a vine where every node only has a right child.
fn construct_vine<B>(tree: &mut B) -> usize
where
    B: BinaryTree,
{
    let mut count = 0;
    let mut curr = tree.root();
    while let Some(node) = curr.node() {
        let mut top = node;
        while !tree.left(B::Link::from_node(top)).is_null() {
            top = tree.rotate_right(top);
        }
        curr = tree.right(B::Link::from_node(top));
        count += 1;
    }
    count
}

// Performs `count` left rotations at every other node down the right spine.
fn compress<B>(tree: &mut B, count: usize)
where
    B: BinaryTree,
{
    debug!("compressing {} nodes", count);
    let mut curr = tree.root().node();
    for _ in 0..count {
        let node: NodeId = match curr {
            Some(node) => node,
            None => break,
        };
        let top = tree.rotate_left(node);
        curr = tree.right(B::Link::from_node(top)).node();
    }
}

#[cfg(test)]
mod tests {
    use super::{balance_tree, power_of_two_floor};
    use crate::bst::BstTree;
    use crate::tree::{BinaryTree, Error, SearchTree};

    #[test]
    fn test_power_of_two_floor() {
        assert_eq!(power_of_two_floor(1), Ok(1));
        assert_eq!(power_of_two_floor(2), Ok(2));
        assert_eq!(power_of_two_floor(3), Ok(2));
        assert_eq!(power_of_two_floor(8), Ok(8));
        assert_eq!(power_of_two_floor(1023), Ok(512));
        assert_eq!(
            power_of_two_floor(usize::max_value()),
            Ok(1 << (usize::max_value().count_ones() - 1)),
        );
    }

    #[test]
    fn test_power_of_two_floor_zero() {
        match power_of_two_floor(0) {
            Err(Error::InvalidArgument(_)) => {},
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_balance_empty() {
        let mut tree: BstTree<u32> = BstTree::new();
        assert_eq!(balance_tree(&mut tree), Ok(0));
        assert!(tree.get_root().is_none());
    }

    #[test]
    fn test_balance_single() {
        let mut tree = BstTree::new();
        let node = tree.insert(1);
        assert_eq!(balance_tree(&mut tree), Ok(1));
        assert_eq!(tree.get_root(), Some(node));
    }

    #[test]
    fn test_balance_perfect() {
        let mut tree = BstTree::new();
        for key in (1..8).rev() {
            tree.insert(key);
        }
        balance_tree(&mut tree).unwrap();

        let root = tree.get_root().unwrap();
        assert_eq!(tree.key(root), &4);
        assert_eq!(tree.key(tree.left(Some(root)).unwrap()), &2);
        assert_eq!(tree.key(tree.right(Some(root)).unwrap()), &6);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), (1..8).collect::<Vec<u32>>());
    }

    #[test]
    fn test_balance_height_bound() {
        for size in 2..70u32 {
            let mut tree = BstTree::new();
            for key in 0..size {
                tree.insert(key);
            }
            balance_tree(&mut tree).unwrap();

            let minimum = 32 - size.leading_zeros() as usize;
            assert!(tree.height() <= minimum + 1);
            assert_eq!(tree.iter().cloned().collect::<Vec<u32>>(), (0..size).collect::<Vec<u32>>());
        }
    }
}
