use ordered_trees::bst::BstTree;
use ordered_trees::red_black_tree::{Color, RedBlackTree};
use ordered_trees::splay_tree::SplayTree;
use ordered_trees::tree::{BinaryTree, Link, SearchTree};
use serde::de::value::{Error, SeqDeserializer};
use serde::Deserialize;
use serde_test::{assert_de_tokens, assert_ser_tokens, assert_tokens, Token};

fn from_keys<'de, S>(keys: Vec<u32>) -> S
where
    S: Deserialize<'de>,
{
    let deserializer = SeqDeserializer::<_, Error>::new(keys.into_iter());
    match S::deserialize(deserializer) {
        Ok(tree) => tree,
        Err(error) => panic!("failed to deserialize keys: {}", error),
    }
}

#[test]
fn test_serialize_in_order() {
    let mut tree = BstTree::new();
    for key in &[2u32, 3, 1] {
        tree.insert(*key);
    }
    assert_ser_tokens(
        &tree,
        &[
            Token::Seq { len: Some(3) },
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_bst_tokens() {
    let mut tree = BstTree::new();
    for key in &[10u32, 15, 5, 0] {
        tree.insert(*key);
    }
    assert_tokens(
        &tree,
        &[
            Token::Seq { len: Some(4) },
            Token::U32(0),
            Token::U32(5),
            Token::U32(10),
            Token::U32(15),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn test_red_black_round_trip() {
    let mut tree = RedBlackTree::new();
    for key in 0..4u32 {
        tree.insert(key);
    }
    assert_tokens(
        &tree,
        &[
            Token::Seq { len: Some(4) },
            Token::U32(0),
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::SeqEnd,
        ],
    );

    let other: RedBlackTree<u32> = from_keys(vec![1, 2, 3]);
    assert_eq!(other.iter().cloned().collect::<Vec<u32>>(), vec![1, 2, 3]);
    assert_eq!(other.color(other.get_root()), Color::Black);
    assert_eq!(other.get_root().node().map(|node| *other.key(node)), Some(2));
}

#[test]
fn test_deserialize_unsorted_keys() {
    let mut expected = SplayTree::new();
    for key in &[1u32, 3, 5] {
        expected.insert(*key);
    }
    assert_de_tokens(
        &expected,
        &[
            Token::Seq { len: Some(4) },
            Token::U32(5),
            Token::U32(1),
            Token::U32(5),
            Token::U32(3),
            Token::SeqEnd,
        ],
    );

    let tree: SplayTree<u32> = from_keys(vec![5, 1, 5, 3]);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree, expected);
    assert_eq!(tree.get_root().map(|node| *tree.key(node)), Some(3));
}

#[test]
fn test_trees_compare_by_keys() {
    let mut left = BstTree::new();
    let mut right = BstTree::new();
    for key in 0..5u32 {
        left.insert(key);
    }
    for key in &[2u32, 1, 3, 0, 4] {
        right.insert(*key);
    }
    assert_ne!(left.height(), right.height());
    assert_eq!(left, right);
    assert_eq!(format!("{:?}", left), "{0, 1, 2, 3, 4}");

    right.insert(5);
    assert_ne!(left, right);
}

#[test]
fn test_color_tokens() {
    assert_tokens(
        &Color::Red,
        &[Token::UnitVariant {
            name: "Color",
            variant: "Red",
        }],
    );
}
