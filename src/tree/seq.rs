use crate::tree::engine::SearchTree;
use serde::de::{Deserialize, SeqAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Rebuilds a tree from a sequence of keys by inserting them in order.
pub(crate) struct KeySeqVisitor<S> {
    marker: PhantomData<S>,
}

impl<S> KeySeqVisitor<S> {
    pub fn new() -> Self {
        KeySeqVisitor {
            marker: PhantomData,
        }
    }
}

impl<'de, S> Visitor<'de> for KeySeqVisitor<S>
where
    S: SearchTree + Default,
    S::Key: Deserialize<'de>,
{
    type Value = S;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of keys")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = S::default();
        while let Some(key) = seq.next_element()? {
            tree.insert(key);
        }
        Ok(tree)
    }
}
