//! Slot allocator that owns every node of a tree.

use serde_derive::{Deserialize, Serialize};
use std::mem;
use std::ops::{Index, IndexMut};

/// A stable handle to an object allocated in an `Arena<T>`.
///
/// Handles are plain indices, so parent links between nodes are just another `NodeId` and never
/// form ownership cycles.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw slot index of the handle.
    pub fn index(self) -> usize {
        self.0
    }
}

enum Slot<T> {
    Occupied(T),
    Vacant(Option<usize>),
}

/// A growable allocator for a single type of object.
///
/// Freed slots are chained into a free list and reused by later allocations, so handles stay small
/// and the backing `Vec` only grows when every slot is occupied. All objects are dropped when the
/// arena is dropped.
///
/// # Examples
///
/// ```
/// use ordered_trees::arena::Arena;
///
/// let mut arena = Arena::new();
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
///
/// assert_eq!(arena.free(&x), 2);
/// assert!(arena.is_empty());
/// ```
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    len: usize,
}

impl<T> Arena<T> {
    /// Constructs a new, empty `Arena<T>`.
    pub fn new() -> Self {
        Arena {
            slots: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Constructs a new, empty `Arena<T>` with room for `capacity` objects before it reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::Arena;
    ///
    /// let arena: Arena<u32> = Arena::with_capacity(1024);
    /// assert_eq!(arena.len(), 0);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
            head: None,
            len: 0,
        }
    }

    /// Allocates an object and returns its handle. The most recently freed slot is reused first.
    pub fn allocate(&mut self, value: T) -> NodeId {
        self.len += 1;
        match self.head.take() {
            None => {
                self.slots.push(Slot::Occupied(value));
                NodeId(self.slots.len() - 1)
            },
            Some(index) => {
                match mem::replace(&mut self.slots[index], Slot::Occupied(value)) {
                    Slot::Vacant(next) => self.head = next,
                    Slot::Occupied(_) => panic!("Error: free list points at an occupied slot."),
                }
                NodeId(index)
            },
        }
    }

    /// Deallocates an object and returns it.
    ///
    /// # Panics
    ///
    /// Panics if `id` corresponds to an invalid or vacant slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_trees::arena::Arena;
    ///
    /// let mut arena = Arena::new();
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.free(&x), 0);
    /// ```
    pub fn free(&mut self, id: &NodeId) -> T {
        if id.0 >= self.slots.len() {
            panic!("Error: attempting to free invalid slot.");
        }
        match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.head)) {
            Slot::Vacant(next) => {
                self.slots[id.0] = Slot::Vacant(next);
                panic!("Error: attempting to free vacant slot.");
            },
            Slot::Occupied(value) => {
                self.head = Some(id.0);
                self.len -= 1;
                value
            },
        }
    }

    /// Returns an immutable reference to an object, or `None` if the handle is stale.
    pub fn get(&self, id: &NodeId) -> Option<&T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(ref value)) => Some(value),
            _ => None,
        }
    }

    /// Returns a mutable reference to an object, or `None` if the handle is stale.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(ref mut value)) => Some(value),
            _ => None,
        }
    }

    /// Returns the number of live objects in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live objects.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every object in the arena. Previously issued handles become stale.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.len = 0;
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(&id).expect("Error: node id out of bounds.")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(&id).expect("Error: node id out of bounds.")
    }
}

#[cfg(test)]
mod tests {
    use super::{Arena, NodeId};

    #[test]
    #[should_panic]
    fn test_free_invalid_slot() {
        let mut arena: Arena<u32> = Arena::new();
        arena.free(&NodeId(0));
    }

    #[test]
    #[should_panic]
    fn test_free_vacant_slot() {
        let mut arena = Arena::new();
        let id = arena.allocate(0);
        arena.free(&id);
        arena.free(&id);
    }

    #[test]
    fn test_allocate() {
        let mut arena = Arena::new();
        assert_eq!(arena.allocate(0), NodeId(0));
        assert_eq!(arena.allocate(0), NodeId(1));
        assert_eq!(arena.allocate(0), NodeId(2));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_free_reuses_slots() {
        let mut arena = Arena::new();
        let a = arena.allocate(0);
        let b = arena.allocate(1);
        assert_eq!(arena.free(&a), 0);
        assert_eq!(arena.free(&b), 1);
        assert_eq!(arena.allocate(2), b);
        assert_eq!(arena.allocate(3), a);
        assert_eq!(arena.allocate(4), NodeId(2));
    }

    #[test]
    fn test_get_vacant_slot() {
        let mut arena = Arena::new();
        let id = arena.allocate(0);
        arena.free(&id);
        assert_eq!(arena.get(&id), None);
        assert_eq!(arena.get_mut(&id), None);
    }

    #[test]
    fn test_get_mut() {
        let mut arena = Arena::new();
        let id = arena.allocate(0);
        *arena.get_mut(&id).unwrap() = 1;
        assert_eq!(arena.get(&id), Some(&1));
    }

    #[test]
    fn test_clear() {
        let mut arena = Arena::with_capacity(4);
        let id = arena.allocate(0);
        arena.allocate(1);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.get(&id), None);
        assert_eq!(arena.allocate(2), NodeId(0));
    }
}
