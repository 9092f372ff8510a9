use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Append-only store addressed by typed [`Id`]s.
pub struct Arena<T> {
    items: Vec<T>,
}

pub struct Id<T> {
    _marker: PhantomData<T>,
    pub id: usize,
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.id)
    }
}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id({})", self.id)
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}
impl<T> Eq for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> Id<T> {
    pub const fn new(id: usize) -> Self {
        Self {
            _marker: PhantomData,
            id,
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn alloc(&mut self, item: T) -> Id<T> {
        let id = Id::new(self.items.len());
        self.items.push(item);
        id
    }

    pub fn get(&self, id: &Id<T>) -> Option<&T> {
        self.items.get(id.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Hands out fresh ids for things that are not stored in an [`Arena`].
///
/// Owned by whoever spawns vehicles, so two simulations (or two tests) never share a
/// counter.
pub struct IdAllocator<T> {
    next: usize,
    _marker: PhantomData<T>,
}

impl<T> Default for IdAllocator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IdAllocator<T> {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: usize) -> Self {
        Self {
            next: first,
            _marker: PhantomData,
        }
    }

    pub fn next_id(&mut self) -> Id<T> {
        let id = Id::new(self.next);
        self.next += 1;
        id
    }

    /// The id the next call to [`IdAllocator::next_id`] will return.
    pub fn peek(&self) -> Id<T> {
        Id::new(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_ids_index_their_items() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");

        assert_eq!(arena.get(&a), Some(&"a"));
        assert_eq!(arena.get(&b), Some(&"b"));
        assert_eq!(arena.get(&Id::new(7)), None);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn allocator_never_repeats() {
        let mut ids = IdAllocator::<()>::starting_at(10);
        let first = ids.next_id();
        let second = ids.next_id();

        assert_eq!(first.id, 10);
        assert_eq!(second.id, 11);
        assert_ne!(first, second);
        assert_eq!(ids.peek().id, 12);
    }
}
