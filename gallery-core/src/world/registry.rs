//! Fixed-capacity registry of active objects
//!
//! A slot is either empty or holds one handle. Insertion takes the first
//! empty slot. When every slot is taken the insertion is dropped: there
//! is no queueing and nothing is reported beyond the `None` return.

/// Bounded slot array
#[derive(Debug, Clone)]
pub struct Registry<T: Copy, const N: usize> {
    slots: [Option<T>; N],
}

impl<T: Copy, const N: usize> Registry<T, N> {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Create a registry with pre-filled slots
    pub const fn from_slots(slots: [Option<T>; N]) -> Self {
        Self { slots }
    }

    /// Put `item` in the first empty slot
    ///
    /// Returns the slot index, or `None` when the registry is full.
    pub fn insert(&mut self, item: T) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(item);
        Some(index)
    }

    /// Handle in slot `index`, if occupied
    pub fn get(&self, index: usize) -> Option<T> {
        self.slots.get(index).copied().flatten()
    }

    /// Empty slot `index` and return what it held
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Total number of slots
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Occupied slots as `(index, handle)` pairs, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|item| (index, item)))
    }

    /// Whether any slot holds a handle matching `pred`
    pub fn contains(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.slots.iter().flatten().any(|item| pred(item))
    }
}

impl<T: Copy, const N: usize> Default for Registry<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
