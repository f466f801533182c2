//! Stable-id entity store with tombstoned slots.
//!
//! The store is the sole owner of entity records and the sole authority on
//! entity identity. External code holds only [`StableId`]s and resolves
//! them fresh on every access; no reference into the store may be retained
//! across a tick boundary. Ids are minted monotonically and never reused,
//! and are deliberately distinct from the transient slot index a record
//! happens to occupy, so slot reuse can never resurrect a dead id.

use crate::error::StoreError;
use crate::id::StableId;
use indexmap::IndexMap;

/// Slot-backed container indexed by stable ids.
///
/// Removal tombstones the slot (pushing it onto a free list) and unlinks
/// the id; the id itself is retired forever. Iteration visits live records
/// in insertion order, which keeps every store walk deterministic.
#[derive(Clone, Debug)]
pub struct Store<I: StableId, T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
    index: IndexMap<I, u32>,
    next_raw: u64,
}

impl<I: StableId, T> Store<I, T> {
    /// Create an empty store. The first minted id has raw value 1;
    /// 0 is reserved so a zeroed id can never alias a live entity.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: IndexMap::new(),
            next_raw: 1,
        }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the store holds no live records.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Whether an id is live.
    pub fn contains(&self, id: I) -> bool {
        self.index.contains_key(&id)
    }

    /// Insert a record, minting a fresh stable id.
    pub fn insert(&mut self, record: T) -> I {
        self.insert_with(|_| record)
    }

    /// Insert a record built from the id it will receive.
    ///
    /// Useful when the record must embed its own id at construction time
    /// (for example, to tag a surface body with its owner).
    pub fn insert_with(&mut self, build: impl FnOnce(I) -> T) -> I {
        let id = I::from_raw(self.next_raw);
        self.next_raw += 1;
        let record = build(id);
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(record);
                slot
            }
            None => {
                self.slots.push(Some(record));
                (self.slots.len() - 1) as u32
            }
        };
        self.index.insert(id, slot);
        id
    }

    /// Remove a record, tombstoning its slot.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is unknown or already removed.
    pub fn remove(&mut self, id: I) -> Result<T, StoreError> {
        // shift_remove keeps the remaining ids in insertion order, which
        // the deterministic tick walk depends on.
        let slot = self.index.shift_remove(&id).ok_or(StoreError::NotFound)?;
        let record = self.slots[slot as usize]
            .take()
            .expect("index points at a live slot");
        self.free.push(slot);
        Ok(record)
    }

    /// Resolve an id to its record.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is unknown or tombstoned.
    pub fn get(&self, id: I) -> Result<&T, StoreError> {
        let slot = *self.index.get(&id).ok_or(StoreError::NotFound)?;
        self.slots[slot as usize]
            .as_ref()
            .ok_or(StoreError::NotFound)
    }

    /// Resolve an id to its record, mutably.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the id is unknown or tombstoned.
    pub fn get_mut(&mut self, id: I) -> Result<&mut T, StoreError> {
        let slot = *self.index.get(&id).ok_or(StoreError::NotFound)?;
        self.slots[slot as usize]
            .as_mut()
            .ok_or(StoreError::NotFound)
    }

    /// Live ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.index.keys().copied()
    }

    /// Live `(id, record)` pairs in insertion order, skipping tombstones.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.index
            .iter()
            .filter_map(|(id, slot)| self.slots[*slot as usize].as_ref().map(|r| (*id, r)))
    }
}

impl<I: StableId, T> Default for Store<I, T> {
    fn default() -> Self {
        Self::new()
    }
}
