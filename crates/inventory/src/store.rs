//! Ordered, id-indexed entity collection with copy-on-write snapshots.

use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use stockroom_core::{DomainError, DomainResult, Entity};

/// Immutable view of a store at one point in time.
///
/// Cloning is cheap (shared). Later mutations of the store never show up in an
/// existing snapshot.
#[derive(Debug)]
pub struct Snapshot<E>(Arc<Vec<E>>);

impl<E> Clone for Snapshot<E> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<E> Deref for Snapshot<E> {
    type Target = [E];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl<'a, E> IntoIterator for &'a Snapshot<E> {
    type Item = &'a E;
    type IntoIter = core::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<E: PartialEq> PartialEq for Snapshot<E> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Insertion-ordered collection of entities keyed by id.
///
/// Mutations go through `Arc::make_mut`, so the backing vector is cloned only
/// when a snapshot of the current state is still alive.
#[derive(Debug, Clone)]
pub struct Store<E: Entity> {
    entries: Arc<Vec<E>>,
    index: HashMap<E::Id, usize>,
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self {
            entries: Arc::new(Vec::new()),
            index: HashMap::new(),
        }
    }
}

impl<E> Store<E>
where
    E: Entity + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &E::Id) -> Option<&E> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, E> {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> Snapshot<E> {
        Snapshot(Arc::clone(&self.entries))
    }

    /// Append an entity. Fails with `Conflict` if the id is already present.
    pub fn insert(&mut self, entity: E) -> DomainResult<()> {
        let id = *entity.id();
        if self.index.contains_key(&id) {
            return Err(DomainError::conflict(format!("duplicate id {id}")));
        }
        let entries = Arc::make_mut(&mut self.entries);
        self.index.insert(id, entries.len());
        entries.push(entity);
        Ok(())
    }

    /// Mutate one entity in place. Returns `None` if the id is unknown.
    ///
    /// The closure must not change the entity's id.
    pub fn update<F>(&mut self, id: &E::Id, f: F) -> Option<&E>
    where
        F: FnOnce(&mut E),
    {
        let pos = *self.index.get(id)?;
        let entries = Arc::make_mut(&mut self.entries);
        f(&mut entries[pos]);
        debug_assert_eq!(entries[pos].id(), id, "store update changed an entity id");
        Some(&entries[pos])
    }

    /// Remove an entity, keeping the order of the rest.
    pub fn remove(&mut self, id: &E::Id) -> Option<E> {
        let pos = self.index.remove(id)?;
        let entries = Arc::make_mut(&mut self.entries);
        let removed = entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}
