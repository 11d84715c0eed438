//! # Storage Layer
//!
//! All records live in memory, in a single [`RecordStore`] that owns one
//! [`Collection`] per entity kind. The store is created empty when the
//! process starts and is dropped with it; nothing is persisted.
//!
//! ## Routing
//!
//! Collection operations are written once, generically over [`Record`].
//! The [`Stored`] trait tells the store which of its five collections holds a
//! given record type, so callers write `store.insert(patient)` or
//! `store.list::<Doctor>()` and never name a collection field directly.
//!
//! ## Invariants
//!
//! - Keys are unique within a collection (checked by a linear scan on insert).
//! - Insertion order is preserved; removal keeps the order of the survivors.
//! - There is no referential integrity between collections.

use crate::error::{HmsError, Result};
use crate::model::{Appointment, Doctor, InventoryItem, Patient, Record, RecordId, Staff};

pub mod collection;
pub mod memory;

pub use collection::Collection;
pub use memory::RecordStore;

/// Maps a record type to its collection inside a [`RecordStore`].
pub trait Stored: Record {
    fn collection(store: &RecordStore) -> &Collection<Self>;
    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self>;
}

impl Stored for Patient {
    fn collection(store: &RecordStore) -> &Collection<Self> {
        &store.patients
    }

    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
        &mut store.patients
    }
}

impl Stored for Staff {
    fn collection(store: &RecordStore) -> &Collection<Self> {
        &store.staff
    }

    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
        &mut store.staff
    }
}

impl Stored for Doctor {
    fn collection(store: &RecordStore) -> &Collection<Self> {
        &store.doctors
    }

    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
        &mut store.doctors
    }
}

impl Stored for InventoryItem {
    fn collection(store: &RecordStore) -> &Collection<Self> {
        &store.inventory
    }

    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
        &mut store.inventory
    }
}

impl Stored for Appointment {
    fn collection(store: &RecordStore) -> &Collection<Self> {
        &store.appointments
    }

    fn collection_mut(store: &mut RecordStore) -> &mut Collection<Self> {
        &mut store.appointments
    }
}

pub(crate) fn not_found<R: Record>(key: RecordId) -> HmsError {
    HmsError::NotFound { kind: R::KIND, key }
}

impl RecordStore {
    /// Add-if-unique. Fails with `DuplicateKey` and leaves the store unchanged.
    pub fn insert<R: Stored>(&mut self, record: R) -> Result<()> {
        R::collection_mut(self).push(record)
    }

    /// Removes every record of type `R` with `key`. Never fails.
    pub fn remove<R: Stored>(&mut self, key: RecordId) -> Vec<R> {
        R::collection_mut(self).remove(key)
    }

    pub fn contains<R: Stored>(&self, key: RecordId) -> bool {
        R::collection(self).contains_key(key)
    }

    pub fn get<R: Stored>(&self, key: RecordId) -> Result<&R> {
        R::collection(self).get(key).ok_or_else(|| not_found::<R>(key))
    }

    pub fn get_mut<R: Stored>(&mut self, key: RecordId) -> Result<&mut R> {
        R::collection_mut(self)
            .get_mut(key)
            .ok_or_else(|| not_found::<R>(key))
    }

    /// All records of type `R`, in insertion order.
    pub fn list<R: Stored>(&self) -> &[R] {
        R::collection(self).as_slice()
    }
}
