use crate::error::{HmsError, Result};
use crate::model::{Record, RecordId};

/// An insertion-ordered sequence of records with unique keys.
///
/// Collections are expected to stay small (one operator, one session), so
/// every lookup is a linear scan and there is no secondary index.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The duplicate check shared by every add.
    pub fn contains_key(&self, key: RecordId) -> bool {
        self.records.iter().any(|r| r.key() == key)
    }

    /// Appends `record`, or fails with `DuplicateKey` leaving the collection untouched.
    pub fn push(&mut self, record: R) -> Result<()> {
        let key = record.key();
        if self.contains_key(key) {
            return Err(HmsError::DuplicateKey { kind: R::KIND, key });
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes every record with `key` and returns them. Missing keys are a no-op.
    pub fn remove(&mut self, key: RecordId) -> Vec<R> {
        let (removed, kept): (Vec<R>, Vec<R>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| r.key() == key);
        self.records = kept;
        removed
    }

    pub fn get(&self, key: RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.key() == key)
    }

    pub fn get_mut(&mut self, key: RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.key() == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, R: Record> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InventoryItem, RecordKind};

    fn item(id: RecordId, name: &str) -> InventoryItem {
        InventoryItem::new(id, name, 1)
    }

    #[test]
    fn push_preserves_insertion_order() {
        let mut c = Collection::new();
        c.push(item(3, "c")).unwrap();
        c.push(item(1, "a")).unwrap();
        c.push(item(2, "b")).unwrap();

        let ids: Vec<_> = c.iter().map(|i| i.item_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn push_rejects_duplicate_without_mutation() {
        let mut c = Collection::new();
        c.push(item(1, "first")).unwrap();

        match c.push(item(1, "second")) {
            Err(HmsError::DuplicateKey { kind, key }) => {
                assert_eq!(kind, RecordKind::Inventory);
                assert_eq!(key, 1);
            }
            other => panic!("Expected DuplicateKey, got {:?}", other),
        }
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(1).unwrap().item_name, "first");
    }

    #[test]
    fn remove_keeps_order_of_remaining_records() {
        let mut c = Collection::new();
        for id in 1..=4 {
            c.push(item(id, "x")).unwrap();
        }

        let removed = c.remove(2);
        assert_eq!(removed.len(), 1);
        let ids: Vec<_> = c.iter().map(|i| i.item_id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut c = Collection::new();
        c.push(item(1, "x")).unwrap();

        assert!(c.remove(99).is_empty());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut c = Collection::new();
        c.push(item(1, "x")).unwrap();
        c.get_mut(1).unwrap().quantity = 42;
        assert_eq!(c.get(1).unwrap().quantity, 42);
        assert!(c.get_mut(2).is_none());
    }
}
