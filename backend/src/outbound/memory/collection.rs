//! Append-only record collection with its own identifier counter.

use std::collections::BTreeMap;

use crate::domain::RecordId;
use crate::domain::ports::StoreError;

/// Records keyed by identifier, iterated in insertion order.
#[derive(Debug)]
pub(super) struct Collection<T> {
    name: &'static str,
    next_id: Option<RecordId>,
    records: BTreeMap<RecordId, T>,
}

impl<T: Clone> Collection<T> {
    pub(super) fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: Some(RecordId::FIRST),
            records: BTreeMap::new(),
        }
    }

    pub(super) fn name(&self) -> &'static str {
        self.name
    }

    /// Reserve the next identifier, build the record and store it.
    pub(super) fn insert_with(
        &mut self,
        build: impl FnOnce(RecordId) -> T,
    ) -> Result<T, StoreError> {
        let id = self
            .next_id
            .ok_or_else(|| StoreError::ids_exhausted(self.name))?;
        let record = build(id);
        self.records.insert(id, record.clone());
        self.next_id = id.next();
        Ok(record)
    }

    pub(super) fn get(&self, id: RecordId) -> Option<&T> {
        self.records.get(&id)
    }

    pub(super) fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    pub(super) fn to_vec(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    #[cfg(test)]
    pub(super) fn exhaust_after(&mut self, last: RecordId) {
        self.next_id = last.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identifiers_start_at_one_and_increase() {
        let mut collection = Collection::new("notes");
        let first = collection.insert_with(|id| id.get()).expect("first insert");
        let second = collection.insert_with(|id| id.get()).expect("second insert");
        assert_eq!((first, second), (1, 2));
        assert_eq!(collection.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn exhausted_counter_rejects_inserts() {
        let mut collection = Collection::new("notes");
        let last = RecordId::new(u64::MAX).expect("non-zero id");
        collection.exhaust_after(last);
        let err = collection
            .insert_with(|id| id.get())
            .expect_err("counter exhausted");
        assert_eq!(err, StoreError::ids_exhausted("notes"));
        assert!(collection.to_vec().is_empty());
    }
}
