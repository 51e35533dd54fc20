//! Generic ordered-collection editing.
//!
//! Every list-like dashboard section (skills, projects, experience,
//! education) is an ordered sequence of records with a stable identifier.
//! `Collection` captures the shared editing contract once: append a draft,
//! mutate a record in place, remove by id, always preserving insertion
//! order. Mutating operations report whether anything actually changed so
//! the session layer can decide when to flip its dirty flag.

use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a record within one collection.
///
/// Assigned once at creation time and never recomputed or reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Generates monotonic, millisecond-timestamp-based record ids.
///
/// Two ids requested within the same millisecond are disambiguated by
/// bumping past the last issued value, so ids from one generator are
/// strictly increasing and never collide.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next unique id.
    pub fn next_id(&mut self) -> RecordId {
        let now = chrono::Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        RecordId(self.last.to_string())
    }
}

/// One item in an ordered, user-editable collection.
pub trait Record {
    /// The stable identifier, immutable once assigned.
    fn id(&self) -> &RecordId;

    /// A freshly added record with all fields at their documented defaults.
    fn draft(id: RecordId) -> Self;
}

/// An ordered sequence of records of one shape.
///
/// Owned exclusively by its sub-editor; order is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
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

    /// Seeds a collection with existing records, preserving their order.
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Appends a draft record with a freshly generated id at the end.
    ///
    /// Returns a reference to the new record.
    pub fn push_draft(&mut self, ids: &mut IdGenerator) -> &R {
        self.records.push(R::draft(ids.next_id()));
        // Safe to unwrap because we just pushed an element
        self.records.last().unwrap()
    }

    /// Applies a field mutation to the record with the matching id.
    ///
    /// Returns `true` if a record was found and mutated; an absent id is a
    /// silent no-op returning `false`, to tolerate stale UI references.
    pub fn update(&mut self, id: &RecordId, mutate: impl FnOnce(&mut R)) -> bool {
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                mutate(record);
                true
            }
            None => false,
        }
    }

    /// Removes the record with the matching id, preserving the relative
    /// order of the remaining records.
    ///
    /// Returns `true` if a record was removed; `false` if the id was absent.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: RecordId,
        body: String,
    }

    impl Record for Note {
        fn id(&self) -> &RecordId {
            &self.id
        }

        fn draft(id: RecordId) -> Self {
            Self {
                id,
                body: String::new(),
            }
        }
    }

    #[test]
    fn test_push_draft_appends_with_defaults() {
        let mut ids = IdGenerator::new();
        let mut notes: Collection<Note> = Collection::new();

        let note = notes.push_draft(&mut ids);
        assert!(note.body.is_empty());
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_generator_ids_are_unique_and_monotonic() {
        let mut ids = IdGenerator::new();
        let issued: Vec<RecordId> = (0..100).map(|_| ids.next_id()).collect();

        let distinct: HashSet<&RecordId> = issued.iter().collect();
        assert_eq!(distinct.len(), issued.len());

        let numeric: Vec<i64> = issued.iter().map(|id| id.as_str().parse().unwrap()).collect();
        assert!(numeric.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_update_mutates_matching_record() {
        let mut ids = IdGenerator::new();
        let mut notes: Collection<Note> = Collection::new();
        let id = notes.push_draft(&mut ids).id.clone();

        let changed = notes.update(&id, |n| n.body = "hello".to_string());
        assert!(changed);
        assert_eq!(notes.get(&id).unwrap().body, "hello");
    }

    #[test]
    fn test_update_absent_id_is_silent_noop() {
        let mut notes: Collection<Note> = Collection::new();
        let changed = notes.update(&RecordId::from("missing"), |n| {
            n.body = "never".to_string()
        });
        assert!(!changed);
        assert!(notes.is_empty());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut ids = IdGenerator::new();
        let mut notes: Collection<Note> = Collection::new();
        let first = notes.push_draft(&mut ids).id.clone();
        let second = notes.push_draft(&mut ids).id.clone();
        let third = notes.push_draft(&mut ids).id.clone();

        assert!(notes.remove(&second));
        let remaining: Vec<RecordId> = notes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(remaining, vec![first, third]);
    }

    #[test]
    fn test_remove_absent_id_leaves_collection_unchanged() {
        let mut ids = IdGenerator::new();
        let mut notes: Collection<Note> = Collection::new();
        notes.push_draft(&mut ids);
        let before: Vec<Note> = notes.iter().cloned().collect();

        assert!(!notes.remove(&RecordId::from("missing")));
        let after: Vec<Note> = notes.iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_mixed_edit_sequence_keeps_insertion_order_and_unique_ids() {
        let mut ids = IdGenerator::new();
        let mut notes: Collection<Note> = Collection::new();

        let mut expected: Vec<RecordId> = Vec::new();
        for _ in 0..5 {
            expected.push(notes.push_draft(&mut ids).id.clone());
        }
        notes.remove(&expected.remove(1));
        notes.update(&expected[2], |n| n.body = "edited".to_string());
        expected.push(notes.push_draft(&mut ids).id.clone());

        let order: Vec<RecordId> = notes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(order, expected);

        let distinct: HashSet<&RecordId> = order.iter().collect();
        assert_eq!(distinct.len(), order.len());
    }
}
