//! In-memory keyed collections.

use std::collections::HashMap;
use std::sync::RwLock;

use shoplite_core::Entity;

/// In-memory collection keyed by entity id, iterable in insertion order.
///
/// All access is serialized through one `RwLock`; reads clone records out
/// so no lock is held across caller code. Intended as the system of record
/// for process-lifetime state; nothing is persisted.
#[derive(Debug)]
pub struct Collection<E: Entity> {
    inner: RwLock<Records<E>>,
}

#[derive(Debug)]
struct Records<E: Entity> {
    by_id: HashMap<E::Id, E>,
    order: Vec<E::Id>,
}

impl<E> Collection<E>
where
    E: Entity + Clone,
{
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                by_id: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    pub fn get(&self, id: &E::Id) -> Option<E> {
        let records = self.inner.read().ok()?;
        records.by_id.get(id).cloned()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.inner
            .read()
            .map(|records| records.by_id.contains_key(id))
            .unwrap_or(false)
    }

    /// Insert a record under its own id. Returns `false` (and leaves the
    /// collection untouched) when the id is already taken.
    pub fn insert(&self, entity: E) -> bool {
        let Ok(mut records) = self.inner.write() else {
            return false;
        };
        let id = entity.id().clone();
        if records.by_id.contains_key(&id) {
            return false;
        }
        records.order.push(id.clone());
        records.by_id.insert(id, entity);
        true
    }

    /// Read-modify-write under the write lock. Returns the updated record,
    /// or `None` when the id is absent.
    pub fn update_with<F>(&self, id: &E::Id, f: F) -> Option<E>
    where
        F: FnOnce(&mut E),
    {
        let mut records = self.inner.write().ok()?;
        let entity = records.by_id.get_mut(id)?;
        f(entity);
        Some(entity.clone())
    }

    /// Remove a record by id. Returns whether anything was removed.
    pub fn remove(&self, id: &E::Id) -> bool {
        let Ok(mut records) = self.inner.write() else {
            return false;
        };
        if records.by_id.remove(id).is_none() {
            return false;
        }
        records.order.retain(|existing| existing != id);
        true
    }

    /// All records matching `pred`, in insertion order.
    pub fn filter<P>(&self, pred: P) -> Vec<E>
    where
        P: Fn(&E) -> bool,
    {
        let records = match self.inner.read() {
            Ok(r) => r,
            Err(_) => return vec![],
        };

        records
            .order
            .iter()
            .filter_map(|id| records.by_id.get(id))
            .filter(|entity| pred(entity))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|records| records.by_id.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E> Default for Collection<E>
where
    E: Entity + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Record {
        id: u32,
        label: String,
    }

    impl Entity for Record {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    fn record(id: u32, label: &str) -> Record {
        Record {
            id,
            label: label.to_string(),
        }
    }

    #[test]
    fn insert_then_get_round_trips() {
        let coll = Collection::new();
        assert!(coll.insert(record(1, "one")));
        assert_eq!(coll.get(&1), Some(record(1, "one")));
        assert_eq!(coll.get(&2), None);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let coll = Collection::new();
        assert!(coll.insert(record(1, "first")));
        assert!(!coll.insert(record(1, "second")));
        // The original record survives.
        assert_eq!(coll.get(&1), Some(record(1, "first")));
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn update_with_mutates_in_place() {
        let coll = Collection::new();
        coll.insert(record(1, "before"));

        let updated = coll.update_with(&1, |r| r.label = "after".to_string());
        assert_eq!(updated, Some(record(1, "after")));
        assert_eq!(coll.get(&1), Some(record(1, "after")));

        assert_eq!(coll.update_with(&9, |_| {}), None);
    }

    #[test]
    fn remove_deletes_and_reports_absence() {
        let coll = Collection::new();
        coll.insert(record(1, "one"));

        assert!(coll.remove(&1));
        assert!(!coll.remove(&1));
        assert!(coll.is_empty());
    }

    #[test]
    fn filter_preserves_insertion_order() {
        let coll = Collection::new();
        coll.insert(record(3, "a"));
        coll.insert(record(1, "b"));
        coll.insert(record(2, "a"));

        let matched = coll.filter(|r| r.label == "a");
        assert_eq!(matched, vec![record(3, "a"), record(2, "a")]);
    }

    #[test]
    fn removed_ids_drop_out_of_iteration_order() {
        let coll = Collection::new();
        coll.insert(record(1, "x"));
        coll.insert(record(2, "x"));
        coll.insert(record(3, "x"));
        coll.remove(&2);

        let all = coll.filter(|_| true);
        assert_eq!(all, vec![record(1, "x"), record(3, "x")]);
    }
}
