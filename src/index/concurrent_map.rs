use crate::core::types::DocumentId;
use parking_lot::{Mutex, MutexGuard};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

/// A fixed-size array of independently-locked buckets, each an ordered map
/// keyed by `DocumentId`. A key maps to its bucket via `key as u64 mod N`.
///
/// Used by the parallel query evaluator so that workers touching different
/// documents never contend on a single lock, while two workers touching the
/// same document still serialize correctly.
pub struct ConcurrentMap<V> {
    buckets: Vec<Mutex<BTreeMap<DocumentId, V>>>,
}

/// A scoped handle holding the bucket's lock plus a mutable reference to
/// the (possibly just-inserted) value for one key. Releases the lock when
/// dropped.
pub struct Access<'a, V> {
    guard: MutexGuard<'a, BTreeMap<DocumentId, V>>,
    key: DocumentId,
}

impl<V: Default> ConcurrentMap<V> {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "ConcurrentMap requires a positive bucket count");
        let buckets = (0..bucket_count).map(|_| Mutex::new(BTreeMap::new())).collect();
        ConcurrentMap { buckets }
    }

    fn bucket_index(&self, key: DocumentId) -> usize {
        (key as u64 % self.buckets.len() as u64) as usize
    }

    /// Locks the bucket holding `key`, inserting `V::default()` if absent.
    pub fn access(&self, key: DocumentId) -> Access<'_, V> {
        let index = self.bucket_index(key);
        let mut guard = self.buckets[index].lock();
        guard.entry(key).or_default();
        Access { guard, key }
    }

    /// Merges every bucket into one ordered map, acquiring bucket locks one
    /// at a time. Callers must not hold any `Access` handle concurrently,
    /// and no writer may run during the merge — the bucket-by-bucket
    /// acquisition only gives a consistent snapshot when writers are
    /// quiesced first.
    pub fn build_ordinary(&self) -> BTreeMap<DocumentId, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for bucket in &self.buckets {
            let guard = bucket.lock();
            result.extend(guard.iter().map(|(k, v)| (*k, v.clone())));
        }
        result
    }
}

impl<V> Deref for Access<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.guard.get(&self.key).expect("entry inserted by access()")
    }
}

impl<V> DerefMut for Access<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.guard.get_mut(&self.key).expect("entry inserted by access()")
    }
}
