use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use tokio::sync::RwLock;

use crate::models::{ContestantResult, ResultKey};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

type Batches = BTreeMap<ResultKey, Vec<ContestantResult>>;

/// Process-lifetime storage for judge submissions.
///
/// Cloning is cheap: every clone shares the same batches and id counter, so a
/// single store can be handed to each request handler.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    batches: RwLock<Batches>,
    next_id: AtomicI64,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self {
            batches: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl ResultStore {
    /// Create an empty store whose first issued result id is 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of (competition, judge) batches currently stored
    pub async fn batch_count(&self) -> usize {
        self.inner.batches.read().await.len()
    }

    pub(crate) fn batches(&self) -> &RwLock<Batches> {
        &self.inner.batches
    }

    /// Issue the next store-wide result id. Ids are never reused.
    pub(crate) fn next_id(&self) -> i64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = ResultStore::new();
        assert_eq!(store.next_id(), 1);
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn test_clones_share_the_id_counter() {
        let store = ResultStore::new();
        let clone = store.clone();
        assert_eq!(store.next_id(), 1);
        assert_eq!(clone.next_id(), 2);
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = ResultStore::new();
        assert_eq!(store.batch_count().await, 0);
    }
}
