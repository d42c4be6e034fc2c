use std::collections::btree_map::Entry;
use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::ResultStore;
use crate::dto::results::{ContestantScoreRequest, SubmitResultsRequest};
use crate::error::{Result, StorageError};
use crate::models::{ContestantResult, ResultKey};

/// Repository for judge result operations
pub struct ResultRepository<'a> {
    store: &'a ResultStore,
}

impl<'a> ResultRepository<'a> {
    /// Create a new ResultRepository
    pub fn new(store: &'a ResultStore) -> Self {
        Self { store }
    }

    /// Store the first submission of a judge for a competition.
    ///
    /// Fails with [`StorageError::Conflict`] if that judge already submitted;
    /// the existing batch is left untouched.
    pub async fn create(&self, request: &SubmitResultsRequest) -> Result<Vec<ContestantResult>> {
        request.validate()?;

        let key = request.key();
        let mut batches = self.store.batches().write().await;

        let slot = match batches.entry(key) {
            Entry::Occupied(_) => {
                return Err(StorageError::Conflict {
                    competition_id: key.competition_id,
                    judge_id: key.judge_id,
                });
            }
            Entry::Vacant(slot) => slot,
        };

        let submitted_at = Utc::now();
        let results: Vec<ContestantResult> = request
            .results
            .iter()
            .map(|item| build_result(key, item, self.store.next_id(), submitted_at))
            .collect();

        slot.insert(results.clone());

        tracing::debug!(
            competition_id = key.competition_id,
            judge_id = key.judge_id,
            count = results.len(),
            "Stored new result batch"
        );

        Ok(results)
    }

    /// Replace a judge's batch for a competition.
    ///
    /// Contestants already present keep their result id; new contestants get
    /// a fresh one. Every returned result carries a new timestamp.
    pub async fn update(&self, request: &SubmitResultsRequest) -> Result<Vec<ContestantResult>> {
        request.validate()?;

        let key = request.key();
        let mut batches = self.store.batches().write().await;

        let Some(existing) = batches.get_mut(&key) else {
            return Err(StorageError::NotFound {
                competition_id: key.competition_id,
                judge_id: key.judge_id,
            });
        };

        // A contestant listed twice reuses each of its old ids at most once
        let mut reusable: HashMap<i32, VecDeque<i64>> = HashMap::new();
        for result in existing.iter() {
            reusable
                .entry(result.contestant_id)
                .or_default()
                .push_back(result.id);
        }

        let submitted_at = Utc::now();
        let results: Vec<ContestantResult> = request
            .results
            .iter()
            .map(|item| {
                let id = reusable
                    .get_mut(&item.contestant_id)
                    .and_then(VecDeque::pop_front)
                    .unwrap_or_else(|| self.store.next_id());
                build_result(key, item, id, submitted_at)
            })
            .collect();

        *existing = results.clone();

        tracing::debug!(
            competition_id = key.competition_id,
            judge_id = key.judge_id,
            count = results.len(),
            "Replaced result batch"
        );

        Ok(results)
    }

    /// All results of a competition across judges, grouped by ascending judge id
    pub async fn find_by_competition(&self, competition_id: i32) -> Vec<ContestantResult> {
        let batches = self.store.batches().read().await;

        batches
            .range(ResultKey::competition_range(competition_id))
            .flat_map(|(_, results)| results.iter().cloned())
            .collect()
    }

    /// The batch a single judge submitted, or nothing if they have not submitted yet
    pub async fn find_by_judge(&self, competition_id: i32, judge_id: i32) -> Vec<ContestantResult> {
        let batches = self.store.batches().read().await;

        batches
            .get(&ResultKey::new(competition_id, judge_id))
            .cloned()
            .unwrap_or_default()
    }
}

fn build_result(
    key: ResultKey,
    item: &ContestantScoreRequest,
    id: i64,
    submitted_at: DateTime<Utc>,
) -> ContestantResult {
    ContestantResult {
        id,
        contestant_id: item.contestant_id,
        name: item.name.clone(),
        score: item.score,
        competition_id: key.competition_id,
        judge_id: key.judge_id,
        submitted_at,
    }
}
