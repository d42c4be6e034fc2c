use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single judge's score for one contestant in one competition round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContestantResult {
    pub id: i64,
    pub contestant_id: i32,
    pub name: String,
    pub score: f64,
    pub competition_id: i32,
    pub judge_id: i32,
    pub submitted_at: DateTime<Utc>,
}

/// Identifies one judge's batch of results within a competition.
///
/// Ordering is by competition first, then judge, so every batch of a
/// competition occupies one contiguous range of the key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultKey {
    pub competition_id: i32,
    pub judge_id: i32,
}

impl ResultKey {
    pub fn new(competition_id: i32, judge_id: i32) -> Self {
        Self {
            competition_id,
            judge_id,
        }
    }

    /// Every possible key belonging to `competition_id`
    pub fn competition_range(competition_id: i32) -> RangeInclusive<Self> {
        Self::new(competition_id, i32::MIN)..=Self::new(competition_id, i32::MAX)
    }
}
