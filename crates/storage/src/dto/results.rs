use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{ResultKey, Score};

/// Request payload for submitting or replacing one judge's scores
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultsRequest {
    #[validate(range(min = 1, message = "CompetitionId must be greater than 0"))]
    pub competition_id: i32,

    #[validate(range(min = 1, message = "JudgeId must be greater than 0"))]
    pub judge_id: i32,

    #[serde(default)]
    #[validate(length(min = 1, message = "At least one result is required"), nested)]
    pub results: Vec<ContestantScoreRequest>,
}

/// A single contestant's score within a submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_score"))]
pub struct ContestantScoreRequest {
    #[validate(range(min = 1, message = "ContestantId must be greater than 0"))]
    pub contestant_id: i32,

    #[serde(default)]
    pub name: String,

    /// Valid values are: 10 (Yes), 4.5 (Alt1), 4.3 (Alt2), 4.2 (Alt3), 0 (No)
    pub score: f64,
}

impl SubmitResultsRequest {
    pub fn key(&self) -> ResultKey {
        ResultKey::new(self.competition_id, self.judge_id)
    }
}

fn validate_score(item: &ContestantScoreRequest) -> Result<(), ValidationError> {
    if Score::from_value(item.score).is_some() {
        return Ok(());
    }

    let mut error = ValidationError::new("invalid_score");
    error.message = Some(
        format!(
            "Invalid score {} for contestant {}. Valid scores are: {}",
            item.score,
            item.contestant_id,
            Score::describe_all()
        )
        .into(),
    );
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(contestant_id: i32, score: f64) -> ContestantScoreRequest {
        ContestantScoreRequest {
            contestant_id,
            name: format!("Contestant {}", contestant_id),
            score,
        }
    }

    #[test]
    fn test_deserializes_camel_case_payload() {
        let request: SubmitResultsRequest = serde_json::from_str(
            r#"{"competitionId":1,"judgeId":2,"results":[{"contestantId":10,"name":"A","score":4.3}]}"#,
        )
        .unwrap();

        assert_eq!(request.key(), ResultKey::new(1, 2));
        assert_eq!(request.results.len(), 1);
        assert_eq!(request.results[0].contestant_id, 10);
        assert_eq!(request.results[0].score, 4.3);
    }

    #[test]
    fn test_missing_name_and_results_default_to_empty() {
        let request: SubmitResultsRequest =
            serde_json::from_str(r#"{"competitionId":1,"judgeId":2}"#).unwrap();
        assert!(request.results.is_empty());

        let item: ContestantScoreRequest =
            serde_json::from_str(r#"{"contestantId":10,"score":0}"#).unwrap();
        assert_eq!(item.name, "");
    }

    #[test]
    fn test_valid_request_passes() {
        let request = SubmitResultsRequest {
            competition_id: 1,
            judge_id: 1,
            results: vec![item(1, 0.0), item(2, 4.2), item(3, 4.3), item(4, 4.5), item(5, 10.0)],
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_results_fail() {
        let request = SubmitResultsRequest {
            competition_id: 1,
            judge_id: 1,
            results: vec![],
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("results"));
    }

    #[test]
    fn test_invalid_score_names_contestant_and_value() {
        let request = SubmitResultsRequest {
            competition_id: 1,
            judge_id: 1,
            results: vec![item(10, 10.0), item(11, 4.4)],
        };

        let message = crate::error::StorageError::from(request.validate().unwrap_err()).to_string();
        assert!(message.starts_with("results[1]: Invalid score 4.4 for contestant 11."));
        assert!(message.contains("10 (Yes)"));
    }

    #[test]
    fn test_non_positive_ids_fail_in_rule_order() {
        let request = SubmitResultsRequest {
            competition_id: 0,
            judge_id: -3,
            results: vec![item(0, 10.0)],
        };

        let message = crate::error::StorageError::from(request.validate().unwrap_err()).to_string();
        assert_eq!(
            message,
            "competition_id: CompetitionId must be greater than 0; \
             judge_id: JudgeId must be greater than 0; \
             results[0].contestant_id: ContestantId must be greater than 0"
        );
    }
}
