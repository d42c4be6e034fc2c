use storage::{
    ResultStore,
    dto::results::SubmitResultsRequest,
    error::Result,
    models::ContestantResult,
    repository::results::ResultRepository,
};

/// Store a judge's first submission for a competition
pub async fn create_results(
    store: &ResultStore,
    request: &SubmitResultsRequest,
) -> Result<Vec<ContestantResult>> {
    let repo = ResultRepository::new(store);
    repo.create(request).await
}

/// Replace a judge's existing submission for a competition
pub async fn update_results(
    store: &ResultStore,
    request: &SubmitResultsRequest,
) -> Result<Vec<ContestantResult>> {
    let repo = ResultRepository::new(store);
    repo.update(request).await
}

/// All results of a competition across judges
pub async fn get_results_by_competition(
    store: &ResultStore,
    competition_id: i32,
) -> Vec<ContestantResult> {
    let repo = ResultRepository::new(store);
    repo.find_by_competition(competition_id).await
}

/// Results one judge submitted for a competition
pub async fn get_results_by_judge(
    store: &ResultStore,
    competition_id: i32,
    judge_id: i32,
) -> Vec<ContestantResult> {
    let repo = ResultRepository::new(store);
    repo.find_by_judge(competition_id, judge_id).await
}
