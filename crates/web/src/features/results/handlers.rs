use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::{ResultStore, dto::results::SubmitResultsRequest, models::ContestantResult};

use crate::error::ApiResult;
use crate::features::RESULTS_BASE_PATH;

use super::services;

#[utoipa::path(
    post,
    path = "/api/competitionresults",
    request_body = SubmitResultsRequest,
    responses(
        (status = 201, description = "Results created successfully", body = Vec<ContestantResult>),
        (status = 400, description = "Invalid request data"),
        (status = 409, description = "Results already exist for this competition/judge combination")
    ),
    tag = "results"
)]
pub async fn create_results(
    State(store): State<ResultStore>,
    body: Result<Json<SubmitResultsRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = body?;

    tracing::info!(
        competition_id = request.competition_id,
        judge_id = request.judge_id,
        result_count = request.results.len(),
        "Creating results"
    );

    let results = services::create_results(&store, &request).await?;

    let location = format!(
        "{}/competition/{}/judge/{}",
        RESULTS_BASE_PATH, request.competition_id, request.judge_id
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(results),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/competitionresults",
    request_body = SubmitResultsRequest,
    responses(
        (status = 200, description = "Results updated successfully", body = Vec<ContestantResult>),
        (status = 400, description = "Invalid request data"),
        (status = 404, description = "No existing results found to update")
    ),
    tag = "results"
)]
pub async fn update_results(
    State(store): State<ResultStore>,
    body: Result<Json<SubmitResultsRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<ContestantResult>>> {
    let Json(request) = body?;

    tracing::info!(
        competition_id = request.competition_id,
        judge_id = request.judge_id,
        result_count = request.results.len(),
        "Updating results"
    );

    let results = services::update_results(&store, &request).await?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/competitionresults/competition/{competition_id}",
    params(
        ("competition_id" = i32, Path, description = "Competition identifier")
    ),
    responses(
        (status = 200, description = "Results retrieved successfully", body = Vec<ContestantResult>)
    ),
    tag = "results"
)]
pub async fn get_results_by_competition(
    State(store): State<ResultStore>,
    Path(competition_id): Path<i32>,
) -> Json<Vec<ContestantResult>> {
    tracing::info!(competition_id, "Getting results for competition");

    Json(services::get_results_by_competition(&store, competition_id).await)
}

#[utoipa::path(
    get,
    path = "/api/competitionresults/competition/{competition_id}/judge/{judge_id}",
    params(
        ("competition_id" = i32, Path, description = "Competition identifier"),
        ("judge_id" = i32, Path, description = "Judge identifier")
    ),
    responses(
        (status = 200, description = "Results retrieved successfully", body = Vec<ContestantResult>)
    ),
    tag = "results"
)]
pub async fn get_results_by_judge(
    State(store): State<ResultStore>,
    Path((competition_id, judge_id)): Path<(i32, i32)>,
) -> Json<Vec<ContestantResult>> {
    tracing::info!(competition_id, judge_id, "Getting results for judge");

    Json(services::get_results_by_judge(&store, competition_id, judge_id).await)
}
