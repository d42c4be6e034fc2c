use axum::{Json, extract::State};
use serde::Serialize;
use storage::ResultStore;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of judge submissions currently held in memory
    pub batches: usize,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(store): State<ResultStore>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        batches: store.batch_count().await,
    })
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use storage::ResultStore;
    use tower::ServiceExt;

    use crate::features::router;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = router(ResultStore::new())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["batches"], 0);
    }
}
