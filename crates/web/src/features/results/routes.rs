use axum::{
    Router,
    routing::{get, post},
};
use storage::ResultStore;

use super::handlers::{
    create_results, get_results_by_competition, get_results_by_judge, update_results,
};

pub fn routes() -> Router<ResultStore> {
    Router::new()
        .route("/", post(create_results).put(update_results))
        .route("/competition/:competition_id", get(get_results_by_competition))
        .route(
            "/competition/:competition_id/judge/:judge_id",
            get(get_results_by_judge),
        )
}
