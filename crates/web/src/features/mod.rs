use axum::Router;
use storage::ResultStore;

pub mod health;
pub mod results;

pub const RESULTS_BASE_PATH: &str = "/api/competitionresults";

/// All application routes with the shared store attached
pub fn router(store: ResultStore) -> Router {
    Router::new()
        .nest(RESULTS_BASE_PATH, results::routes::routes())
        .merge(health::routes::routes())
        .with_state(store)
}
