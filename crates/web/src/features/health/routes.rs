use axum::{Router, routing::get};
use storage::ResultStore;

use super::handlers::health;

pub fn routes() -> Router<ResultStore> {
    Router::new().route("/health", get(health))
}
