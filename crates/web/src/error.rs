use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    BadRequest(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
        }
    }
}

impl WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
            Self::Storage(StorageError::Conflict { .. }) => StatusCode::CONFLICT,
            Self::Storage(StorageError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Storage(StorageError::Conflict { .. }) => "Results already exist",
            Self::Storage(StorageError::NotFound { .. }) => "Results not found",
            Self::Storage(StorageError::InvalidArgument(_)) | Self::BadRequest(_) => {
                "Invalid request"
            }
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Storage(e) => e.to_string(),
            Self::BadRequest(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        let detail = self.detail();

        tracing::warn!(status = status_code.as_u16(), detail = %detail, "{}", self.title());

        let body = json!({
            "error": self.title(),
            "detail": detail,
            "status": status_code.as_u16(),
        });

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<JsonRejection> for WebError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

pub type ApiResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_errors_map_to_statuses() {
        let cases = [
            (
                WebError::from(StorageError::InvalidArgument("bad".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                WebError::from(StorageError::Conflict {
                    competition_id: 1,
                    judge_id: 1,
                }),
                StatusCode::CONFLICT,
            ),
            (
                WebError::from(StorageError::NotFound {
                    competition_id: 1,
                    judge_id: 1,
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                WebError::BadRequest("not json".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_detail_carries_storage_message() {
        let error = WebError::from(StorageError::InvalidArgument(
            "Invalid score 5 for contestant 10".to_string(),
        ));
        assert_eq!(error.title(), "Invalid request");
        assert_eq!(error.detail(), "Invalid score 5 for contestant 10");
    }
}
