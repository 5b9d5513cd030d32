use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// JSON envelope for the non-GraphQL routes (health checks, unknown paths).
/// GraphQL answers use the engine's own `data`/`errors` shape instead.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn new(status: StatusCode, message: String, data: Option<T>) -> Self {
        ApiResponse {
            success: status.is_success(),
            status,
            message,
            timestamp: Utc::now().to_rfc3339(),
            data,
        }
    }

    /// 200 with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message.into(), Some(data))
    }
}

impl ApiResponse<()> {
    /// 404 for a path no route serves
    pub fn not_found(path: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("No route for {path}"), None)
    }
}
