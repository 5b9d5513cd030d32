use axum::http::Uri;

use crate::utils::api_response::ApiResponse;

pub mod graphql;
pub mod health;

/// Fallback for unknown routes
pub async fn route_not_found(uri: Uri) -> ApiResponse<()> {
    ApiResponse::not_found(uri.path())
}
