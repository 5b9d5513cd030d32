use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Extension, Router,
};

use crate::app_state::AppState;
use crate::graphql::graph_schema::AppSchema;

pub fn graphql_routes(schema: AppSchema, playground_enabled: bool) -> Router<AppState> {
    let route = if playground_enabled {
        get(graphql_playground).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new()
        .route("/graphql", route)
        .layer(Extension(schema))
}

pub async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// GraphQL Playground (GET /graphql)
pub async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn playground_serves_html() {
        let response = graphql_playground().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
