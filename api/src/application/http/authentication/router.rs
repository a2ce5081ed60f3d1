use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::issue_token::{__path_issue_token, issue_token};
use super::handlers::logout::{__path_logout, logout};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(issue_token, logout))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/jwt"), post(issue_token))
        .route(&format!("{root_path}/logout"), post(logout))
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
