use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        authentication::{cookies::cleared_session_cookie, handlers::issue_token::SessionResponse},
        server::{api_entities::response::Response, app_state::AppState},
    },
};

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Log out",
    description = "Clears the session cookie.",
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    jar: CookieJar,
) -> (CookieJar, Response<SessionResponse>) {
    if let Some(identity) = identity {
        info!(email = %identity.email, "logging out");
    }

    let jar = jar.add(cleared_session_cookie(state.args.is_production()));

    (jar, Response::OK(SessionResponse { success: true }))
}
