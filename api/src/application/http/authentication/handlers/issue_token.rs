use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use hunger_rescue_core::domain::authentication::{
    ports::AuthService, value_objects::IdentityClaims,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    authentication::{cookies::session_cookie, validators::IssueTokenValidator},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionResponse {
    pub success: bool,
}

#[utoipa::path(
    post,
    path = "/jwt",
    tag = "auth",
    summary = "Issue session token",
    description = "Signs the submitted identity claims and stores the token in an HttpOnly `token` cookie.",
    request_body = IssueTokenValidator,
    responses(
        (status = 200, body = SessionResponse)
    ),
)]
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidateJson(payload): ValidateJson<IssueTokenValidator>,
) -> Result<(CookieJar, Response<SessionResponse>), ApiError> {
    let jwt = state
        .service
        .issue_token(IdentityClaims {
            email: payload.email,
            name: payload.name,
            photo: payload.photo,
        })
        .await
        .map_err(ApiError::from)?;

    let jar = jar.add(session_cookie(jwt.token, state.args.is_production()));

    Ok((jar, Response::OK(SessionResponse { success: true })))
}
