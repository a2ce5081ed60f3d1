use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::application::auth::TOKEN_COOKIE;

/// Session cookie attributes. Production is `SameSite=None; Secure`, anything
/// else is `SameSite=Strict`.
fn base_cookie(value: String, production: bool) -> Cookie<'static> {
    let same_site = if production {
        SameSite::None
    } else {
        SameSite::Strict
    };

    Cookie::build((TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(same_site)
        .secure(production)
        .build()
}

pub fn session_cookie(token: String, production: bool) -> Cookie<'static> {
    base_cookie(token, production)
}

pub fn cleared_session_cookie(production: bool) -> Cookie<'static> {
    let mut cookie = base_cookie(String::new(), production);
    cookie.make_removal();
    cookie
}
