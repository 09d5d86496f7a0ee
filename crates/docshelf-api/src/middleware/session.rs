//! Loads the browser session before a handler and persists it afterwards.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::http::header::SET_COOKIE;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::warn;

use docshelf_core::types::SessionData;

use crate::extractors::Session;
use crate::state::AppState;

/// Session middleware.
///
/// Looks up the session named by the cookie, starting a fresh one when the
/// cookie is absent or the session has expired. The cookie is only issued
/// once the session holds something worth keeping, and again whenever a
/// sign-in moves the session to a fresh id.
pub async fn session_layer(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.clone();

    let existing = match jar.get(&cookie_name) {
        Some(cookie) => {
            let id = cookie.value().to_string();
            state.sessions.load(&id).await.map(|data| (id, data))
        }
        None => None,
    };
    let is_new = existing.is_none();
    let (mut id, data) = existing.unwrap_or_else(|| (state.sessions.new_id(), SessionData::default()));

    let session = Session::new(data);
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;

    let data = session.snapshot();
    let worth_keeping = !data.is_empty();

    let mut issue_cookie = is_new && worth_keeping;
    if session.rotation_requested() && !is_new {
        id = state.sessions.rotate(&id).await;
        issue_cookie = worth_keeping;
    }
    state.sessions.save(&id, data).await;

    if issue_cookie {
        let cookie = Cookie::build((cookie_name, id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(state.config.session.secure_cookie)
            .build();

        match HeaderValue::from_str(&cookie.to_string()) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(error = %e, "Could not encode session cookie"),
        }
    }

    response
}
