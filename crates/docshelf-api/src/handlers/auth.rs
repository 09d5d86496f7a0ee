//! Sign-in, sign-out, and sign-up handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use docshelf_core::error::ErrorKind;
use docshelf_core::types::Flash;
use docshelf_service::SignUpRequest;

use super::found;
use crate::error::ApiResult;
use crate::extractors::Session;
use crate::state::AppState;
use crate::views::{SignInView, SignUpView, render};

/// Form body for `POST /users/signin`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignInForm {
    pub username: String,
    pub password: String,
}

/// Form body for `POST /users/signup`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignUpForm {
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
}

/// GET /users/signin
pub async fn signin_form(session: Session) -> ApiResult<Response> {
    let view = SignInView {
        username: session.username(),
        flash: session.take_flash(),
        form_username: String::new(),
    };
    Ok(render(&view)?.into_response())
}

/// POST /users/signin
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignInForm>,
) -> ApiResult<Response> {
    match state.accounts.sign_in(&form.username, &form.password).await {
        Ok(username) => {
            session.sign_in(&username);
            session.flash_message("Welcome!");
            Ok(found("/"))
        }
        Err(e) if e.is(ErrorKind::Authentication) => {
            let view = SignInView {
                username: session.username(),
                flash: Flash::error(e.message),
                form_username: form.username,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(&view)?).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /users/signout
pub async fn signout(session: Session) -> Response {
    session.sign_out();
    session.flash_message("You have been signed out.");
    found("/")
}

/// GET /users/signup
pub async fn signup_form(session: Session) -> ApiResult<Response> {
    let view = SignUpView {
        username: session.username(),
        flash: session.take_flash(),
        form_username: String::new(),
    };
    Ok(render(&view)?.into_response())
}

/// POST /users/signup
///
/// A successful sign-up also signs the new user in.
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignUpForm>,
) -> ApiResult<Response> {
    let request = SignUpRequest {
        username: form.username.trim().to_string(),
        password: form.password,
        password_confirmation: form.password_confirmation,
    };

    match state.accounts.sign_up(&request).await {
        Ok(()) => {
            session.sign_in(&request.username);
            session.flash_message(format!(
                "Welcome, {}! Your account has been created.",
                request.username
            ));
            Ok(found("/"))
        }
        Err(e) if e.is(ErrorKind::Validation) => {
            let view = SignUpView {
                username: session.username(),
                flash: Flash::error(e.message),
                form_username: request.username,
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(&view)?).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
