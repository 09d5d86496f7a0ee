//! Document list, view, create, edit, update, and delete handlers.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Form;
use serde::Deserialize;

use docshelf_core::error::ErrorKind;
use docshelf_core::types::Flash;

use super::found;
use crate::error::ApiResult;
use crate::extractors::{Session, SignedIn};
use crate::state::AppState;
use crate::views::{DocumentRow, EditView, IndexView, NewDocumentView, render};

/// Form body for `POST /add_new_document`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewDocumentForm {
    pub new_document_name: String,
}

/// Form body for `POST /{name}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDocumentForm {
    pub file_content: String,
}

fn redirect_not_found(session: &Session, name: &str) -> Response {
    session.flash_message(format!("The {name} file does not exist."));
    found("/")
}

fn is_xhr(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
}

/// GET /
pub async fn index(State(state): State<AppState>, session: Session) -> ApiResult<Response> {
    let documents = state.documents.list().await?;

    let view = IndexView {
        username: session.username(),
        flash: session.take_flash(),
        documents: documents.into_iter().map(DocumentRow::from).collect(),
    };
    Ok(render(&view)?.into_response())
}

/// GET /new_document
pub async fn new_document(SignedIn(username): SignedIn, session: Session) -> ApiResult<Response> {
    let view = NewDocumentView {
        username: Some(username),
        flash: session.take_flash(),
        name: String::new(),
    };
    Ok(render(&view)?.into_response())
}

/// POST /add_new_document
pub async fn create_document(
    State(state): State<AppState>,
    SignedIn(username): SignedIn,
    session: Session,
    Form(form): Form<NewDocumentForm>,
) -> ApiResult<Response> {
    match state.documents.create(&form.new_document_name).await {
        Ok(name) => {
            session.flash_message(format!("The new document {name} has been created."));
            Ok(found("/"))
        }
        Err(e) if e.is(ErrorKind::Validation) => {
            let view = NewDocumentView {
                username: Some(username),
                flash: Flash::error(e.message),
                name: form.new_document_name.trim().to_string(),
            };
            Ok((StatusCode::UNPROCESSABLE_ENTITY, render(&view)?).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /{name}
///
/// Plain text is returned verbatim; markdown is rendered to HTML.
pub async fn view_document(
    State(state): State<AppState>,
    session: Session,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    match state.documents.view(&name).await {
        Ok(doc) => Ok(([(header::CONTENT_TYPE, doc.content_type())], doc.body).into_response()),
        Err(e) if e.is(ErrorKind::NotFound) => Ok(redirect_not_found(&session, &name)),
        Err(e) => Err(e.into()),
    }
}

/// GET /{name}/edit
pub async fn edit_document(
    State(state): State<AppState>,
    SignedIn(username): SignedIn,
    session: Session,
    Path(name): Path<String>,
) -> ApiResult<Response> {
    let content = match state.documents.source(&name).await {
        Ok(content) => content,
        Err(e) if e.is(ErrorKind::NotFound) => return Ok(redirect_not_found(&session, &name)),
        Err(e) => return Err(e.into()),
    };

    let view = EditView {
        username: Some(username),
        flash: session.take_flash(),
        name,
        content,
    };
    Ok(render(&view)?.into_response())
}

/// POST /{name}
pub async fn update_document(
    State(state): State<AppState>,
    _user: SignedIn,
    session: Session,
    Path(name): Path<String>,
    Form(form): Form<UpdateDocumentForm>,
) -> ApiResult<Response> {
    match state.documents.update(&name, &form.file_content).await {
        Ok(()) => {
            session.flash_message(format!("The {name} file has been updated."));
            Ok(found("/"))
        }
        Err(e) if e.is(ErrorKind::NotFound) => Ok(redirect_not_found(&session, &name)),
        Err(e) => Err(e.into()),
    }
}

/// POST /{name}/delete
///
/// Script-driven deletes (`X-Requested-With: XMLHttpRequest`) get a bare
/// `204`; form posts get a flash message and a redirect.
pub async fn delete_document(
    State(state): State<AppState>,
    _user: SignedIn,
    session: Session,
    Path(name): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let xhr = is_xhr(&headers);

    match state.documents.delete(&name).await {
        Ok(()) if xhr => Ok(StatusCode::NO_CONTENT.into_response()),
        Ok(()) => {
            session.flash_message(format!("The {name} file has been deleted."));
            Ok(found("/"))
        }
        Err(e) if e.is(ErrorKind::NotFound) && xhr => Ok(StatusCode::NOT_FOUND.into_response()),
        Err(e) if e.is(ErrorKind::NotFound) => Ok(redirect_not_found(&session, &name)),
        Err(e) => Err(e.into()),
    }
}
