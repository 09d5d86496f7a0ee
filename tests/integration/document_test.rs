//! Integration tests for listing, viewing, and editing documents.

mod helpers;

use axum::http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn test_index_lists_documents() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/html"));
    for name in ["about.txt", "changes.txt", "history.txt", "titles.md"] {
        assert!(response.body.contains(name), "missing {name}");
    }
    assert!(response.body.contains("New Document"));
}

#[tokio::test]
async fn test_viewing_text_document() {
    let app = TestApp::new().await;

    let response = app.get("/history.txt").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/plain"));
    assert_eq!(response.body, "1993 - Yukihiro Matsumoto dreams up Ruby.");
}

#[tokio::test]
async fn test_viewing_markdown_document() {
    let app = TestApp::new().await;

    let response = app.get("/titles.md").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/html"));
    assert!(response.body.contains("<h1>title</h1>"));
    assert!(response.body.contains("<p>some markdown</p>"));
}

#[tokio::test]
async fn test_document_not_found_flashes_once() {
    let app = TestApp::new().await;

    let response = app.get("/notafile.ext").await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("The notafile.ext file does not exist."));

    let response = app.get("/").await;
    assert!(!response.body.contains("does not exist"));
}

#[tokio::test]
async fn test_editing_document() {
    let app = TestApp::signed_in().await;

    let response = app.get("/changes.txt/edit").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("<textarea"));
    assert!(response.body.contains(r#"<button type="submit""#));
    assert!(response.body.contains("old content"));
}

#[tokio::test]
async fn test_editing_requires_sign_in() {
    let app = TestApp::new().await;

    let response = app.get("/changes.txt/edit").await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("You must be signed in to do that."));
}

#[tokio::test]
async fn test_editing_missing_document_redirects() {
    let app = TestApp::signed_in().await;

    let response = app.get("/ghost.txt/edit").await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("The ghost.txt file does not exist."));
}

#[tokio::test]
async fn test_updating_document() {
    let app = TestApp::signed_in().await;

    let response = app
        .post_form("/changes.txt", &[("file_content", "new content")])
        .await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("The changes.txt file has been updated."));

    let response = app.get("/changes.txt").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "new content");
}

#[tokio::test]
async fn test_updating_requires_sign_in() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/changes.txt", &[("file_content", "vandalized")])
        .await;
    response.assert_redirect_home();

    let response = app.get("/changes.txt").await;
    assert_eq!(response.body, "old content");
}

#[tokio::test]
async fn test_new_document_form() {
    let app = TestApp::signed_in().await;

    let response = app.get("/new_document").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="new_document_name""#));
}

#[tokio::test]
async fn test_new_document_form_requires_sign_in() {
    let app = TestApp::new().await;

    let response = app.get("/new_document").await;
    response.assert_redirect_home();
}

#[tokio::test]
async fn test_creating_document() {
    let app = TestApp::signed_in().await;

    let response = app
        .post_form("/add_new_document", &[("new_document_name", " story.md ")])
        .await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("The new document story.md has been created."));
    assert!(response.body.contains("story.md"));

    let response = app.get("/story.md").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.content_type().starts_with("text/html"));
}

#[tokio::test]
async fn test_creating_document_without_extension() {
    let app = TestApp::signed_in().await;

    let response = app
        .post_form("/add_new_document", &[("new_document_name", "history/txt")])
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("The document name must contain an extension."));
    assert!(!app.state.documents.store().exists("history/txt").await.expect("exists"));
}

#[tokio::test]
async fn test_creating_duplicate_document() {
    let app = TestApp::signed_in().await;

    let response = app
        .post_form("/add_new_document", &[("new_document_name", "about.txt")])
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("The document name must be unique."));
}

#[tokio::test]
async fn test_creating_overlong_document_name() {
    let app = TestApp::signed_in().await;
    let name = format!("{}.txt", "a".repeat(100));

    let response = app
        .post_form("/add_new_document", &[("new_document_name", &name)])
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        response
            .body
            .contains("The document name must be between 1 and 100 characters.")
    );
}

#[tokio::test]
async fn test_creating_requires_sign_in() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/add_new_document", &[("new_document_name", "story.md")])
        .await;
    response.assert_redirect_home();

    assert!(!app.state.documents.store().exists("story.md").await.expect("exists"));
}

#[tokio::test]
async fn test_deleting_document() {
    let app = TestApp::signed_in().await;

    let response = app.post_form("/about.txt/delete", &[]).await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("The about.txt file has been deleted."));
    assert!(!app.state.documents.store().exists("about.txt").await.expect("exists"));
}

#[tokio::test]
async fn test_deleting_document_from_script() {
    let app = TestApp::signed_in().await;

    let response = app.post_xhr("/about.txt/delete").await;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert!(response.body.is_empty());
    assert!(!app.state.documents.store().exists("about.txt").await.expect("exists"));

    let response = app.post_xhr("/about.txt/delete").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_requires_sign_in() {
    let app = TestApp::new().await;

    let response = app.post_form("/about.txt/delete", &[]).await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("You must be signed in to do that."));
    assert!(response.body.contains("about.txt"));
    assert!(app.state.documents.store().exists("about.txt").await.expect("exists"));
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).expect("json body");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "memory");
}
