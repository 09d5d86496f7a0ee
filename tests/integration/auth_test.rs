//! Integration tests for sign-in, sign-out, and sign-up.

mod helpers;

use axum::http::{StatusCode, header};

use helpers::TestApp;

#[tokio::test]
async fn test_signin_form() {
    let app = TestApp::new().await;

    let response = app.get("/users/signin").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(r#"name="username""#));
    assert!(response.body.contains(r#"name="password""#));
}

#[tokio::test]
async fn test_signin_success() {
    let app = TestApp::new().await;

    let response = app.sign_in("admin", "secret").await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("Welcome!"));
    assert!(response.body.contains("Signed in as admin."));
    assert!(response.body.contains("Sign Out"));
}

#[tokio::test]
async fn test_signin_bad_password() {
    let app = TestApp::new().await;

    let response = app.sign_in("admin", "wrong").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Invalid credentials."));
    assert!(response.body.contains(r#"value="admin""#));

    let response = app.get("/").await;
    assert!(!response.body.contains("Signed in as"));
}

#[tokio::test]
async fn test_signin_unknown_user() {
    let app = TestApp::new().await;

    let response = app.sign_in("nobody", "secret").await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Invalid credentials."));
}

#[tokio::test]
async fn test_signout() {
    let app = TestApp::signed_in().await;

    let response = app.post_form("/users/signout", &[]).await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("You have been signed out."));
    assert!(response.body.contains("Sign In"));
    assert!(!response.body.contains("Signed in as"));

    let response = app.get("/changes.txt/edit").await;
    response.assert_redirect_home();
}

#[tokio::test]
async fn test_session_cookie_attributes() {
    let app = TestApp::new().await;

    let response = app.sign_in("admin", "secret").await;

    let cookie = response
        .headers
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("session cookie");
    assert!(cookie.starts_with("docshelf_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_guest_without_flash_gets_no_cookie() {
    let app = TestApp::new().await;

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_signup_creates_account_and_signs_in() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/users/signup",
            &[
                ("username", "bumblebee"),
                ("password", "pollen"),
                ("password_confirmation", "pollen"),
            ],
        )
        .await;
    response.assert_redirect_home();

    let response = app.get("/").await;
    assert!(response.body.contains("Welcome, bumblebee! Your account has been created."));
    assert!(response.body.contains("Signed in as bumblebee."));

    app.post_form("/users/signout", &[]).await;
    let response = app.sign_in("bumblebee", "pollen").await;
    response.assert_redirect_home();
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/users/signup",
            &[
                ("username", "bumblebee"),
                ("password", "pollen"),
                ("password_confirmation", "nectar"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("The passwords do not match."));
    assert!(!app.state.accounts.exists("bumblebee").await.expect("exists"));
}

#[tokio::test]
async fn test_signup_username_taken() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/users/signup",
            &[
                ("username", "admin"),
                ("password", "other"),
                ("password_confirmation", "other"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("That username is already taken."));

    let response = app.sign_in("admin", "secret").await;
    response.assert_redirect_home();
}

#[tokio::test]
async fn test_signup_missing_username() {
    let app = TestApp::new().await;

    let response = app
        .post_form(
            "/users/signup",
            &[
                ("username", "   "),
                ("password", "pollen"),
                ("password_confirmation", "pollen"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("A username is required."));
}

#[tokio::test]
async fn test_signin_issues_fresh_session_id() {
    let app = TestApp::new().await;

    let response = app.get("/new_document").await;
    response.assert_redirect_home();
    let guest_cookie = app.cookie().expect("guest session cookie");

    let response = app.sign_in("admin", "secret").await;
    response.assert_redirect_home();
    let signed_in_cookie = app.cookie().expect("signed-in session cookie");
    assert!(response.headers.get(header::SET_COOKIE).is_some());
    assert_ne!(guest_cookie, signed_in_cookie);

    let response = app.get("/new_document").await;
    assert_eq!(response.status, StatusCode::OK);

    app.use_cookie(Some(guest_cookie));
    let response = app.get("/new_document").await;
    response.assert_redirect_home();
}

#[tokio::test]
async fn test_signup_issues_fresh_session_id() {
    let app = TestApp::new().await;

    app.get("/new_document").await;
    let guest_cookie = app.cookie().expect("guest session cookie");

    let response = app
        .post_form(
            "/users/signup",
            &[
                ("username", "bumblebee"),
                ("password", "pollen"),
                ("password_confirmation", "pollen"),
            ],
        )
        .await;
    response.assert_redirect_home();
    assert_ne!(app.cookie().expect("session cookie"), guest_cookie);

    app.use_cookie(Some(guest_cookie));
    let response = app.get("/").await;
    assert!(!response.body.contains("Signed in as"));
}
