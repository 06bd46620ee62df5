//! Tests for the session state machine and its persisted store.
//!
//! Tests cover:
//! - Initialization from empty, valid, partial and malformed stores
//! - Login/signup success persistence and transitions
//! - Logout and forced logout on auth errors
//! - Local signup validation short-circuiting the backend

mod common;

use std::fs;

use common::*;
use dsa_sheet::session::{submit_login, submit_signup, validate_signup};

fn valid_form() -> SignupForm {
    SignupForm {
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
    }
}

#[test]
fn test_initialize_empty_store() {
    let (store, _dir) = temp_store();
    let context = SessionContext::initialize(store);

    assert!(!context.is_authenticated());
    assert_eq!(context.session(), &Session::Anonymous);
    assert!(context.user().is_none());
    assert!(context.token().is_none());
}

#[test]
fn test_initialize_restores_persisted_session() {
    let (store, dir) = temp_store();

    // 1. Authenticate and persist
    let mut context = SessionContext::initialize(store);
    context.login_succeeded(test_payload());
    assert!(context.is_authenticated());

    // 2. A fresh context over the same directory restores the same session
    let restored = SessionContext::initialize(SessionStore::new(dir.path()));
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), Some("tok-123"));
    assert_eq!(restored.user(), Some(&test_user()));
}

#[test]
fn test_initialize_malformed_user_is_anonymous() {
    let (store, dir) = temp_store();

    // Token and user entries exist, but the user record is not valid JSON
    fs::write(dir.path().join("token"), "tok-123").unwrap();
    fs::write(dir.path().join("user"), "{not valid json").unwrap();

    let context = SessionContext::initialize(store);
    assert_eq!(context.session(), &Session::Anonymous);
}

#[test]
fn test_initialize_partial_entries_are_absence() {
    // Token without user
    let (store, dir) = temp_store();
    fs::write(dir.path().join("token"), "tok-123").unwrap();
    assert_eq!(SessionContext::initialize(store).session(), &Session::Anonymous);

    // User without token
    let (store, dir2) = temp_store();
    fs::write(
        dir2.path().join("user"),
        serde_json::to_string(&test_user()).unwrap(),
    )
    .unwrap();
    assert_eq!(SessionContext::initialize(store).session(), &Session::Anonymous);
}

#[test]
fn test_logout_clears_store_and_state() {
    let (store, dir) = temp_store();
    let mut context = SessionContext::initialize(store);
    context.login_succeeded(test_payload());
    assert!(dir.path().join("token").is_file());
    assert!(dir.path().join("user").is_file());

    context.logout();

    assert_eq!(context.session(), &Session::Anonymous);
    assert!(context.user().is_none());
    assert!(context.token().is_none());
    assert!(!dir.path().join("token").exists());
    assert!(!dir.path().join("user").exists());

    // A restart after logout stays anonymous
    let restored = SessionContext::initialize(SessionStore::new(dir.path()));
    assert!(!restored.is_authenticated());
}

#[test]
fn test_auth_error_always_resets() {
    let (store, dir) = temp_store();
    let mut context = SessionContext::initialize(store);

    // From an authenticated session
    context.login_succeeded(test_payload());
    context.auth_error();
    assert_eq!(context.session(), &Session::Anonymous);
    assert!(!dir.path().join("token").exists());

    // And harmlessly from an anonymous one
    context.auth_error();
    assert_eq!(context.session(), &Session::Anonymous);
}

#[test]
fn test_validate_signup() {
    assert_eq!(validate_signup(&valid_form()), Ok(()));

    let mut mismatch = valid_form();
    mismatch.confirm_password = "hunter23".to_string();
    let err = validate_signup(&mismatch).unwrap_err();
    assert_eq!(err, ValidationError::PasswordMismatch);
    assert_eq!(err.to_string(), "Passwords do not match");

    let mut short_name = valid_form();
    short_name.username = "al".to_string();
    let err = validate_signup(&short_name).unwrap_err();
    assert_eq!(err, ValidationError::UsernameTooShort);
    assert_eq!(err.to_string(), "Username must be at least 3 characters");

    let mut short_password = valid_form();
    short_password.password = "abc".to_string();
    short_password.confirm_password = "abc".to_string();
    let err = validate_signup(&short_password).unwrap_err();
    assert_eq!(err, ValidationError::PasswordTooShort);
    assert_eq!(err.to_string(), "Password must be at least 6 characters");
}

#[tokio::test]
async fn test_signup_validation_issues_no_network_calls() {
    let backend = MockBackend::default();
    let mut form = valid_form();
    form.confirm_password = "different".to_string();

    let result = submit_signup(&backend, form).await;

    assert_eq!(
        result.unwrap_err(),
        SignupError::Invalid(ValidationError::PasswordMismatch)
    );
    assert_eq!(backend.call_count(), 0);
}

#[tokio::test]
async fn test_signup_success_reaches_backend_once() {
    let backend = MockBackend::default();

    let payload = submit_signup(&backend, valid_form()).await.unwrap();

    assert_eq!(backend.call_count(), 1);
    assert_eq!(payload.user.username, "ada");
    assert_eq!(payload.token, "tok-123");
}

#[tokio::test]
async fn test_login_surfaces_backend_rejection() {
    let backend = MockBackend::failing_auth();
    let credentials = Credentials {
        email: "ada@example.com".to_string(),
        password: "wrong".to_string(),
    };

    let err = submit_login(&backend, credentials).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Auth {
            message: "Invalid credentials".to_string()
        }
    );
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn test_login_success_transitions_session() {
    let backend = MockBackend::default();
    let (store, _dir) = temp_store();
    let mut context = SessionContext::initialize(store);

    let payload = submit_login(
        &backend,
        Credentials {
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
        },
    )
    .await
    .unwrap();
    context.login_succeeded(payload);

    assert!(context.is_authenticated());
    assert_eq!(context.user().map(|user| user.username.as_str()), Some("ada"));
}
