//! Tests for the route guards.
//!
//! Tests cover:
//! - Protected pages redirecting anonymous sessions to login
//! - Public-only pages redirecting authenticated sessions to home
//! - Redirect targets staying inside the originating mount prefix
//! - The portfolio staying reachable in every state

mod common;

use common::*;
use dsa_sheet::router::{destination, resolve};

fn authenticated() -> Session {
    Session::Authenticated {
        user: test_user(),
        token: "tok-123".to_string(),
    }
}

#[test]
fn test_mount_prefix_normalization() {
    assert_eq!(Mount::new("/sheet").prefix(), "/sheet");
    assert_eq!(Mount::new("/sheet/").prefix(), "/sheet");
    assert_eq!(Mount::root().prefix(), "");
}

#[test]
fn test_route_paths() {
    let sheet = Mount::new("/sheet");
    assert_eq!(Route::Portfolio.path(), "/");
    assert_eq!(sheet.login().path(), "/sheet/login");
    assert_eq!(sheet.page(Page::Signup).path(), "/sheet/signup");
    assert_eq!(sheet.home().path(), "/sheet/");
    assert_eq!(sheet.page(Page::Topic("Array".to_string())).path(), "/sheet/Array");
    assert_eq!(Mount::root().login().path(), "/login");
}

#[test]
fn test_protected_pages_redirect_anonymous_to_mount_login() {
    // The same guard serves both shells; the redirect target must carry the
    // shell's own prefix, not a hardcoded one.
    for mount in [Mount::root(), Mount::new("/sheet")] {
        let home = mount.home();
        let topic = mount.page(Page::Topic("Array".to_string()));

        assert_eq!(
            resolve(&home, &Session::Anonymous),
            Disposition::Redirect(mount.login())
        );
        assert_eq!(
            resolve(&topic, &Session::Anonymous),
            Disposition::Redirect(mount.login())
        );
    }

    let redirected = destination(Mount::new("/sheet").home(), &Session::Anonymous);
    assert_eq!(redirected.path(), "/sheet/login");
}

#[test]
fn test_public_only_pages_redirect_authenticated_to_mount_home() {
    let session = authenticated();
    for mount in [Mount::root(), Mount::new("/sheet")] {
        assert_eq!(
            resolve(&mount.login(), &session),
            Disposition::Redirect(mount.home())
        );
        assert_eq!(
            resolve(&mount.page(Page::Signup), &session),
            Disposition::Redirect(mount.home())
        );
    }

    let redirected = destination(Mount::new("/sheet").login(), &session);
    assert_eq!(redirected.path(), "/sheet/");
}

#[test]
fn test_allowed_routes_pass_through() {
    let sheet = Mount::new("/sheet");

    assert_eq!(resolve(&sheet.login(), &Session::Anonymous), Disposition::Allow);
    assert_eq!(
        resolve(&sheet.page(Page::Signup), &Session::Anonymous),
        Disposition::Allow
    );
    assert_eq!(resolve(&sheet.home(), &authenticated()), Disposition::Allow);
    assert_eq!(
        resolve(
            &sheet.page(Page::Topic("Binary Search".to_string())),
            &authenticated()
        ),
        Disposition::Allow
    );

    let route = sheet.home();
    assert_eq!(destination(route.clone(), &authenticated()), route);
}

#[test]
fn test_portfolio_always_reachable() {
    assert_eq!(resolve(&Route::Portfolio, &Session::Anonymous), Disposition::Allow);
    assert_eq!(resolve(&Route::Portfolio, &authenticated()), Disposition::Allow);
}

#[test]
fn test_logout_flips_guard_decisions() {
    let (store, _dir) = temp_store();
    let mut context = SessionContext::initialize(store);
    context.login_succeeded(test_payload());
    let sheet = Mount::new("/sheet");

    // Authenticated: home renders
    assert_eq!(resolve(&sheet.home(), context.session()), Disposition::Allow);

    // After logout the same request redirects to the mount's login
    context.logout();
    assert_eq!(
        resolve(&sheet.home(), context.session()),
        Disposition::Redirect(sheet.login())
    );
}
