mod store;

pub use store::SessionStore;

use crate::api::{ApiError, AuthPayload, Backend};
use crate::models::{Credentials, SignupForm, User};

/// Authentication state. The enum carries user and token together, so an
/// authenticated session can never be missing either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        user: User,
        token: String,
    },
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated { user, .. } => Some(user),
            Session::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Authenticated { token, .. } => Some(token),
            Session::Anonymous => None,
        }
    }
}

/// Pre-network rejection of a signup form. Messages are surfaced verbatim
/// on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Username must be at least 3 characters")]
    UsernameTooShort,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// First failing check wins; the backend is only consulted once the form
/// passes all of them.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.username.chars().count() < 3 {
        return Err(ValidationError::UsernameTooShort);
    }
    if form.password.chars().count() < 6 {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Signup flow: local validation first, then the backend call. A form that
/// fails validation never reaches the network.
pub async fn submit_signup<B: Backend>(
    backend: &B,
    form: SignupForm,
) -> Result<AuthPayload, SignupError> {
    validate_signup(&form)?;
    Ok(backend.signup(form).await?)
}

/// Login flow; the backend does the credential check.
pub async fn submit_login<B: Backend>(
    backend: &B,
    credentials: Credentials,
) -> Result<AuthPayload, ApiError> {
    backend.login(credentials).await
}

/// The single writer for session state. Views read it by reference; every
/// mutation goes through one of the operations below, which keep the
/// persisted store and the in-memory state in step.
#[derive(Debug)]
pub struct SessionContext {
    session: Session,
    store: SessionStore,
}

impl SessionContext {
    /// Reads persisted credentials synchronously, before any route guard
    /// can evaluate. Malformed or partial persisted data reads as an
    /// anonymous session rather than an error.
    pub fn initialize(store: SessionStore) -> Self {
        let session = store.load();
        if session.is_authenticated() {
            log::info!("restored persisted session");
        }
        Self { session, store }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Login success: persist, then transition. Persistence is best-effort;
    /// a write failure costs the next restart, not this session.
    pub fn login_succeeded(&mut self, payload: AuthPayload) {
        if let Err(err) = self.store.save(&payload.user, &payload.token) {
            log::warn!("failed to persist session: {err:#}");
        }
        log::info!("logged in as {}", payload.user.username);
        self.session = Session::Authenticated {
            user: payload.user,
            token: payload.token,
        };
    }

    /// Signup success persists and transitions exactly like a login.
    pub fn signup_succeeded(&mut self, payload: AuthPayload) {
        self.login_succeeded(payload);
    }

    /// Unconditional reset to anonymous; cannot fail.
    pub fn logout(&mut self) {
        self.store.clear();
        self.session = Session::Anonymous;
        log::info!("logged out");
    }

    /// An authenticated call came back unauthorized: the token is stale, so
    /// the session resets exactly as on logout.
    pub fn auth_error(&mut self) {
        log::warn!("backend rejected the session token; forcing logout");
        self.logout();
    }
}
