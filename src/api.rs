use std::future::Future;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::models::{ActivityRecord, Credentials, Question, SignupForm, StatsSummary, User};

/// Deployment the original sheet talks to; overridable with `--api-url`.
pub const DEFAULT_API_URL: &str = "https://dsa-sheet-backend-34xk.onrender.com";

/// Failure of a backend call, already shaped for the UI: `Auth` forces a
/// logout when it happens on an authenticated call, everything else is
/// transient and leaves the session alone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Credentials rejected or token expired (unauthorized response).
    #[error("{message}")]
    Auth { message: String },
    /// Backend unreachable or the transport failed.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response unrelated to authentication.
    #[error("{message}")]
    Backend { message: String },
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}

/// Successful login/signup response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// The remote collaborator every data-bearing operation is delegated to.
/// Arguments are owned so call futures can outlive the borrow of the
/// backend handle inside UI tasks.
pub trait Backend: Clone + Send + Sync + 'static {
    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>> + Send;

    fn signup(
        &self,
        form: SignupForm,
    ) -> impl Future<Output = Result<AuthPayload, ApiError>> + Send;

    fn questions(
        &self,
        token: String,
        topic: String,
    ) -> impl Future<Output = Result<Vec<Question>, ApiError>> + Send;

    fn set_completed(
        &self,
        token: String,
        id: String,
        completed: bool,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn stats_summary(
        &self,
        token: String,
    ) -> impl Future<Output = Result<StatsSummary, ApiError>> + Send;

    fn activity(
        &self,
        token: String,
    ) -> impl Future<Output = Result<ActivityRecord, ApiError>> + Send;

    /// Re-stamps completion dates server-side so already-completed questions
    /// show up on the activity graph.
    fn sync_activity(&self, token: String) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SignupRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletedPatch {
    completed: bool,
}

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps a settled response onto the error taxonomy and decodes the body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Backend {
                    message: format!("unexpected response body: {err}"),
                });
        }

        let message = response
            .json::<ErrorPayload>()
            .await
            .ok()
            .and_then(|payload| payload.message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        if status == reqwest::StatusCode::UNAUTHORIZED {
            Err(ApiError::Auth { message })
        } else {
            Err(ApiError::Backend { message })
        }
    }

    /// Same mapping for endpoints whose body the client does not use.
    async fn expect_ok(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match Self::decode::<serde_json::Value>(response).await {
            Ok(_) => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn transport(err: reqwest::Error) -> ApiError {
        ApiError::Network(err.to_string())
    }
}

impl Backend for HttpBackend {
    async fn login(&self, credentials: Credentials) -> Result<AuthPayload, ApiError> {
        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&credentials)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn signup(&self, form: SignupForm) -> Result<AuthPayload, ApiError> {
        // confirm_password is a local concern and stays out of the request.
        let body = SignupRequest {
            username: &form.username,
            email: &form.email,
            password: &form.password,
        };
        let response = self
            .client
            .post(self.url("/api/auth/signup"))
            .json(&body)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn questions(&self, token: String, topic: String) -> Result<Vec<Question>, ApiError> {
        let response = self
            .client
            .get(self.url("/api/questions"))
            .query(&[("topic", topic.as_str())])
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn set_completed(
        &self,
        token: String,
        id: String,
        completed: bool,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .patch(self.url(&format!("/api/questions/{id}")))
            .json(&CompletedPatch { completed })
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }

    async fn stats_summary(&self, token: String) -> Result<StatsSummary, ApiError> {
        let response = self
            .client
            .get(self.url("/api/questions/stats/summary"))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn activity(&self, token: String) -> Result<ActivityRecord, ApiError> {
        let response = self
            .client
            .get(self.url("/api/questions/stats/activity"))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::decode(response).await
    }

    async fn sync_activity(&self, token: String) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url("/api/questions/migrate/timestamps"))
            .json(&serde_json::json!({}))
            .bearer_auth(&token)
            .send()
            .await
            .map_err(Self::transport)?;
        Self::expect_ok(response).await
    }
}
