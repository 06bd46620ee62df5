use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dsa_sheet::api::{ApiError, AuthPayload, Backend};
use dsa_sheet::models::{
    ActivityRecord, Credentials, Difficulty, Question, SignupForm, StatsSummary, User,
};
use dsa_sheet::session::SessionStore;
use tempfile::TempDir;

pub fn test_user() -> User {
    User {
        id: "u-1".to_string(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
    }
}

pub fn test_payload() -> AuthPayload {
    AuthPayload {
        token: "tok-123".to_string(),
        user: test_user(),
    }
}

pub fn make_question(id: &str, name: &str, difficulty: Difficulty, completed: bool) -> Question {
    Question {
        id: id.to_string(),
        name: name.to_string(),
        difficulty,
        completed,
        leetcode_link: None,
        gfg_link: None,
    }
}

/// Store rooted in a fresh temp dir. Keep the TempDir alive for the test.
pub fn temp_store() -> (SessionStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = SessionStore::new(dir.path());
    (store, dir)
}

/// Backend double that counts every call and returns canned results.
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    calls: Arc<AtomicUsize>,
    fail_auth: bool,
}

impl MockBackend {
    /// Every call is rejected as unauthorized, like a stale token would be.
    pub fn failing_auth() -> Self {
        Self {
            calls: Arc::default(),
            fail_auth: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_auth {
            Err(ApiError::Auth {
                message: "Invalid credentials".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl Backend for MockBackend {
    async fn login(&self, _credentials: Credentials) -> Result<AuthPayload, ApiError> {
        self.record()?;
        Ok(test_payload())
    }

    async fn signup(&self, form: SignupForm) -> Result<AuthPayload, ApiError> {
        self.record()?;
        let mut payload = test_payload();
        payload.user.username = form.username;
        payload.user.email = form.email;
        Ok(payload)
    }

    async fn questions(&self, _token: String, _topic: String) -> Result<Vec<Question>, ApiError> {
        self.record()?;
        Ok(vec![
            make_question("q-1", "Two Sum", Difficulty::Easy, true),
            make_question("q-2", "Rotate Array", Difficulty::Medium, false),
        ])
    }

    async fn set_completed(
        &self,
        _token: String,
        _id: String,
        _completed: bool,
    ) -> Result<(), ApiError> {
        self.record()
    }

    async fn stats_summary(&self, _token: String) -> Result<StatsSummary, ApiError> {
        self.record()?;
        Ok(StatsSummary {
            total: 10,
            completed: 4,
            easy_completed: 2,
            medium_completed: 1,
            hard_completed: 1,
        })
    }

    async fn activity(&self, _token: String) -> Result<ActivityRecord, ApiError> {
        self.record()?;
        Ok(ActivityRecord::new())
    }

    async fn sync_activity(&self, _token: String) -> Result<(), ApiError> {
        self.record()
    }
}
