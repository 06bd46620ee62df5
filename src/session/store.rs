use std::fs;
use std::io;
use std::path::PathBuf;

use crate::models::User;

use super::Session;

const TOKEN_ENTRY: &str = "token";
const USER_ENTRY: &str = "user";

/// Two-entry key-value store for the persisted session: an opaque `token`
/// string and a JSON-serialized `user` record, written together and cleared
/// together. Backed by files under one directory so tests can point it at a
/// temp dir.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Platform data directory for the app, falling back to the working
    /// directory when the platform reports none.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dsa-sheet")
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_ENTRY)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_ENTRY)
    }

    /// Reads the persisted session. One entry without the other counts as
    /// absence, and a user record that fails to parse is discarded rather
    /// than propagated.
    pub fn load(&self) -> Session {
        let token = fs::read_to_string(self.token_path())
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty());
        let user_raw = fs::read_to_string(self.user_path()).ok();

        match (token, user_raw) {
            (Some(token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Session::Authenticated { user, token },
                Err(err) => {
                    log::warn!("discarding malformed persisted user record: {err}");
                    Session::Anonymous
                }
            },
            _ => Session::Anonymous,
        }
    }

    /// Writes both entries; called only on auth success.
    pub fn save(&self, user: &User, token: &str) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), token)?;
        fs::write(self.user_path(), serde_json::to_string(user)?)?;
        Ok(())
    }

    /// Removes both entries. Missing files already count as cleared, and
    /// any other failure is logged instead of surfaced so logout can never
    /// fail.
    pub fn clear(&self) {
        for path in [self.token_path(), self.user_path()] {
            if let Err(err) = fs::remove_file(&path) {
                if err.kind() != io::ErrorKind::NotFound {
                    log::warn!("failed to clear {}: {err}", path.display());
                }
            }
        }
    }
}
