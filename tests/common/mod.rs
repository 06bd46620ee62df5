mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from dsa-sheet for tests
pub use dsa_sheet::{
    ActivityRecord, ApiError, AuthPayload, Credentials, Difficulty, Disposition, Mount, Page,
    Question, Route, Session, SessionContext, SessionStore, SignupError, SignupForm, StatsSummary,
    User, ValidationError,
};
