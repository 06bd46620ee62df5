pub mod api;
pub mod heatmap;
pub mod models;
pub mod progress;
pub mod router;
pub mod session;

pub use api::{ApiError, AuthPayload, Backend, HttpBackend};
pub use heatmap::{Heatmap, HeatmapCell, derive_heatmap};
pub use models::{
    ActivityRecord, Credentials, Difficulty, GroupedQuestions, Question, SignupForm, StatsSummary,
    User,
};
pub use router::{Disposition, Mount, Page, Route};
pub use session::{Session, SessionContext, SessionStore, SignupError, ValidationError};

#[cfg(feature = "gui")]
pub mod gui;
