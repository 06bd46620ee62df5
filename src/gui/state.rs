use crate::api::HttpBackend;
use crate::router::Mount;
use crate::session::SessionContext;

/// State shared by every screen: the single-writer session context, the
/// backend handle, and the mount the sheet sub-application lives under.
#[derive(Debug)]
pub struct AppState {
    pub session: SessionContext,
    pub backend: HttpBackend,
    pub sheet_mount: Mount,
}
