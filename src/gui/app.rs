use std::path::PathBuf;

use iced::{Element, Task, Theme};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
};
use crate::api::HttpBackend;
use crate::router::Mount;
use crate::session::{SessionContext, SessionStore};

/// Launch configuration assembled in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub data_dir: PathBuf,
}

pub struct SheetApp {
    state: AppState,
    screen: ScreenData,
}

impl SheetApp {
    pub fn new(config: AppConfig) -> (Self, Task<Message>) {
        // The store is read synchronously here, so the session is settled
        // before the first route guard can evaluate.
        let session = SessionContext::initialize(SessionStore::new(config.data_dir));
        let state = AppState {
            session,
            backend: HttpBackend::new(config.api_url),
            sheet_mount: Mount::new("/sheet"),
        };
        (
            Self {
                state,
                screen: ScreenData::portfolio(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "DSA Practice Sheet".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_dispatch)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_dispatch)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// The dispatch enum has no parent of its own.
fn unwrap_dispatch(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

pub fn run(config: AppConfig) -> iced::Result {
    iced::application(
        move || SheetApp::new(config.clone()),
        SheetApp::update,
        SheetApp::view,
    )
    .title(SheetApp::title)
    .theme(SheetApp::theme)
    .run()
}
