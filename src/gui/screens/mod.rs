pub mod home;
pub mod login;
pub mod portfolio;
pub mod signup;
pub mod topic;

use iced::{Element, Task};

use crate::{
    gui::{AppState, Message},
    router::{self, Page, Route},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Portfolio(portfolio::PortfolioScreen),
    Login(login::LoginScreen),
    Signup(signup::SignupScreen),
    Home(home::HomeScreen),
    Topic(topic::TopicScreen),
}

impl ScreenData {
    /// The landing view the application boots into.
    pub fn portfolio() -> Self {
        ScreenData::Portfolio(portfolio::PortfolioScreen::default())
    }

    /// Builds the screen for an already-resolved route along with its
    /// initial backend fetches.
    fn enter(route: &Route, state: &AppState) -> (Self, Task<ScreenMessage<Self>>) {
        match route {
            Route::Portfolio => (Self::portfolio(), Task::none()),
            Route::Sheet { mount, page } => match page {
                Page::Login => (
                    ScreenData::Login(login::LoginScreen::new(mount.clone())),
                    Task::none(),
                ),
                Page::Signup => (
                    ScreenData::Signup(signup::SignupScreen::new(mount.clone())),
                    Task::none(),
                ),
                Page::Home => {
                    let (screen, task) = home::HomeScreen::new(mount.clone(), state);
                    (
                        ScreenData::Home(screen),
                        task.map(ScreenMessage::ScreenMessage)
                            .map(Message::Home)
                            .map(ScreenMessage::ScreenMessage),
                    )
                }
                Page::Topic(name) => {
                    let (screen, task) = topic::TopicScreen::new(mount.clone(), name.clone(), state);
                    (
                        ScreenData::Topic(screen),
                        task.map(ScreenMessage::ScreenMessage)
                            .map(Message::Topic)
                            .map(ScreenMessage::ScreenMessage),
                    )
                }
            },
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::Portfolio(screen) => screen.view().map(Message::Portfolio),
            ScreenData::Login(screen) => screen.view().map(Message::Login),
            ScreenData::Signup(screen) => screen.view().map(Message::Signup),
            ScreenData::Home(screen) => screen.view().map(Message::Home),
            ScreenData::Topic(screen) => screen.view().map(Message::Topic),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Navigate(route)) => {
                let target = router::destination(route, state.session.session());
                log::debug!("navigating to {target}");
                let (screen, task) = ScreenData::enter(&target, state);
                *x = screen;
                task
            }
            (ScreenData::Portfolio(page), Message::Portfolio(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Portfolio)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    portfolio::ParentMessage::OpenSheet => {
                        let route = state.sheet_mount.home();
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
                    }
                },
            },
            (ScreenData::Login(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    login::ParentMessage::LoggedIn(payload) => {
                        let home = page.mount().home();
                        state.session.login_succeeded(payload);
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(home)))
                    }
                    login::ParentMessage::Navigate(route) => {
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
                    }
                },
            },
            (ScreenData::Signup(page), Message::Signup(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Signup)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    signup::ParentMessage::SignedUp(payload) => {
                        let home = page.mount().home();
                        state.session.signup_succeeded(payload);
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(home)))
                    }
                    signup::ParentMessage::Navigate(route) => {
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
                    }
                },
            },
            (ScreenData::Home(page), Message::Home(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Home)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    home::ParentMessage::LoggedOut => {
                        let login = page.mount().login();
                        state.session.logout();
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(login)))
                    }
                    home::ParentMessage::SessionExpired => {
                        let login = page.mount().login();
                        state.session.auth_error();
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(login)))
                    }
                    home::ParentMessage::Navigate(route) => {
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
                    }
                },
            },
            (ScreenData::Topic(page), Message::Topic(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Topic)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    topic::ParentMessage::SessionExpired => {
                        let login = page.mount().login();
                        state.session.auth_error();
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(login)))
                    }
                    topic::ParentMessage::Navigate(route) => {
                        Task::done(ScreenMessage::ScreenMessage(Message::Navigate(route)))
                    }
                },
            },
            // A backend result outliving the screen that requested it lands
            // here and is discarded instead of being applied to a stale view.
            _ => Task::none(),
        }
    }
}
