use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::api::{ApiError, AuthPayload};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};
use crate::models::Credentials;
use crate::router::{Mount, Page, Route};
use crate::session;

#[derive(Debug, Clone)]
pub struct LoginScreen {
    mount: Mount,
    email: String,
    password: String,
    error: Option<String>,
    loading: bool,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Completed(Result<AuthPayload, ApiError>),
    GoToSignup,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    LoggedIn(AuthPayload),
    Navigate(Route),
}

impl LoginScreen {
    pub fn new(mount: Mount) -> Self {
        Self {
            mount,
            email: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let submit_label = if self.loading { "Logging in..." } else { "Login" };

        let mut form = column![text("Login to DSA Sheet").size(28)]
            .spacing(20)
            .padding(30)
            .max_width(420)
            .align_x(Center);

        if let Some(error) = &self.error {
            form = form.push(widgets::error_banner(error));
        }

        form = form
            .push(
                text_input("Enter your email", &self.email).on_input(|value| {
                    ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(value))
                }),
            )
            .push(
                text_input("Enter your password", &self.password)
                    .secure(true)
                    .on_input(|value| {
                        ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(value))
                    }),
            )
            .push(
                button(text(submit_label)).on_press_maybe(
                    (!self.loading)
                        .then_some(ScreenMessage::ScreenMessage(LoginMessage::Submit)),
                ),
            )
            .push(
                row![
                    text("Don't have an account?"),
                    button(text("Sign up"))
                        .style(button::text)
                        .on_press(ScreenMessage::ScreenMessage(LoginMessage::GoToSignup)),
                ]
                .spacing(5)
                .align_y(Center),
            );

        container(form)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            LoginMessage::PasswordChanged(value) => {
                self.password = value;
                Task::none()
            }
            LoginMessage::Submit => {
                if self.loading {
                    return Task::none();
                }
                self.loading = true;
                self.error = None;
                let backend = state.backend.clone();
                let credentials = Credentials {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                Task::perform(
                    async move { session::submit_login(&backend, credentials).await },
                    |result| ScreenMessage::ScreenMessage(LoginMessage::Completed(result)),
                )
            }
            LoginMessage::Completed(Ok(payload)) => {
                self.loading = false;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::LoggedIn(
                    payload,
                )))
            }
            LoginMessage::Completed(Err(err)) => {
                self.loading = false;
                self.error = Some(login_error_message(&err));
                Task::none()
            }
            LoginMessage::GoToSignup => {
                let route = self.mount.page(Page::Signup);
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Navigate(route)))
            }
        }
    }
}

/// Backend-provided message when there is one, generic fallback otherwise.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Auth { message } | ApiError::Backend { message } => message.clone(),
        ApiError::Network(detail) => {
            log::error!("login request failed: {detail}");
            "Login failed. Please try again.".to_string()
        }
    }
}
