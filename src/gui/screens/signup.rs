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
use crate::models::SignupForm;
use crate::router::{Mount, Page, Route};
use crate::session::{self, SignupError};

#[derive(Debug, Clone)]
pub struct SignupScreen {
    mount: Mount,
    form: SignupForm,
    error: Option<String>,
    loading: bool,
}

#[derive(Debug, Clone)]
pub enum SignupMessage {
    UsernameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    Submit,
    Completed(Result<AuthPayload, SignupError>),
    GoToLogin,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SignedUp(AuthPayload),
    Navigate(Route),
}

impl SignupScreen {
    pub fn new(mount: Mount) -> Self {
        Self {
            mount,
            form: SignupForm::default(),
            error: None,
            loading: false,
        }
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }
}

impl Screen for SignupScreen {
    type Message = SignupMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let submit_label = if self.loading {
            "Creating account..."
        } else {
            "Sign Up"
        };

        let mut form = column![text("Create Account").size(28)]
            .spacing(20)
            .padding(30)
            .max_width(420)
            .align_x(Center);

        if let Some(error) = &self.error {
            form = form.push(widgets::error_banner(error));
        }

        form = form
            .push(
                column![
                    text_input("Choose a unique username", &self.form.username).on_input(
                        |value| ScreenMessage::ScreenMessage(SignupMessage::UsernameChanged(value)),
                    ),
                    text("Minimum 3 characters, must be unique").size(12),
                ]
                .spacing(4),
            )
            .push(
                text_input("Enter your email", &self.form.email).on_input(|value| {
                    ScreenMessage::ScreenMessage(SignupMessage::EmailChanged(value))
                }),
            )
            .push(
                column![
                    text_input("Create a password", &self.form.password)
                        .secure(true)
                        .on_input(|value| {
                            ScreenMessage::ScreenMessage(SignupMessage::PasswordChanged(value))
                        }),
                    text("Minimum 6 characters").size(12),
                ]
                .spacing(4),
            )
            .push(
                text_input("Confirm your password", &self.form.confirm_password)
                    .secure(true)
                    .on_input(|value| {
                        ScreenMessage::ScreenMessage(SignupMessage::ConfirmPasswordChanged(value))
                    }),
            )
            .push(
                button(text(submit_label)).on_press_maybe(
                    (!self.loading)
                        .then_some(ScreenMessage::ScreenMessage(SignupMessage::Submit)),
                ),
            )
            .push(
                row![
                    text("Already have an account?"),
                    button(text("Login"))
                        .style(button::text)
                        .on_press(ScreenMessage::ScreenMessage(SignupMessage::GoToLogin)),
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
            SignupMessage::UsernameChanged(value) => {
                self.form.username = value;
                Task::none()
            }
            SignupMessage::EmailChanged(value) => {
                self.form.email = value;
                Task::none()
            }
            SignupMessage::PasswordChanged(value) => {
                self.form.password = value;
                Task::none()
            }
            SignupMessage::ConfirmPasswordChanged(value) => {
                self.form.confirm_password = value;
                Task::none()
            }
            SignupMessage::Submit => {
                if self.loading {
                    return Task::none();
                }
                self.error = None;
                // Local checks first; an invalid form never reaches the
                // backend.
                if let Err(err) = session::validate_signup(&self.form) {
                    self.error = Some(err.to_string());
                    return Task::none();
                }
                self.loading = true;
                let backend = state.backend.clone();
                let form = self.form.clone();
                Task::perform(
                    async move { session::submit_signup(&backend, form).await },
                    |result| ScreenMessage::ScreenMessage(SignupMessage::Completed(result)),
                )
            }
            SignupMessage::Completed(Ok(payload)) => {
                self.loading = false;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::SignedUp(
                    payload,
                )))
            }
            SignupMessage::Completed(Err(err)) => {
                self.loading = false;
                self.error = Some(signup_error_message(&err));
                Task::none()
            }
            SignupMessage::GoToLogin => {
                let route = self.mount.page(Page::Login);
                Task::done(ScreenMessage::ParentMessage(ParentMessage::Navigate(route)))
            }
        }
    }
}

fn signup_error_message(err: &SignupError) -> String {
    match err {
        SignupError::Invalid(err) => err.to_string(),
        SignupError::Api(ApiError::Auth { message } | ApiError::Backend { message }) => {
            message.clone()
        }
        SignupError::Api(ApiError::Network(detail)) => {
            log::error!("signup request failed: {detail}");
            "Signup failed. Please try again.".to_string()
        }
    }
}
