use std::sync::Arc;

use iced::{Alignment, Length, Task};

use solara_ui::{
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use crate::backend::{
    api::{RegisterRequest, Role},
    Backend, BackendError,
};

use super::{valid_email, valid_password};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    // Message::Registered(Ok) is handled by the upper level wrapping the
    // RegisterState.
    Registered(Result<(), BackendError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    FullNameEdited(String),
    EmailEdited(String),
    PasswordEdited(String),
    ConfirmEdited(String),
    Submit,
    GoToLogin,
    BackToLanding,
}

pub struct RegisterState {
    backend: Arc<dyn Backend + Sync + Send>,

    full_name: form::Value<String>,
    email: form::Value<String>,
    password: form::Value<String>,
    confirm: form::Value<String>,

    processing: bool,
    connection_error: Option<BackendError>,
}

impl RegisterState {
    pub fn new(backend: Arc<dyn Backend + Sync + Send>) -> Self {
        Self {
            backend,
            full_name: form::Value::default(),
            email: form::Value::default(),
            password: form::Value::default(),
            confirm: form::Value::default(),
            processing: false,
            connection_error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::FullNameEdited(value)) => {
                self.full_name.valid = true;
                self.full_name.value = value;
            }
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.valid = valid_email(&value);
                self.email.value = value;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.valid = true;
                self.password.value = value;
            }
            Message::View(ViewMessage::ConfirmEdited(value)) => {
                self.confirm.valid = true;
                self.confirm.value = value;
            }
            Message::View(ViewMessage::Submit) => {
                if !self.processing {
                    self.full_name.valid = self.full_name.value.trim().len() >= 2;
                    self.email.valid = valid_email(&self.email.value);
                    self.password.valid = valid_password(&self.password.value);
                    self.confirm.valid = self.confirm.value == self.password.value;
                    if self.full_name.valid
                        && self.email.valid
                        && self.password.valid
                        && self.confirm.valid
                    {
                        self.processing = true;
                        self.connection_error = None;
                        let backend = self.backend.clone();
                        // Everyone self-registers as a client, other roles
                        // are granted by an admin afterwards.
                        let request = RegisterRequest {
                            email: self.email.value.clone(),
                            full_name: self.full_name.value.trim().to_string(),
                            password: self.password.value.clone(),
                            role: Role::Client,
                        };
                        return Task::perform(
                            async move { backend.register(&request).await },
                            Message::Registered,
                        );
                    }
                }
            }
            Message::Registered(Err(e)) => {
                self.processing = false;
                self.connection_error = Some(e);
            }
            _ => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let content = Into::<Element<ViewMessage>>::into(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(20)
                    .width(Length::Fill)
                    .push(h2("Create Account"))
                    .push(p2_regular("Get started with Solar ROI").style(theme::text::secondary))
                    .push(
                        Column::new()
                            .max_width(500)
                            .spacing(20)
                            .push(
                                Column::new().spacing(5).push(p1_bold("Full Name")).push(
                                    form::Form::new(
                                        "John Doe",
                                        &self.full_name,
                                        ViewMessage::FullNameEdited,
                                    )
                                    .warning("Name required")
                                    .size(P1_SIZE)
                                    .padding(10),
                                ),
                            )
                            .push(
                                Column::new().spacing(5).push(p1_bold("Email")).push(
                                    form::Form::new_trimmed(
                                        "name@example.com",
                                        &self.email,
                                        ViewMessage::EmailEdited,
                                    )
                                    .warning("Invalid email")
                                    .size(P1_SIZE)
                                    .padding(10),
                                ),
                            )
                            .push(
                                Column::new().spacing(5).push(p1_bold("Password")).push(
                                    form::Form::new("", &self.password, ViewMessage::PasswordEdited)
                                        .warning("Password must be at least 6 characters")
                                        .size(P1_SIZE)
                                        .padding(10)
                                        .secure(),
                                ),
                            )
                            .push(
                                Column::new()
                                    .spacing(5)
                                    .push(p1_bold("Confirm Password"))
                                    .push(
                                        form::Form::new("", &self.confirm, ViewMessage::ConfirmEdited)
                                            .warning("Passwords don't match")
                                            .size(P1_SIZE)
                                            .padding(10)
                                            .secure(),
                                    ),
                            )
                            .push(
                                button::primary(None, "Register")
                                    .width(Length::Fill)
                                    .on_press_maybe(if self.processing {
                                        None
                                    } else {
                                        Some(ViewMessage::Submit)
                                    }),
                            )
                            .push(
                                Row::new()
                                    .spacing(5)
                                    .align_y(Alignment::Center)
                                    .push(
                                        p2_regular("Already have an account?")
                                            .style(theme::text::secondary),
                                    )
                                    .push(
                                        button::transparent(None, "Login")
                                            .on_press(ViewMessage::GoToLogin),
                                    ),
                            ),
                    ),
            )
            .padding(50)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .map(Message::View);

        let mut col = Column::new();
        if let Some(error) = &self.connection_error {
            col = col.push(
                notification::warning("Registration failed".to_string(), error.to_string())
                    .width(Length::Fill),
            );
        }
        col.push(
            Container::new(
                button::secondary(None, "Go back")
                    .width(Length::Fixed(200.0))
                    .on_press(Message::View(ViewMessage::BackToLanding)),
            )
            .padding(20),
        )
        .push(content)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mock::ScriptedBackend;
    use iced::futures::StreamExt;
    use iced_runtime::{task::into_stream, Action};
    use serde_json::json;

    async fn outputs(task: Task<Message>) -> Vec<Message> {
        let mut msgs = Vec::new();
        if let Some(mut stream) = into_stream(task) {
            while let Some(action) = stream.next().await {
                if let Action::Output(msg) = action {
                    msgs.push(msg);
                }
            }
        }
        msgs
    }

    fn fill(state: &mut RegisterState, confirm: &str) {
        for msg in [
            ViewMessage::FullNameEdited("Ann Nguyen".to_string()),
            ViewMessage::EmailEdited("ann@example.com".to_string()),
            ViewMessage::PasswordEdited("secret1".to_string()),
            ViewMessage::ConfirmEdited(confirm.to_string()),
        ] {
            let _ = state.update(Message::View(msg));
        }
    }

    #[tokio::test]
    async fn register_rejects_password_mismatch() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let mut state = RegisterState::new(backend);
        fill(&mut state, "secret2");

        let task = state.update(Message::View(ViewMessage::Submit));
        assert!(outputs(task).await.is_empty());
        assert!(!state.confirm.valid);
        assert!(!state.processing);
    }

    #[tokio::test]
    async fn register_submits_a_client_account() {
        let backend = Arc::new(ScriptedBackend::new(vec![(
            Some(json!({
                "method": "register",
                "params": {
                    "email": "ann@example.com",
                    "full_name": "Ann Nguyen",
                    "password": "secret1",
                    "role": "client",
                },
            })),
            Ok(json!({"id": 4})),
        )]));
        let mut state = RegisterState::new(backend);
        fill(&mut state, "secret1");

        let task = state.update(Message::View(ViewMessage::Submit));
        assert!(state.processing);
        let msgs = outputs(task).await;
        assert!(matches!(msgs.as_slice(), [Message::Registered(Ok(()))]));
    }

    #[test]
    fn register_surfaces_server_refusal() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let mut state = RegisterState::new(backend);
        state.processing = true;

        let _ = state.update(Message::Registered(Err(BackendError::Http(
            Some(400),
            "The user with this email already exists".to_string(),
        ))));
        assert!(!state.processing);
        assert!(state.connection_error.is_some());
    }
}
