use std::sync::Arc;

use iced::{Alignment, Length, Task};

use solara_ui::{
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use crate::{
    backend::{Backend, BackendError},
    dir::SolaraDirectory,
    session::{self, Session},
};

use super::{valid_email, valid_password};

#[derive(Debug, Clone)]
pub enum Message {
    View(ViewMessage),
    // Message::Logged(Ok) is handled by the upper level wrapping the
    // LoginState.
    Logged(Result<Session, BackendError>),
}

#[derive(Debug, Clone)]
pub enum ViewMessage {
    EmailEdited(String),
    PasswordEdited(String),
    Submit,
    GoToRegister,
    BackToLanding,
}

pub struct LoginState {
    backend: Arc<dyn Backend + Sync + Send>,
    datadir: SolaraDirectory,

    email: form::Value<String>,
    password: form::Value<String>,

    processing: bool,
    // Shown when arriving from a successful registration.
    notice: Option<&'static str>,

    // Error due to connection
    connection_error: Option<BackendError>,
    // Authentication Error
    auth_error: Option<&'static str>,
}

impl LoginState {
    pub fn new(backend: Arc<dyn Backend + Sync + Send>, datadir: SolaraDirectory) -> Self {
        Self {
            backend,
            datadir,
            email: form::Value::default(),
            password: form::Value::default(),
            processing: false,
            notice: None,
            connection_error: None,
            auth_error: None,
        }
    }

    /// Entry point right after a successful registration.
    pub fn after_registration(
        backend: Arc<dyn Backend + Sync + Send>,
        datadir: SolaraDirectory,
    ) -> Self {
        Self {
            notice: Some("Account created! Please login."),
            ..Self::new(backend, datadir)
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(ViewMessage::EmailEdited(value)) => {
                self.email.valid = valid_email(&value);
                self.email.value = value;
            }
            Message::View(ViewMessage::PasswordEdited(value)) => {
                self.password.valid = true;
                self.password.value = value;
            }
            Message::View(ViewMessage::Submit) => {
                if !self.processing {
                    self.email.valid = valid_email(&self.email.value);
                    self.password.valid = valid_password(&self.password.value);
                    if self.email.valid && self.password.valid {
                        self.processing = true;
                        self.notice = None;
                        self.connection_error = None;
                        self.auth_error = None;
                        return Task::perform(
                            session::log_in(
                                self.backend.clone(),
                                self.datadir.clone(),
                                self.email.value.clone(),
                                self.password.value.clone(),
                            ),
                            Message::Logged,
                        );
                    }
                }
            }
            Message::Logged(Err(e)) => {
                self.processing = false;
                match e {
                    BackendError::Http(Some(400), _) | BackendError::Http(Some(401), _) => {
                        self.auth_error = Some("Invalid credentials");
                    }
                    _ => {
                        self.connection_error = Some(e);
                    }
                }
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
                    .push(h2("Login"))
                    .push(
                        p2_regular("Enter your credentials to access your account")
                            .style(theme::text::secondary),
                    )
                    .push(
                        Column::new()
                            .max_width(500)
                            .spacing(20)
                            .push_maybe(
                                self.notice.map(|n| text(n).style(theme::text::success)),
                            )
                            .push_maybe(
                                self.auth_error
                                    .map(|e| text(e).style(theme::text::warning)),
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
                                button::primary(None, "Login")
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
                                        p2_regular("Don't have an account?")
                                            .style(theme::text::secondary),
                                    )
                                    .push(
                                        button::transparent(None, "Register")
                                            .on_press(ViewMessage::GoToRegister),
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
                notification::warning("Login failed".to_string(), error.to_string())
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

    #[tokio::test]
    async fn login_rejects_invalid_email_without_calling_backend() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let dir = tempfile::tempdir().unwrap();
        let mut state = LoginState::new(backend, SolaraDirectory::new(dir.path().to_path_buf()));

        let _ = state.update(Message::View(ViewMessage::EmailEdited("nope".to_string())));
        let _ = state.update(Message::View(ViewMessage::PasswordEdited(
            "secret1".to_string(),
        )));
        let task = state.update(Message::View(ViewMessage::Submit));
        assert!(outputs(task).await.is_empty());
        assert!(!state.email.valid);
        assert!(!state.processing);
    }

    #[tokio::test]
    async fn login_rejects_short_password() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let dir = tempfile::tempdir().unwrap();
        let mut state = LoginState::new(backend, SolaraDirectory::new(dir.path().to_path_buf()));

        let _ = state.update(Message::View(ViewMessage::EmailEdited(
            "ann@example.com".to_string(),
        )));
        let _ = state.update(Message::View(ViewMessage::PasswordEdited("abc".to_string())));
        let task = state.update(Message::View(ViewMessage::Submit));
        assert!(outputs(task).await.is_empty());
        assert!(!state.password.valid);
        assert!(!state.processing);
    }

    #[tokio::test]
    async fn login_resolves_profile_and_persists_session() {
        let backend = Arc::new(ScriptedBackend::new(vec![
            (
                Some(json!({
                    "method": "login",
                    "params": {"email": "ann@example.com", "password": "secret1"},
                })),
                Ok(json!({"access_token": "tok-xyz", "token_type": "bearer"})),
            ),
            (
                Some(json!({"method": "current_user", "token": "tok-xyz"})),
                Ok(json!({
                    "id": 1,
                    "email": "ann@example.com",
                    "full_name": "Ann",
                    "role": "client",
                    "is_active": true,
                })),
            ),
        ]));
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        let mut state = LoginState::new(backend, datadir.clone());

        let _ = state.update(Message::View(ViewMessage::EmailEdited(
            "ann@example.com".to_string(),
        )));
        let _ = state.update(Message::View(ViewMessage::PasswordEdited(
            "secret1".to_string(),
        )));
        let task = state.update(Message::View(ViewMessage::Submit));
        assert!(state.processing);

        let msgs = outputs(task).await;
        match msgs.as_slice() {
            [Message::Logged(Ok(session))] => {
                assert_eq!(session.token, "tok-xyz");
                assert_eq!(session.role(), crate::backend::api::Role::Client);
            }
            other => panic!("unexpected messages: {:?}", other),
        }
        assert!(datadir.session_file_path().exists());
    }

    #[test]
    fn login_maps_bad_credentials_to_auth_error() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let dir = tempfile::tempdir().unwrap();
        let mut state = LoginState::new(backend, SolaraDirectory::new(dir.path().to_path_buf()));
        state.processing = true;

        let _ = state.update(Message::Logged(Err(BackendError::Http(
            Some(400),
            "Incorrect email or password".to_string(),
        ))));
        assert_eq!(state.auth_error, Some("Invalid credentials"));
        assert!(state.connection_error.is_none());
        assert!(!state.processing);

        let _ = state.update(Message::Logged(Err(BackendError::Http(
            Some(502),
            "Bad Gateway".to_string(),
        ))));
        assert!(state.connection_error.is_some());
    }
}
