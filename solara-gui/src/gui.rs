use std::sync::Arc;

use iced::{event, Subscription, Task};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use solara_ui::widget::Element;

use crate::{
    app::{self, cache::Cache, App},
    auth::{
        login::{self, LoginState},
        register::{self, RegisterState},
    },
    backend::{client::RestBackend, Backend, BackendError},
    dir::SolaraDirectory,
    landing,
    logger::setup_logger,
    session::{self, Session},
};

enum State {
    Landing,
    Login(Box<LoginState>),
    Register(Box<RegisterState>),
    App(App),
}

#[derive(Debug)]
pub enum Message {
    CtrlC,
    Event(iced::Event),
    Restored(Result<Option<Session>, BackendError>),
    LoggedOut,
    Landing(landing::Message),
    Login(Box<login::Message>),
    Register(Box<register::Message>),
    Run(Box<app::Message>),
}

async fn ctrl_c() -> Result<(), ()> {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("{}", e);
    };
    info!("Signal received, exiting");
    Ok(())
}

pub struct GUI {
    state: State,
    datadir: SolaraDirectory,
    backend: Arc<dyn Backend + Sync + Send>,
}

impl GUI {
    pub fn title(&self) -> String {
        "Solara".to_string()
    }

    pub fn new(
        (config, datadir, log_level): (app::Config, SolaraDirectory, Option<LevelFilter>),
    ) -> (GUI, Task<Message>) {
        let log_level = log_level
            .or_else(|| config.log_level().ok())
            .unwrap_or(LevelFilter::INFO);
        if let Err(e) = setup_logger(log_level, datadir.clone()) {
            eprintln!("Failed to set up the logger: {}", e);
        }

        let backend: Arc<dyn Backend + Sync + Send> = Arc::new(RestBackend::new(config.api_url()));
        let cmds = vec![
            Task::perform(ctrl_c(), |_| Message::CtrlC),
            Task::perform(
                session::restore(backend.clone(), datadir.clone()),
                Message::Restored,
            ),
        ];
        (
            Self {
                state: State::Landing,
                datadir,
                backend,
            },
            Task::batch(cmds),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match (&mut self.state, message) {
            (_, Message::CtrlC)
            | (
                _,
                Message::Event(iced::Event::Window(iced::window::Event::CloseRequested)),
            ) => iced::window::get_latest().and_then(iced::window::close),
            (State::Landing, Message::Restored(res)) => match res {
                Ok(Some(session)) => {
                    let cache = Cache {
                        datadir: self.datadir.clone(),
                        session: Some(session),
                    };
                    let (app, command) = App::new(cache, self.backend.clone());
                    self.state = State::App(app);
                    command.map(|msg| Message::Run(Box::new(msg)))
                }
                Ok(None) => Task::none(),
                Err(e) => {
                    tracing::warn!("Could not restore the previous session: {}", e);
                    Task::none()
                }
            },
            (State::Landing, Message::Landing(msg)) => match msg {
                landing::Message::GetStarted => {
                    let cache = Cache {
                        datadir: self.datadir.clone(),
                        session: None,
                    };
                    let (app, command) = App::new(cache, self.backend.clone());
                    self.state = State::App(app);
                    command.map(|msg| Message::Run(Box::new(msg)))
                }
                landing::Message::Login => {
                    self.state = State::Login(Box::new(LoginState::new(
                        self.backend.clone(),
                        self.datadir.clone(),
                    )));
                    Task::none()
                }
                landing::Message::Register => {
                    self.state =
                        State::Register(Box::new(RegisterState::new(self.backend.clone())));
                    Task::none()
                }
            },
            (State::Login(l), Message::Login(msg)) => match *msg {
                login::Message::View(login::ViewMessage::BackToLanding) => {
                    self.state = State::Landing;
                    Task::none()
                }
                login::Message::View(login::ViewMessage::GoToRegister) => {
                    self.state =
                        State::Register(Box::new(RegisterState::new(self.backend.clone())));
                    Task::none()
                }
                login::Message::Logged(Ok(session)) => {
                    let cache = Cache {
                        datadir: self.datadir.clone(),
                        session: Some(session),
                    };
                    let (app, command) = App::new(cache, self.backend.clone());
                    self.state = State::App(app);
                    command.map(|msg| Message::Run(Box::new(msg)))
                }
                _ => l.update(*msg).map(|msg| Message::Login(Box::new(msg))),
            },
            (State::Register(r), Message::Register(msg)) => match *msg {
                register::Message::View(register::ViewMessage::BackToLanding) => {
                    self.state = State::Landing;
                    Task::none()
                }
                register::Message::View(register::ViewMessage::GoToLogin) => {
                    self.state = State::Login(Box::new(LoginState::new(
                        self.backend.clone(),
                        self.datadir.clone(),
                    )));
                    Task::none()
                }
                register::Message::Registered(Ok(())) => {
                    self.state = State::Login(Box::new(LoginState::after_registration(
                        self.backend.clone(),
                        self.datadir.clone(),
                    )));
                    Task::none()
                }
                _ => r.update(*msg).map(|msg| Message::Register(Box::new(msg))),
            },
            (State::App(app), Message::Run(msg)) => match *msg {
                // A guest asked to keep their estimate, get them
                // authenticated first.
                app::Message::View(app::view::Message::Login) => {
                    self.state = State::Login(Box::new(LoginState::new(
                        self.backend.clone(),
                        self.datadir.clone(),
                    )));
                    Task::none()
                }
                app::Message::View(app::view::Message::Logout) => {
                    info!("User logged out");
                    self.state = State::Landing;
                    Task::perform(session::log_out(self.datadir.clone()), |_| {
                        Message::LoggedOut
                    })
                }
                _ => app.update(*msg).map(|msg| Message::Run(Box::new(msg))),
            },
            _ => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match &self.state {
            State::Landing => landing::view().map(Message::Landing),
            State::Login(v) => v.view().map(|msg| Message::Login(Box::new(msg))),
            State::Register(v) => v.view().map(|msg| Message::Register(Box::new(msg))),
            State::App(v) => v.view().map(|msg| Message::Run(Box::new(msg))),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                iced::Event::Window(iced::window::Event::CloseRequested),
                event::Status::Ignored,
            ) => Some(Message::Event(event)),
            _ => None,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::api::{Role, User},
        session::store::StoredSession,
        utils::mock::ScriptedBackend,
    };
    use iced::futures::StreamExt;
    use iced_runtime::{task::into_stream, Action};

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

    fn gui(backend: ScriptedBackend, datadir: SolaraDirectory) -> GUI {
        GUI {
            state: State::Landing,
            datadir,
            backend: Arc::new(backend),
        }
    }

    fn user(role: Role) -> User {
        User {
            id: 1,
            email: "ana@solara.energy".to_string(),
            full_name: Some("Ana".to_string()),
            role,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn guest_reaches_login_from_the_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        // An empty script: the guest flow must not touch the backend.
        let mut gui = gui(ScriptedBackend::new(vec![]), datadir);

        let _cmd = gui.update(Message::Landing(landing::Message::GetStarted));
        assert!(matches!(gui.state, State::App(_)));

        let _cmd = gui.update(Message::Run(Box::new(app::Message::View(
            app::view::Message::Login,
        ))));
        assert!(matches!(gui.state, State::Login(_)));
    }

    #[tokio::test]
    async fn restored_session_opens_the_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        let mut gui = gui(ScriptedBackend::new(vec![]), datadir);

        let session = Session {
            token: "tok".to_string(),
            user: user(Role::Client),
        };
        let _cmd = gui.update(Message::Restored(Ok(Some(session))));
        assert!(matches!(gui.state, State::App(_)));
    }

    #[tokio::test]
    async fn failed_restore_stays_on_the_landing_screen() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        let mut gui = gui(ScriptedBackend::new(vec![]), datadir);

        let _cmd = gui.update(Message::Restored(Err(BackendError::Unexpected(
            "connection refused".to_string(),
        ))));
        assert!(matches!(gui.state, State::Landing));
    }

    #[tokio::test]
    async fn logout_clears_the_stored_session() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        let stored = StoredSession {
            access_token: "tok".to_string(),
        };
        stored.to_file(&datadir).await.unwrap();
        assert!(datadir.session_file_path().exists());

        let mut gui = gui(ScriptedBackend::new(vec![]), datadir.clone());
        let session = Session {
            token: "tok".to_string(),
            user: user(Role::Admin),
        };
        let _cmd = gui.update(Message::Restored(Ok(Some(session))));

        let cmd = gui.update(Message::Run(Box::new(app::Message::View(
            app::view::Message::Logout,
        ))));
        assert!(matches!(gui.state, State::Landing));

        let msgs = outputs(cmd).await;
        assert!(matches!(msgs.first(), Some(Message::LoggedOut)));
        assert!(!datadir.session_file_path().exists());
    }

    #[tokio::test]
    async fn registration_success_lands_on_login() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        let mut gui = gui(ScriptedBackend::new(vec![]), datadir);

        let _cmd = gui.update(Message::Landing(landing::Message::Register));
        assert!(matches!(gui.state, State::Register(_)));

        let _cmd = gui.update(Message::Register(Box::new(register::Message::Registered(
            Ok(()),
        ))));
        assert!(matches!(gui.state, State::Login(_)));
    }
}
