use crate::{backend::api::Role, dir::SolaraDirectory, session::Session};

/// Data shared by the dashboard panels and their views.
///
/// `session` is `None` when the dashboard runs in guest mode, in which
/// case only the estimator is reachable.
#[derive(Debug, Clone)]
pub struct Cache {
    pub datadir: SolaraDirectory,
    pub session: Option<Session>,
}

impl Cache {
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|session| session.role())
    }

    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|session| session.token.clone())
    }
}
