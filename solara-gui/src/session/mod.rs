pub mod store;

use std::sync::Arc;

use crate::backend::{
    api::{Role, User},
    Backend, BackendError,
};
use crate::dir::SolaraDirectory;
use store::{SessionStoreError, StoredSession};

/// An authenticated user and the bearer token proving it.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Exchange credentials for a session and persist it.
///
/// The profile attached to the session always comes from `/auth/me`, not
/// from anything cached locally. Failing to persist the session is logged
/// but does not fail the login: the user is authenticated either way.
pub async fn log_in(
    backend: Arc<dyn Backend + Sync + Send>,
    datadir: SolaraDirectory,
    email: String,
    password: String,
) -> Result<Session, BackendError> {
    let tokens = backend.login(&email, &password).await?;
    let user = backend.current_user(&tokens.access_token).await?;

    let stored = StoredSession {
        access_token: tokens.access_token.clone(),
    };
    if let Err(e) = stored.to_file(&datadir).await {
        tracing::warn!("Failed to persist session: {}", e);
    }

    tracing::info!("User {} logged in", user.email);
    Ok(Session {
        token: tokens.access_token,
        user,
    })
}

/// Restore the session persisted by a previous run, if any.
///
/// A stored token is only trusted after the server resolved it to a live
/// profile. A rejected token deletes the file so the next start goes
/// straight to the landing screen.
pub async fn restore(
    backend: Arc<dyn Backend + Sync + Send>,
    datadir: SolaraDirectory,
) -> Result<Option<Session>, BackendError> {
    let stored = match StoredSession::from_file(&datadir) {
        Ok(stored) => stored,
        Err(SessionStoreError::NotFound) => return Ok(None),
        Err(e) => {
            tracing::warn!("Session file is unreadable: {}", e);
            return Ok(None);
        }
    };

    match backend.current_user(&stored.access_token).await {
        Ok(user) => {
            tracing::info!("Restored session for {}", user.email);
            Ok(Some(Session {
                token: stored.access_token,
                user,
            }))
        }
        Err(e) if e.is_unauthenticated() => {
            tracing::info!("Stored session is no longer valid");
            if let Err(e) = StoredSession::delete(&datadir).await {
                tracing::warn!("Failed to delete stale session file: {}", e);
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Drop the persisted session. The in-memory session is discarded by the
/// caller.
pub async fn log_out(datadir: SolaraDirectory) {
    if let Err(e) = StoredSession::delete(&datadir).await {
        tracing::warn!("Failed to delete session file: {}", e);
    }
}
