use async_fd_lock::LockWrite;
use serde::{Deserialize, Serialize};
use std::io::SeekFrom;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};

use crate::dir::SolaraDirectory;

/// What survives a restart: the bearer token only. The user profile is
/// fetched again from the server when the session is restored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoredSession {
    pub access_token: String,
}

#[derive(Debug, Clone)]
pub enum SessionStoreError {
    NotFound,
    ReadingFile(String),
    WritingFile(String),
}

impl std::fmt::Display for SessionStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "Session file not found"),
            Self::ReadingFile(e) => write!(f, "Error while reading file: {}", e),
            Self::WritingFile(e) => write!(f, "Error while writing file: {}", e),
        }
    }
}

impl StoredSession {
    /// Read the session file, done synchronously at startup.
    pub fn from_file(datadir: &SolaraDirectory) -> Result<Self, SessionStoreError> {
        std::fs::read(datadir.session_file_path())
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SessionStoreError::NotFound,
                _ => SessionStoreError::ReadingFile(format!("Reading session file: {}", e)),
            })
            .and_then(|file_content| {
                serde_json::from_slice::<StoredSession>(&file_content).map_err(|e| {
                    SessionStoreError::ReadingFile(format!("Parsing session file: {}", e))
                })
            })
    }

    /// Overwrite the session file, holding an advisory write lock so that
    /// concurrent application instances do not interleave writes.
    pub async fn to_file(&self, datadir: &SolaraDirectory) -> Result<(), SessionStoreError> {
        let path = datadir.session_file_path();

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .await
            .map_err(|e| SessionStoreError::WritingFile(format!("Opening file: {}", e)))?
            .lock_write()
            .await
            .map_err(|e| SessionStoreError::WritingFile(format!("Locking file: {:?}", e)))?;

        let content = serde_json::to_vec_pretty(&self).map_err(|e| {
            SessionStoreError::WritingFile(format!("Failed to serialize session: {}", e))
        })?;

        file.seek(SeekFrom::Start(0)).await.map_err(|e| {
            SessionStoreError::WritingFile(format!("Failed to seek to start of file: {}", e))
        })?;

        file.write_all(&content).await.map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            SessionStoreError::WritingFile(e.to_string())
        })?;

        file.inner_mut()
            .set_len(content.len() as u64)
            .await
            .map_err(|e| SessionStoreError::WritingFile(format!("Failed to truncate file: {}", e)))
    }

    /// Remove the session file. Missing file is not an error: logging out
    /// twice must not fail.
    pub async fn delete(datadir: &SolaraDirectory) -> Result<(), SessionStoreError> {
        match tokio::fs::remove_file(datadir.session_file_path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::WritingFile(format!(
                "Removing session file: {}",
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn session_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());

        assert!(matches!(
            StoredSession::from_file(&datadir),
            Err(SessionStoreError::NotFound)
        ));

        let session = StoredSession {
            access_token: "eyJhbGciOi.token".to_string(),
        };
        session.to_file(&datadir).await.unwrap();
        assert_eq!(StoredSession::from_file(&datadir).unwrap(), session);

        // A shorter token must not leave trailing bytes behind.
        let shorter = StoredSession {
            access_token: "t".to_string(),
        };
        shorter.to_file(&datadir).await.unwrap();
        assert_eq!(StoredSession::from_file(&datadir).unwrap(), shorter);

        StoredSession::delete(&datadir).await.unwrap();
        assert!(matches!(
            StoredSession::from_file(&datadir),
            Err(SessionStoreError::NotFound)
        ));
        // Deleting again is fine.
        StoredSession::delete(&datadir).await.unwrap();
    }

    #[tokio::test]
    async fn corrupted_session_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let datadir = SolaraDirectory::new(dir.path().to_path_buf());
        std::fs::write(datadir.session_file_path(), b"not json").unwrap();
        assert!(matches!(
            StoredSession::from_file(&datadir),
            Err(SessionStoreError::ReadingFile(_))
        ));
    }
}
