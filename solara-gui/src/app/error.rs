use crate::backend::BackendError;

/// What went wrong, by operation. The variant picks the banner headline,
/// the wrapped error its detail line.
#[derive(Debug, Clone)]
pub enum Error {
    Simulation(BackendError),
    SaveQuote(BackendError),
    LoadUsers(BackendError),
    UpdateRole(BackendError),
    LoadInventory(BackendError),
    AddListing(BackendError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Simulation(e)
            | Self::SaveQuote(e)
            | Self::LoadUsers(e)
            | Self::UpdateRole(e)
            | Self::LoadInventory(e)
            | Self::AddListing(e) => match e {
                BackendError::Http(_, detail) => write!(f, "{}", detail),
                BackendError::Unexpected(detail) => write!(f, "{}", detail),
            },
        }
    }
}
