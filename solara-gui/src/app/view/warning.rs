use std::convert::From;

use iced::Length;

use solara_ui::{component::notification, widget::*};

use crate::app::error::Error;

/// Simple warning message displayed to non technical user.
pub struct WarningMessage(String);

impl From<&Error> for WarningMessage {
    fn from(error: &Error) -> WarningMessage {
        match error {
            Error::Simulation(_) => WarningMessage("Simulation failed".to_string()),
            Error::SaveQuote(_) => WarningMessage("Failed to save quote".to_string()),
            Error::LoadUsers(_) => WarningMessage("Failed to load users".to_string()),
            Error::UpdateRole(_) => WarningMessage("Failed to update role".to_string()),
            Error::LoadInventory(_) => {
                WarningMessage("Failed to load inventory data".to_string())
            }
            Error::AddListing(_) => WarningMessage("Failed to add item".to_string()),
        }
    }
}

impl std::fmt::Display for WarningMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn warn<'a, T: 'a + Clone>(error: Option<&Error>) -> Container<'a, T> {
    if let Some(w) = error {
        let message: WarningMessage = w.into();
        notification::warning(message.to_string(), w.to_string()).width(Length::Fill)
    } else {
        Container::new(Column::new()).width(Length::Fill)
    }
}
