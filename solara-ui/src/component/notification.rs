use crate::{component::text, theme, widget::*};
use iced::widget::{column, container};

/// Banner displayed above the dashboard content when an action failed.
pub fn warning<'a, T: 'a + Clone>(message: String, error: String) -> Container<'a, T> {
    container(
        column![
            text::p1_bold(message),
            text::p2_regular(error).style(theme::text::secondary)
        ]
        .spacing(5),
    )
    .padding(15)
    .style(theme::notification::error)
}

/// Banner displayed while a background operation is running.
pub fn pending<'a, T: 'a + Clone>(message: &'static str) -> Container<'a, T> {
    container(text::p1_bold(message))
        .padding(15)
        .style(theme::notification::pending)
}
