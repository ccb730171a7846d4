use crate::{theme, widget::*};
use iced::widget::container;

/// Simple card container for dashboard content.
pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    container(content).padding(15).style(theme::card::simple)
}

/// Card container for modal overlays.
pub fn modal<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    container(content).padding(25).style(theme::card::modal)
}
