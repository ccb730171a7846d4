pub mod button;
pub mod card;
pub mod form;
pub mod modal;
pub mod notification;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

pub fn separation<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Column::new().push(text::text(" ")))
        .style(theme::container::border)
        .height(Length::Fixed(1.0))
}
