use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::Color;

use crate::widget::Element;

/// Content stacked on top of dimmed base content.
pub struct Modal<'a, Message> {
    base: Element<'a, Message>,
    modal: Element<'a, Message>,
    on_blur: Option<Message>,
}

impl<'a, Message: Clone + 'a> Modal<'a, Message> {
    pub fn new(
        base: impl Into<Element<'a, Message>>,
        modal: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            base: base.into(),
            modal: modal.into(),
            on_blur: None,
        }
    }

    /// Message to emit when the dimmed area around the modal is pressed.
    pub fn on_blur(mut self, on_blur: Option<Message>) -> Self {
        self.on_blur = on_blur;
        self
    }
}

impl<'a, Message: Clone + 'a> From<Modal<'a, Message>> for Element<'a, Message> {
    fn from(modal: Modal<'a, Message>) -> Element<'a, Message> {
        let backdrop = center(opaque(modal.modal)).style(|_theme| container::Style {
            background: Some(
                Color {
                    a: 0.8,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        });
        stack![
            modal.base,
            if let Some(on_blur) = modal.on_blur {
                opaque(mouse_area(backdrop).on_press(on_blur))
            } else {
                opaque(backdrop)
            }
        ]
        .into()
    }
}
