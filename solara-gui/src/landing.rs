use iced::{Alignment, Length};

use solara_ui::{
    component::{button, text::*},
    widget::*,
};

#[derive(Debug, Clone)]
pub enum Message {
    GetStarted,
    Login,
    Register,
}

/// The screen shown before any session exists. "Get started" enters the
/// estimator as a guest, the two other buttons lead to the auth screens.
pub fn view<'a>() -> Element<'a, Message> {
    Column::new()
        .push(
            Container::new(
                Column::new()
                    .align_x(Alignment::Center)
                    .spacing(30)
                    .push(text("Plan your switch to solar").size(50).bold())
                    .push(p1_regular(
                        "Estimate the savings, payback time and return of a rooftop solar installation.",
                    ))
                    .push(
                        Row::new()
                            .spacing(20)
                            .push(
                                button::primary(None, "Get started")
                                    .width(Length::Fixed(200.0))
                                    .on_press(Message::GetStarted),
                            )
                            .push(
                                button::secondary(None, "Log in")
                                    .width(Length::Fixed(200.0))
                                    .on_press(Message::Login),
                            )
                            .push(
                                button::secondary(None, "Create account")
                                    .width(Length::Fixed(200.0))
                                    .on_press(Message::Register),
                            ),
                    ),
            )
            .center_x(Length::Fill)
            .center_y(Length::Fill),
        )
        .push(
            Container::new(caption("© 2026 Solara. All rights reserved."))
                .center_x(Length::Fill)
                .padding(20),
        )
        .height(Length::Fill)
        .into()
}
