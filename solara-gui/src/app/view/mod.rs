mod message;
mod warning;

pub mod estimator;
pub mod inventory;
pub mod users;

pub use message::*;
use warning::warn;

use iced::{
    widget::{column, row, scrollable, Space},
    Length,
};

use solara_ui::{
    color,
    component::{button, text::*},
    theme,
    widget::*,
};

use crate::app::{cache::Cache, error::Error, menu::Menu};

fn menu_bar_highlight<'a, T: 'a>() -> Container<'a, T> {
    Container::new(Space::with_width(Length::Fixed(5.0)))
        .height(Length::Fixed(50.0))
        .style(theme::container::custom(color::AMBER))
}

pub fn sidebar<'a>(menu: &Menu, cache: &'a Cache) -> Container<'a, Message> {
    let mut menu_column = Column::new()
        .spacing(0)
        .width(Length::Fill)
        .push(
            Container::new(h3("Solara"))
                .padding(10)
                .align_x(iced::Alignment::Center)
                .width(Length::Fill),
        );

    for entry in Menu::entries(cache.role()) {
        let label = match entry {
            Menu::Estimator => "Estimator",
            Menu::Inventory => "Inventory",
            Menu::Users => "Users",
        };
        menu_column = menu_column.push(if *menu == entry {
            row!(
                button::menu_active(None, label)
                    .on_press(Message::Reload)
                    .width(Length::Fill),
                menu_bar_highlight(),
            )
        } else {
            row!(button::menu(None, label)
                .on_press(Message::Menu(entry))
                .width(Length::Fill))
        });
    }

    let account = if let Some(session) = &cache.session {
        Column::new()
            .spacing(10)
            .push(p2_regular(&session.user.email).style(theme::text::secondary))
            .push(
                button::menu(None, "Log out")
                    .on_press(Message::Logout)
                    .width(Length::Fill),
            )
    } else {
        Column::new().spacing(10).push(
            button::menu(None, "Log in")
                .on_press(Message::Login)
                .width(Length::Fill),
        )
    };

    Container::new(
        Column::new().push(menu_column.height(Length::Fill)).push(
            Container::new(account)
                .padding(10)
                .width(Length::Fill)
                .height(Length::Shrink),
        ),
    )
    .style(theme::container::foreground)
}

pub fn dashboard<'a, T: Into<Element<'a, Message>>>(
    menu: &Menu,
    cache: &'a Cache,
    warning: Option<&Error>,
    content: T,
) -> Element<'a, Message> {
    Row::new()
        .push(
            sidebar(menu, cache)
                .width(Length::FillPortion(20))
                .height(Length::Fill),
        )
        .push(
            Column::new()
                .push(warn(warning))
                .push(
                    Container::new(scrollable(row!(
                        Space::with_width(Length::FillPortion(1)),
                        column!(Space::with_height(Length::Fixed(30.0)), content.into())
                            .width(Length::FillPortion(8))
                            .max_width(1500),
                        Space::with_width(Length::FillPortion(1)),
                    )))
                    .center_x(Length::Fill)
                    .style(theme::container::background)
                    .height(Length::Fill),
                )
                .width(Length::FillPortion(130)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
