use iced::{widget::pick_list, Length};

use solara_ui::{
    component::{card, notification, separation, text::*},
    theme,
    widget::*,
};

use crate::app::view::message::{Message, UsersMessage};
use crate::backend::api::{Role, User};

fn user_row(user: &User, updating: bool) -> Element<'_, Message> {
    let user_id = user.id;
    // The role select is frozen while this row's change is in flight.
    let role_cell: Element<'_, Message> = if updating {
        Container::new(p1_regular(user.role))
            .padding(5)
            .style(theme::pill::simple)
            .into()
    } else {
        pick_list(&Role::ALL[..], Some(user.role), move |role| {
            Message::Users(UsersMessage::RoleSelected(user_id, role))
        })
        .width(Length::Fixed(130.0))
        .into()
    };

    Row::new()
        .align_y(iced::Alignment::Center)
        .push(p1_regular(user.id).width(Length::FillPortion(1)))
        .push(
            Column::new()
                .spacing(5)
                .push(p1_bold(user.full_name.as_deref().unwrap_or("")))
                .push(p2_regular(&user.email).style(theme::text::secondary))
                .width(Length::FillPortion(4)),
        )
        .push(Container::new(role_cell).width(Length::FillPortion(2)))
        .push(
            Container::new(if updating {
                p2_regular("Updating...").style(theme::text::secondary)
            } else {
                p2_regular("")
            })
            .width(Length::FillPortion(1)),
        )
        .into()
}

/// `updating` holds the id of the row with a role change in flight, if any.
pub fn users_view(users: &[User], updating: Option<u32>, loaded: bool) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(20)
        .push(
            Column::new()
                .spacing(5)
                .push(h2("User Management"))
                .push(
                    p2_regular("Manage system users and access roles.")
                        .style(theme::text::secondary),
                ),
        );

    if !loaded {
        return content.push(notification::pending("Loading users...")).into();
    }

    let mut table = Column::new()
        .spacing(10)
        .push(
            Row::new()
                .push(
                    p2_medium("ID")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(1)),
                )
                .push(
                    p2_medium("User")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(4)),
                )
                .push(
                    p2_medium("Role")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(2)),
                )
                .push(
                    p2_medium("Actions")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(1)),
                ),
        )
        .push(separation().width(Length::Fill));

    for user in users {
        table = table.push(user_row(user, updating == Some(user.id)));
    }

    content = content.push(card::simple(table).width(Length::Fill));
    content.into()
}
