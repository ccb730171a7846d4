use iced::{
    widget::{pick_list, Space},
    Length,
};

use solara_ui::{
    component::{button, card, form, notification, separation, text::*},
    theme,
    widget::*,
};

use super::warning::warn;
use crate::app::{error::Error, view::message::InventoryMessage, view::message::Message};
use crate::backend::api::{Currency, InventoryListing, ProductModel};

/// "solar_panel" -> "Solar panel".
fn kind_label(kind: &str) -> String {
    let mut label = kind.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

fn listing_row(listing: &InventoryListing) -> Element<'_, Message> {
    let title = match &listing.product {
        Some(product) => match &product.brand {
            Some(brand) => format!("{} {}", brand.name, product.model_number),
            None => product.model_number.clone(),
        },
        None => format!("Product #{}", listing.product_model_id),
    };
    let kind = listing
        .product
        .as_ref()
        .map(|product| kind_label(&product.kind))
        .unwrap_or_default();

    Row::new()
        .align_y(iced::Alignment::Center)
        .push(
            Column::new()
                .spacing(5)
                .push(p1_bold(title))
                .push_maybe(listing.product.as_ref().map(|product| {
                    caption(format!("Global ID: {}", product.id)).style(theme::text::secondary)
                }))
                .width(Length::FillPortion(3)),
        )
        .push(p1_regular(kind).width(Length::FillPortion(2)))
        .push(
            p1_regular(format!("{} {}", listing.base_price, listing.currency))
                .width(Length::FillPortion(2)),
        )
        .push(
            Container::new(
                Container::new(p2_regular(format!("{} units", listing.stock_level)))
                    .padding(5)
                    .style(if listing.stock_level > 0 {
                        theme::pill::success
                    } else {
                        theme::pill::warning
                    }),
            )
            .width(Length::FillPortion(2)),
        )
        .into()
}

pub fn inventory_view<'a>(listings: &'a [InventoryListing], loaded: bool) -> Element<'a, Message> {
    let mut content = Column::new().spacing(20).push(
        Row::new()
            .align_y(iced::Alignment::Center)
            .push(
                Column::new()
                    .spacing(5)
                    .push(h2("Inventory"))
                    .push(
                        p2_regular("Manage your product offerings and pricing.")
                            .style(theme::text::secondary),
                    )
                    .width(Length::Fill),
            )
            .push(
                button::primary(None, "Add Item")
                    .width(Length::Fixed(150.0))
                    .on_press(Message::Inventory(InventoryMessage::ShowAddDialog)),
            ),
    );

    if !loaded {
        return content
            .push(notification::pending("Loading inventory..."))
            .into();
    }

    let mut table = Column::new()
        .spacing(10)
        .push(
            Row::new()
                .push(
                    p2_medium("Product")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(3)),
                )
                .push(
                    p2_medium("Type")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(2)),
                )
                .push(
                    p2_medium("Price")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(2)),
                )
                .push(
                    p2_medium("Stock")
                        .style(theme::text::secondary)
                        .width(Length::FillPortion(2)),
                ),
        )
        .push(separation().width(Length::Fill));

    if listings.is_empty() {
        table = table.push(
            Container::new(
                p1_regular("No items in inventory. Add one to get started.")
                    .style(theme::text::secondary),
            )
            .padding(30)
            .center_x(Length::Fill),
        );
    } else {
        for listing in listings {
            table = table.push(listing_row(listing));
        }
    }

    content = content.push(card::simple(table).width(Length::Fill));
    content.into()
}

pub fn add_listing_modal<'a>(
    catalog: &'a [ProductModel],
    product: Option<&ProductModel>,
    price: &'a form::Value<String>,
    stock: &'a form::Value<String>,
    currency: Currency,
    warning: Option<&Error>,
    processing: bool,
) -> Element<'a, Message> {
    card::modal(
        Column::new()
            .spacing(20)
            .max_width(500)
            .push(h4_bold("Add Inventory Item"))
            .push(
                p2_regular("Select a product from the global catalog to sell.")
                    .style(theme::text::secondary),
            )
            .push(warn(warning))
            .push(
                Column::new()
                    .spacing(5)
                    .push(p1_bold("Product Model"))
                    .push(
                        pick_list(catalog, product.cloned(), |p| {
                            Message::Inventory(InventoryMessage::ProductSelected(p))
                        })
                        .placeholder("Select a product...")
                        .width(Length::Fill),
                    ),
            )
            .push(
                Row::new()
                    .spacing(10)
                    .push(
                        Column::new()
                            .spacing(5)
                            .push(p1_bold("Base Price"))
                            .push(
                                form::Form::new_trimmed("1000", price, |msg| {
                                    Message::Inventory(InventoryMessage::PriceEdited(msg))
                                })
                                .warning("Price must be positive")
                                .size(P1_SIZE)
                                .padding(10),
                            )
                            .width(Length::FillPortion(2)),
                    )
                    .push(
                        Column::new()
                            .spacing(5)
                            .push(p1_bold("Currency"))
                            .push(pick_list(&Currency::ALL[..], Some(currency), |c| {
                                Message::Inventory(InventoryMessage::CurrencySelected(c))
                            }))
                            .width(Length::FillPortion(1)),
                    ),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(p1_bold("Stock Level"))
                    .push(
                        form::Form::new_trimmed("10", stock, |msg| {
                            Message::Inventory(InventoryMessage::StockEdited(msg))
                        })
                        .warning("Stock must be a positive number")
                        .size(P1_SIZE)
                        .padding(10),
                    ),
            )
            .push(
                Row::new().push(Space::with_width(Length::Fill)).push(
                    button::primary(None, if processing { "Adding..." } else { "Add to Inventory" })
                        .width(Length::Fixed(200.0))
                        .on_press_maybe(if processing || product.is_none() {
                            None
                        } else {
                            Some(Message::Inventory(InventoryMessage::ConfirmAdd))
                        }),
                ),
            ),
    )
    .width(Length::Fixed(600.0))
    .into()
}
