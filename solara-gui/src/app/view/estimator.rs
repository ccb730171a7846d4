use iced::{
    widget::{pick_list, Space},
    Length,
};

use solara_ui::{
    color,
    component::{button, card, form, text::*},
    theme,
    widget::*,
};

use crate::app::view::message::{EstimatorMessage, Message};
use crate::backend::api::{Currency, Location, RoiMetrics, UsageProfile};

/// Title and the 3 segment progress bar of the wizard.
fn header<'a>(step: u8) -> Column<'a, Message> {
    let segment = |reached: bool| {
        Container::new(Space::with_height(Length::Fixed(6.0)))
            .width(Length::Fill)
            .style(if reached {
                theme::container::custom(color::AMBER)
            } else {
                theme::container::custom(color::GREY_6)
            })
    };
    Column::new()
        .spacing(10)
        .push(h2("Solar Estimator"))
        .push(
            Row::new()
                .spacing(10)
                .push(segment(step >= 1))
                .push(segment(step >= 2))
                .push(segment(step >= 3)),
        )
}

pub fn step_usage<'a>(bill: &'a form::Value<String>, currency: Currency) -> Element<'a, Message> {
    Column::new()
        .spacing(20)
        .max_width(600)
        .push(header(1))
        .push(card::simple(
            Column::new()
                .spacing(20)
                .push(h4_bold("Step 1: Usage"))
                .push(p2_regular("Tell us about your needs").style(theme::text::secondary))
                .push(
                    Column::new()
                        .spacing(5)
                        .push(p1_bold("Monthly Bill Estimate"))
                        .push(
                            Row::new()
                                .spacing(10)
                                .push(
                                    form::Form::new_trimmed("100", bill, |msg| {
                                        Message::Estimator(EstimatorMessage::BillEdited(msg))
                                    })
                                    .warning("Bill must be positive")
                                    .size(P1_SIZE)
                                    .padding(10),
                                )
                                .push(pick_list(&Currency::ALL[..], Some(currency), |c| {
                                    Message::Estimator(EstimatorMessage::CurrencySelected(c))
                                })),
                        ),
                )
                .push(
                    Row::new().push(Space::with_width(Length::Fill)).push(
                        button::primary(None, "Next")
                            .width(Length::Fixed(130.0))
                            .on_press(Message::Estimator(EstimatorMessage::Next)),
                    ),
                ),
        ))
        .into()
}

pub fn step_property<'a>(
    roof_area: &'a form::Value<String>,
    location: Location,
    profile: UsageProfile,
    processing: bool,
) -> Element<'a, Message> {
    Column::new()
        .spacing(20)
        .max_width(600)
        .push(header(2))
        .push(card::simple(
            Column::new()
                .spacing(20)
                .push(h4_bold("Step 2: Property"))
                .push(p2_regular("Tell us about your needs").style(theme::text::secondary))
                .push(
                    Column::new()
                        .spacing(5)
                        .push(p1_bold("Roof Area (m2)"))
                        .push(
                            form::Form::new_trimmed("50", roof_area, |msg| {
                                Message::Estimator(EstimatorMessage::RoofAreaEdited(msg))
                            })
                            .warning("Roof area must be at least 5m2")
                            .size(P1_SIZE)
                            .padding(10),
                        ),
                )
                .push(
                    Column::new()
                        .spacing(5)
                        .push(p1_bold("Location"))
                        .push(pick_list(&Location::ALL[..], Some(location), |l| {
                            Message::Estimator(EstimatorMessage::LocationSelected(l))
                        })),
                )
                .push(
                    Column::new()
                        .spacing(5)
                        .push(p1_bold("Usage Profile"))
                        .push(pick_list(&UsageProfile::ALL[..], Some(profile), |p| {
                            Message::Estimator(EstimatorMessage::ProfileSelected(p))
                        })),
                )
                .push(
                    Row::new()
                        .push(
                            button::secondary(None, "Back")
                                .width(Length::Fixed(130.0))
                                .on_press(Message::Estimator(EstimatorMessage::Previous)),
                        )
                        .push(Space::with_width(Length::Fill))
                        .push(
                            button::primary(None, if processing { "Calculating..." } else { "Calculate" })
                                .width(Length::Fixed(130.0))
                                .on_press_maybe(if processing {
                                    None
                                } else {
                                    Some(Message::Estimator(EstimatorMessage::Calculate))
                                }),
                        ),
                ),
        ))
        .into()
}

fn metric_card<'a>(title: &'static str, value: solara_ui::widget::Text<'a>) -> Container<'a, Message> {
    card::simple(
        Column::new()
            .spacing(10)
            .push(p1_bold(title))
            .push(value),
    )
    .width(Length::Fill)
}

pub fn results<'a>(
    metrics: &RoiMetrics,
    authenticated: bool,
    saving: bool,
    saved: bool,
) -> Element<'a, Message> {
    let save_controls: Element<'a, Message> = if saved {
        text("Quote saved successfully!")
            .style(theme::text::success)
            .into()
    } else if authenticated {
        button::primary(None, if saving { "Saving..." } else { "Save Estimate" })
            .width(Length::Fixed(200.0))
            .on_press_maybe(if saving {
                None
            } else {
                Some(Message::Estimator(EstimatorMessage::SaveQuote))
            })
            .into()
    } else {
        button::secondary(None, "Login to Save")
            .width(Length::Fixed(200.0))
            .on_press(Message::Login)
            .into()
    };

    Column::new()
        .spacing(20)
        .push(h2("Your Estimate"))
        .push(
            Row::new()
                .spacing(20)
                .push(metric_card(
                    "ROI",
                    h3(format!("{:.1}%", metrics.roi * 100.0)).style(theme::text::success),
                ))
                .push(metric_card(
                    "Payback Period",
                    h3(format!("{:.1} Years", metrics.payback_years)),
                ))
                .push(metric_card(
                    "Annual Savings",
                    h3(format!("${:.0}", metrics.net_profit)),
                )),
        )
        .push(
            Row::new()
                .spacing(20)
                .push(
                    button::secondary(None, "Start Over")
                        .width(Length::Fixed(200.0))
                        .on_press(Message::Estimator(EstimatorMessage::StartOver)),
                )
                .push(save_controls),
        )
        .into()
}
