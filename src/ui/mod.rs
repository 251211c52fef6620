/// User interface module
///
/// One file per page plus the pieces they share:
/// - Navigation bar and footer (chrome.rs)
/// - Project cards, rows and image frames (project_card.rs)
/// - The project detail overlay (overlay.rs)
/// - Colors and surfaces (style.rs)
pub mod about;
pub mod chrome;
pub mod contact;
pub mod experience;
pub mod home;
pub mod overlay;
pub mod portfolio;
pub mod project_card;
pub mod style;

use iced::widget::{button, column, container, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::state::page::Route;
use crate::Message;

/// Small caption, large heading, optional lead paragraph
pub fn page_header<'a>(
    eyebrow: &'a str,
    heading: &'a str,
    lead: Option<&'a str>,
) -> Element<'a, Message> {
    column![
        text(eyebrow.to_uppercase()).size(13).style(style::muted),
        text(heading).size(36),
    ]
    .push_maybe(lead.map(|lead| text(lead).size(18).style(style::muted)))
    .spacing(10)
    .max_width(720)
    .into()
}

/// A pill with the given text
pub fn badge<'a>(label: impl text::IntoFragment<'a>, outlined: bool) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding([4, 10])
        .style(if outlined {
            style::outline_badge
        } else {
            style::badge
        })
        .into()
}

/// Wrap-free row of pills
pub fn badges<'a>(labels: impl IntoIterator<Item = &'a String>, outlined: bool) -> Row<'a, Message> {
    Row::with_children(labels.into_iter().map(|label| badge(label.as_str(), outlined)))
        .spacing(6)
}

/// Closing banner that points somewhere else in the app
pub fn call_to_action<'a>(
    heading: &'a str,
    body: &'a str,
    label: &'a str,
    route: Route,
) -> Element<'a, Message> {
    container(
        column![
            text(heading).size(24),
            text(body).style(style::muted),
            button(text(label))
                .on_press(Message::Navigate(route))
                .padding([10, 20]),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .padding(40)
    .width(Length::Fill)
    .style(style::card)
    .into()
}

/// Centered content column with the standard page gutter
pub fn page_body<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(
        container(content)
            .max_width(style::CONTENT_WIDTH)
            .padding([24, 32]),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// Label + value pair used in contact blocks
pub fn labelled<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    row![
        text(label).size(13).style(style::muted).width(Length::Fixed(90.0)),
        text(value),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
