/// Navigation bar and footer shown on every page
use chrono::Datelike;
use iced::widget::{button, column, container, horizontal_rule, horizontal_space, row, text, Column, Row};
use iced::{Alignment, Element, Length, Theme};

use super::style;
use crate::state::catalog::Catalog;
use crate::state::page::Route;
use crate::Message;

fn nav_style(active: bool) -> fn(&Theme, button::Status) -> button::Style {
    if active {
        button::secondary
    } else {
        button::text
    }
}

/// Brand on the left, catalog navigation links on the right
pub fn navigation(catalog: &Catalog, current: Route) -> Element<'_, Message> {
    let brand = button(text(catalog.person().name.as_str()).size(20))
        .on_press(Message::Navigate(Route::Home))
        .style(button::text);

    // Links were validated when the catalog loaded, so every route resolves.
    let links: Vec<Element<'_, Message>> = catalog
        .nav_links()
        .iter()
        .filter_map(|link| {
            let route = link.route()?;
            Some(
                button(text(link.name.as_str()).size(16))
                    .on_press(Message::Navigate(route))
                    .style(nav_style(route == current))
                    .into(),
            )
        })
        .collect();
    let links = Row::with_children(links).spacing(8);

    container(
        row![brand, horizontal_space(), links]
            .align_y(Alignment::Center)
            .padding([12, 32]),
    )
    .width(Length::Fill)
    .style(style::card)
    .into()
}

/// Contact shortcut that copies an outbound link instead of opening it
fn copy_link<'a>(label: &'a str, link: String) -> Element<'a, Message> {
    button(text(label).size(14))
        .on_press(Message::CopyLink(link))
        .style(button::text)
        .padding([2, 0])
        .into()
}

pub fn footer(catalog: &Catalog) -> Element<'_, Message> {
    let person = catalog.person();

    let brand = column![
        text(person.name.as_str()).size(18),
        text(person.title.as_str()).size(14).style(style::muted),
    ]
    .spacing(6)
    .width(Length::Fill);

    let links: Vec<Element<'_, Message>> = catalog
        .nav_links()
        .iter()
        .filter_map(|link| {
            let route = link.route()?;
            Some(
                button(text(link.name.as_str()).size(14))
                    .on_press(Message::Navigate(route))
                    .style(button::text)
                    .padding([2, 0])
                    .into(),
            )
        })
        .collect();
    let navigation = column![text("Navigation").size(14), Column::with_children(links)]
        .spacing(12)
        .width(Length::Fill);

    let contact = column![
        text("Contact").size(14),
        copy_link(person.email.as_str(), person.mailto()),
        copy_link("LinkedIn", person.linkedin.clone()),
        copy_link(person.phone.as_str(), person.tel()),
    ]
    .spacing(8)
    .width(Length::Fill);

    let year = chrono::Local::now().year();
    let bottom = row![
        text(format!("{year} {}. All rights reserved.", person.name))
            .size(13)
            .style(style::muted),
        horizontal_space(),
        button(text("Get in touch").size(13))
            .on_press(Message::Navigate(Route::Contact))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    super::page_body(
        column![
            horizontal_rule(1),
            row![brand, navigation, contact].spacing(32),
            horizontal_rule(1),
            bottom,
        ]
        .spacing(24)
        .padding([24, 0]),
    )
}
