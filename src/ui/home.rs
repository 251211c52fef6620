/// Home page: hero, featured projects, call to action
use iced::widget::{button, column, horizontal_rule, horizontal_space, row, text};
use iced::{Alignment, Element};

use super::{project_card, style};
use crate::config::Settings;
use crate::state::catalog::Catalog;
use crate::state::page::Route;
use crate::Message;

pub fn view<'a>(catalog: &'a Catalog, settings: &Settings) -> Element<'a, Message> {
    let person = catalog.person();

    let hero = column![
        text("Good to see you here").size(14).style(style::muted),
        text(format!(
            "I'm {}, a {} who brings brands to life through storytelling, \
             visual design, and strategic thinking.",
            person.name,
            person.title.to_lowercase()
        ))
        .size(34),
        text(format!(
            "{}. I help brands connect authentically with their audiences through \
             photography, video, graphic design, and integrated campaigns.",
            person.tagline
        ))
        .size(18)
        .style(style::muted),
        row![
            button(text("Learn About Me →"))
                .on_press(Message::Navigate(Route::About))
                .padding([10, 20]),
            button(text("View Portfolio"))
                .on_press(Message::Navigate(Route::Portfolio))
                .style(button::secondary)
                .padding([10, 20]),
        ]
        .spacing(12),
    ]
    .spacing(20)
    .max_width(820)
    .padding([48, 0]);

    let featured = catalog.featured_projects(settings.featured_limit);

    let featured_header = row![
        column![
            text("SELECTED WORK").size(13).style(style::muted),
            text("Featured Projects").size(28),
        ]
        .spacing(6),
        horizontal_space(),
        button(text("View All →"))
            .on_press(Message::Navigate(Route::Portfolio))
            .style(button::text),
    ]
    .align_y(Alignment::End);

    column![
        hero,
        horizontal_rule(1),
        featured_header,
        project_card::showcase(settings, &featured),
        super::call_to_action(
            "Interested in working together?",
            "I'm always open to discussing new projects, creative ideas, or \
             opportunities to be part of your vision.",
            "Get in Touch",
            Route::Contact,
        ),
    ]
    .spacing(32)
    .into()
}
