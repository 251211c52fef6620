/// Experience page: field filter and alternating career timeline
use iced::widget::{button, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::catalog::Catalog;
use crate::state::data::{Experience, ExperienceField};
use crate::state::filter::Filter;
use crate::state::page::{ExperiencePage, Route};
use crate::Message;

fn filter_bar(active: Filter<ExperienceField>) -> Element<'static, Message> {
    let chips: Vec<Element<'static, Message>> = Filter::<ExperienceField>::experience_choices()
        .into_iter()
        .map(|choice| {
            button(text(choice.label()).size(14))
                .on_press(Message::SetExperienceFilter(choice))
                .style(style::toggle(choice == active))
                .padding([8, 16])
                .into()
        })
        .collect();

    Row::with_children(chips)
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

fn entry_card(experience: &Experience) -> Element<'_, Message> {
    container(
        column![
            column![
                text(experience.role.as_str()).size(20),
                text(experience.organization.as_str())
                    .size(14)
                    .style(style::muted),
            ]
            .spacing(4),
            text(experience.description.as_str())
                .size(14)
                .style(style::muted),
            super::badges(experience.skills.iter(), false),
            horizontal_rule(1),
            super::badge(experience.field.label(), true),
        ]
        .spacing(14),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::card)
    .into()
}

/// One timeline row; even entries put the date on the left
fn timeline_row(index: usize, experience: &Experience) -> Element<'_, Message> {
    let date = container(text(experience.period()).size(14).style(style::muted))
        .width(Length::FillPortion(1))
        .padding([8, 16]);
    let card = container(entry_card(experience)).width(Length::FillPortion(1));

    let marker = text("●").size(14);

    let line = if index % 2 == 0 {
        row![
            date.align_right(Length::FillPortion(1)),
            marker,
            card
        ]
    } else {
        row![card, marker, date]
    };

    line.spacing(24).align_y(Alignment::Start).into()
}

pub fn view<'a>(catalog: &'a Catalog, page: &ExperiencePage) -> Element<'a, Message> {
    let entries = page.filter.apply(catalog.experiences());

    let timeline: Element<'a, Message> = if entries.is_empty() {
        text("No experience in this field yet.")
            .style(style::muted)
            .into()
    } else {
        let rows: Vec<Element<'a, Message>> = entries
            .iter()
            .copied()
            .enumerate()
            .map(|(index, experience)| timeline_row(index, experience))
            .collect();
        Column::with_children(rows).spacing(40).into()
    };

    let resume = container(
        row![
            column![
                text("Want the full picture?").size(20),
                text(
                    "Download my resume for a comprehensive overview of my \
                     experience and skills."
                )
                .style(style::muted),
            ]
            .spacing(8)
            .width(Length::Fill),
            button(text("Copy Resume Link"))
                .on_press(Message::CopyLink(catalog.person().resume_url.clone()))
                .style(button::secondary)
                .padding([10, 20]),
            button(text("Get in Touch →"))
                .on_press(Message::Navigate(Route::Contact))
                .padding([10, 20]),
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding(32)
    .style(style::card);

    column![
        super::page_header(
            "Career",
            "Professional Experience",
            Some(
                "A timeline of my professional journey across marketing, design, \
                 and media production. Each role has shaped my approach to creative \
                 problem-solving."
            ),
        ),
        filter_bar(page.filter),
        timeline,
        resume,
    ]
    .spacing(32)
    .into()
}
