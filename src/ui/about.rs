/// About page: biography, languages, hobbies, skills
use iced::widget::{button, column, container, row, text, Column};
use iced::{Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::state::catalog::Catalog;
use crate::state::data::SkillGroup;
use crate::state::page::Route;
use crate::Message;

fn pill_list<'a>(items: &'a [String]) -> Element<'a, Message> {
    Wrap::with_elements(
        items
            .iter()
            .map(|item| super::badge(item.as_str(), false))
            .collect(),
    )
    .spacing(8.0)
    .line_spacing(8.0)
    .into()
}

fn skill_group(group: &SkillGroup) -> Element<'_, Message> {
    container(
        column![text(group.category.as_str()).size(18), pill_list(&group.items)].spacing(14),
    )
    .padding(20)
    .width(Length::Fixed(320.0))
    .style(style::card)
    .into()
}

pub fn view(catalog: &Catalog) -> Element<'_, Message> {
    let person = catalog.person();
    let about = catalog.about();

    let paragraphs: Vec<Element<'_, Message>> = about
        .paragraphs()
        .map(|paragraph| text(paragraph).size(16).into())
        .collect();
    let bio = Column::with_children(paragraphs).spacing(14);

    let intro = column![
        text("ABOUT").size(13).style(style::muted),
        text(person.name.as_str()).size(36),
        text(person.title.as_str()).size(18),
        text(person.location.as_str()).size(14).style(style::muted),
        bio,
        row![
            button(text("View Portfolio →"))
                .on_press(Message::Navigate(Route::Portfolio))
                .padding([10, 20]),
            button(text("Contact Me"))
                .on_press(Message::Navigate(Route::Contact))
                .style(button::secondary)
                .padding([10, 20]),
        ]
        .spacing(12),
    ]
    .spacing(12)
    .max_width(760);

    let extras = row![
        column![text("Languages").size(18), pill_list(&about.languages)]
            .spacing(12)
            .width(Length::Fill),
        column![text("Interests").size(18), pill_list(&about.hobbies)]
            .spacing(12)
            .width(Length::Fill),
    ]
    .spacing(32);

    let skills: Vec<Element<'_, Message>> = catalog.skills().iter().map(skill_group).collect();

    column![
        intro,
        extras,
        text("Skills & Expertise").size(26),
        Wrap::with_elements(skills).spacing(20.0).line_spacing(20.0),
    ]
    .spacing(32)
    .into()
}
