/// Project cards (grid), project rows (list) and the image frame they share
use iced::widget::{button, column, container, horizontal_space, image, row, text, Row};
use iced::{Alignment, ContentFit, Element, Length};

use super::style;
use crate::config::Settings;
use crate::state::data::Project;
use crate::Message;

/// How many tags a card shows before truncating
const CARD_TAG_LIMIT: usize = 3;

/// An image from the catalog, or the category glyph when the asset root is
/// unset or the file is missing. Files that fail to decode render nothing
/// over the placeholder color.
pub fn frame<'a>(
    settings: &Settings,
    reference: &str,
    project: &'a Project,
    width: Length,
    height: f32,
) -> Element<'a, Message> {
    let resolved = settings
        .resolve_asset(reference)
        .filter(|path| path.is_file());

    let content: Element<'a, Message> = match resolved {
        Some(path) => image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(project.category.icon().to_string()).size(height / 4.0).into(),
    };

    container(content)
        .width(width)
        .height(Length::Fixed(height))
        .center_x(width)
        .center_y(Length::Fixed(height))
        .style(style::placeholder)
        .into()
}

fn category_badge(project: &Project) -> Element<'_, Message> {
    super::badge(
        format!("{} {}", project.category.icon(), project.category.label()),
        false,
    )
}

/// Grid card: cover, category, title, year and a two-line description
pub fn card<'a>(settings: &Settings, project: &'a Project) -> Element<'a, Message> {
    let cover = frame(
        settings,
        &project.thumbnail,
        project,
        Length::Fill,
        style::CARD_WIDTH * 0.75,
    );

    let body = column![
        category_badge(project),
        row![
            text(project.title.as_str()).size(18).width(Length::Fill),
            text(project.year.as_str()).size(14).style(style::muted),
        ]
        .spacing(12),
        text(project.description.as_str()).size(14).style(style::muted),
        super::badges(project.tags.iter().take(CARD_TAG_LIMIT), false),
    ]
    .spacing(10)
    .padding(16);

    let content = container(column![cover, body])
        .width(Length::Fixed(style::CARD_WIDTH))
        .style(style::card);

    button(content)
        .on_press(Message::OpenProject(project.id.clone()))
        .style(button::text)
        .padding(0)
        .into()
}

/// Compact row: small cover, title, description, year
pub fn list_item<'a>(settings: &Settings, project: &'a Project) -> Element<'a, Message> {
    let cover = frame(settings, &project.thumbnail, project, Length::Fixed(96.0), 64.0);

    let content = container(
        row![
            cover,
            column![
                text(project.title.as_str()).size(16),
                text(project.description.as_str())
                    .size(13)
                    .style(style::muted),
            ]
            .spacing(4)
            .width(Length::Fill),
            text(project.year.as_str()).size(13).style(style::muted),
            text("→").style(style::muted),
        ]
        .spacing(20)
        .align_y(Alignment::Center)
        .padding(12),
    )
    .width(Length::Fill)
    .style(style::card);

    button(content)
        .on_press(Message::OpenProject(project.id.clone()))
        .style(button::text)
        .padding(0)
        .width(Length::Fill)
        .into()
}

/// Lay cards out in rows that wrap at the window edge
pub fn grid<'a>(cards: Vec<Element<'a, Message>>) -> Element<'a, Message> {
    iced_aw::Wrap::with_elements(cards)
        .spacing(24.0)
        .line_spacing(24.0)
        .into()
}

/// Featured strip on the home page: cards without the open action
pub fn showcase<'a>(settings: &Settings, projects: &[&'a Project]) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = projects
        .iter()
        .copied()
        .map(|project| {
            container(column![
                frame(
                    settings,
                    &project.thumbnail,
                    project,
                    Length::Fill,
                    style::CARD_WIDTH * 0.6,
                ),
                column![
                    category_badge(project),
                    text(project.title.as_str()).size(16),
                    text(project.year.as_str()).size(13).style(style::muted),
                ]
                .spacing(8)
                .padding(14),
            ])
            .width(Length::Fixed(style::CARD_WIDTH * 0.75))
            .style(style::card)
            .into()
        })
        .collect();

    let strip = Row::with_children(cards).spacing(20);
    row![strip, horizontal_space()].into()
}
