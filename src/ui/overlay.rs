/// Project detail overlay
///
/// The overlay sits on top of the page in a stack. The backdrop swallows
/// every mouse event, so the page behind it cannot be scrolled or clicked
/// while it is open; clicking the backdrop closes it.
use iced::widget::{
    button, center, column, container, horizontal_rule, horizontal_space, mouse_area, opaque, row,
    scrollable, stack, text, Row,
};
use iced::{Alignment, Element, Length};

use super::{project_card, style};
use crate::config::Settings;
use crate::state::data::Project;
use crate::Message;

/// Put `content` above `base`, dismissed by clicking outside it
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(style::backdrop))
                .on_press(Message::CloseOverlay)
        )
    ]
    .into()
}

/// Gallery dots; only drawn when there is more than one image
fn gallery_dots(count: usize, current: usize) -> Option<Element<'static, Message>> {
    if count < 2 {
        return None;
    }

    let dots: Vec<Element<'static, Message>> = (0..count)
        .map(|index| {
            button(text(if index == current { "●" } else { "○" }).size(14))
                .on_press(Message::ShowImage(index))
                .style(button::text)
                .padding([2, 4])
                .into()
        })
        .collect();

    Some(
        row![horizontal_space(), Row::with_children(dots), horizontal_space()]
            .align_y(Alignment::Center)
            .into(),
    )
}

/// "Client: ..." line; omitted for personal work
fn client_line(project: &Project) -> Option<Element<'static, Message>> {
    project
        .client
        .as_deref()
        .map(|client| text(format!("Client: {client}")).style(style::muted).into())
}

/// Video control; only projects with a video link get one
fn video_action(project: &Project) -> Option<Element<'static, Message>> {
    project.video_url.as_ref().map(|url| {
        button(text("Copy Video Link"))
            .on_press(Message::CopyLink(url.clone()))
            .style(button::secondary)
            .padding([8, 16])
            .into()
    })
}

/// Detail card for the selected project
pub fn view<'a>(
    settings: &Settings,
    project: &'a Project,
    image_index: usize,
) -> Element<'a, Message> {
    let gallery = project.gallery();
    let current = gallery.get(image_index).copied().unwrap_or(project.thumbnail.as_str());

    let close = button(text("✕").size(18))
        .on_press(Message::CloseOverlay)
        .style(button::secondary)
        .padding([4, 10]);

    let header = row![
        column![
            row![
                super::badge(
                    format!("{} {}", project.category.icon(), project.category.label()),
                    false,
                ),
                text(project.year.as_str()).size(14).style(style::muted),
            ]
            .spacing(10)
            .align_y(Alignment::Center),
            text(project.title.as_str()).size(30),
        ]
        .push_maybe(client_line(project))
        .spacing(8)
        .width(Length::Fill),
        close,
    ];

    let actions = row![]
        .push_maybe(video_action(project))
        .push(
            button(text("Close"))
                .on_press(Message::CloseOverlay)
                .style(button::text)
                .padding([8, 16]),
        )
        .spacing(12);

    let details = column![
        header,
        text(project.description.as_str()),
        super::badges(project.tags.iter(), true),
        horizontal_rule(1),
        actions,
    ]
    .spacing(20)
    .padding(28);

    let body = column![project_card::frame(
        settings,
        current,
        project,
        Length::Fill,
        420.0,
    )]
    .push_maybe(gallery_dots(gallery.len(), image_index))
    .push(details)
    .spacing(8);

    container(scrollable(body))
        .max_width(900)
        .max_height(760)
        .style(style::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;
    use crate::state::data::ProjectId;

    #[test]
    fn test_single_image_has_no_dots() {
        assert!(gallery_dots(0, 0).is_none());
        assert!(gallery_dots(1, 0).is_none());
        assert!(gallery_dots(3, 1).is_some());
    }

    #[test]
    fn test_optional_controls_follow_project_fields() {
        let catalog = Catalog::embedded().unwrap();
        let photo = catalog.project(&ProjectId::from("1")).unwrap();
        let video = catalog.project(&ProjectId::from("2")).unwrap();

        assert!(client_line(photo).is_none());
        assert!(video_action(photo).is_none());

        assert!(client_line(video).is_some());
        assert!(video_action(video).is_some());
    }
}
