/// Portfolio page: view toggle, category filter, grouped or flat project list
use iced::widget::{button, column, container, horizontal_rule, row, text, Column, Row};
use iced::{Alignment, Element, Length};

use super::{project_card, style};
use crate::config::Settings;
use crate::state::catalog::Catalog;
use crate::state::data::{Project, ProjectCategory};
use crate::state::filter::{group_by_category, Filter};
use crate::state::page::{PortfolioPage, Route, ViewMode};
use crate::Message;

pub fn view<'a>(
    catalog: &'a Catalog,
    settings: &Settings,
    page: &PortfolioPage,
) -> Element<'a, Message> {
    let header = row![
        super::page_header(
            "Portfolio",
            "Selected Work",
            Some(
                "A collection of projects spanning photography, video production, \
                 graphic design, and integrated marketing campaigns."
            ),
        ),
        iced::widget::horizontal_space(),
        view_toggle(page.view_mode),
    ]
    .align_y(Alignment::End);

    let projects = page.filter.apply(catalog.projects());

    let body = if page.show_sections() {
        sections(settings, &projects, page.view_mode)
    } else {
        listing(settings, &projects, page.view_mode)
    };

    column![
        header,
        filter_bar(page.filter),
        body,
        horizontal_rule(1),
        super::call_to_action(
            "Have a project in mind?",
            "I'm always excited to collaborate on new creative ventures. \
             Let's discuss how we can bring your vision to life.",
            "Start a Conversation →",
            Route::Contact,
        ),
    ]
    .spacing(32)
    .into()
}

fn view_toggle(current: ViewMode) -> Element<'static, Message> {
    let toggle = |mode: ViewMode, label: &'static str| {
        button(text(label).size(14))
            .on_press(Message::SetViewMode(mode))
            .style(style::toggle(current == mode))
            .padding([6, 12])
    };

    container(row![toggle(ViewMode::Grid, "▦ Grid"), toggle(ViewMode::List, "☰ List")].spacing(4))
        .padding(4)
        .style(style::outline_badge)
        .into()
}

fn filter_bar(active: Filter<ProjectCategory>) -> Element<'static, Message> {
    let chips: Vec<Element<'static, Message>> = Filter::<ProjectCategory>::project_choices()
        .into_iter()
        .map(|choice| {
            button(text(choice.label()).size(14))
                .on_press(Message::SetProjectFilter(choice))
                .style(style::toggle(choice == active))
                .padding([8, 16])
                .into()
        })
        .collect();

    Row::with_children(chips).spacing(10).into()
}

/// Projects in the current layout, without section headings
fn listing<'a>(
    settings: &Settings,
    projects: &[&'a Project],
    mode: ViewMode,
) -> Element<'a, Message> {
    if projects.is_empty() {
        return container(text("No projects in this category yet.").style(style::muted))
            .padding(40)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .into();
    }

    match mode {
        ViewMode::Grid => project_card::grid(
            projects
                .iter()
                .copied()
                .map(|project| project_card::card(settings, project))
                .collect(),
        ),
        ViewMode::List => Column::with_children(
            projects
                .iter()
                .copied()
                .map(|project| project_card::list_item(settings, project)),
        )
        .spacing(12)
        .into(),
    }
}

/// One titled section per category that has projects
fn sections<'a>(
    settings: &Settings,
    projects: &[&'a Project],
    mode: ViewMode,
) -> Element<'a, Message> {
    let sections: Vec<Element<'a, Message>> = group_by_category(projects)
        .into_iter()
        .map(|(category, members)| {
            let (title, subtitle) = category.section();
            column![
                column![
                    text(title).size(22),
                    text(subtitle).size(14).style(style::muted),
                ]
                .spacing(4),
                horizontal_rule(1),
                listing(settings, &members, mode),
            ]
            .spacing(16)
            .into()
        })
        .collect();

    if sections.is_empty() {
        return listing(settings, &[], mode);
    }

    Column::with_children(sections).spacing(48).into()
}
