/// Contact page: message form and direct contact details
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::catalog::Catalog;
use crate::state::contact::{ContactField, ContactForm, SubmissionStatus};
use crate::Message;

fn input<'a>(
    form: &'a ContactForm,
    field: ContactField,
    label: &'a str,
    placeholder: &'a str,
) -> Element<'a, Message> {
    let editable = form.status() == SubmissionStatus::Idle;
    let mut input = text_input(placeholder, form.draft().field(field)).padding(10);
    if editable {
        input = input
            .on_input(move |value| Message::ContactEdited(field, value))
            .on_submit(Message::SubmitContact);
    }

    column![text(label).size(14), input].spacing(6).into()
}

fn form_view(form: &ContactForm) -> Element<'_, Message> {
    let sending = form.status() == SubmissionStatus::Submitting;

    let submit = button(text(if sending { "Sending..." } else { "Send Message ➤" }))
        .on_press_maybe((!sending).then_some(Message::SubmitContact))
        .padding([12, 24]);

    column![
        row![
            input(form, ContactField::FirstName, "First Name", "John"),
            input(form, ContactField::LastName, "Last Name", "Doe"),
        ]
        .spacing(16),
        input(form, ContactField::Email, "Email", "john@example.com"),
        input(
            form,
            ContactField::Organization,
            "Organization (Optional)",
            "Company or Organization",
        ),
        input(form, ContactField::Subject, "Subject", "Project Inquiry"),
        input(
            form,
            ContactField::Message,
            "Message",
            "Tell me about your project or just say hello...",
        ),
    ]
    .push_maybe(
        form.error()
            .map(|err| text(err.to_string()).size(14).style(style::error)),
    )
    .push(submit)
    .spacing(20)
    .into()
}

fn submitted_view() -> Element<'static, Message> {
    container(
        column![
            text("✓").size(40),
            text("Message Sent Successfully").size(22),
            text("Thank you for reaching out! I'll get back to you as soon as possible.")
                .style(style::muted),
            button(text("Send Another Message"))
                .on_press(Message::ResetContact)
                .style(button::secondary)
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

fn details(catalog: &Catalog) -> Element<'_, Message> {
    let person = catalog.person();

    let copy = |label: &'static str, link: String| {
        button(text(label).size(13))
            .on_press(Message::CopyLink(link))
            .style(button::text)
    };

    let direct = container(
        column![
            text("Direct Contact").size(18),
            row![
                super::labelled("Email", &person.email),
                copy("Copy", person.mailto())
            ]
            .align_y(Alignment::Center),
            row![
                super::labelled("Phone", &person.phone),
                copy("Copy", person.tel())
            ]
            .align_y(Alignment::Center),
            row![
                super::labelled("LinkedIn", "Connect with me"),
                copy("Copy", person.linkedin.clone())
            ]
            .align_y(Alignment::Center),
            super::labelled("Location", &person.location),
        ]
        .spacing(14),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::card);

    let resume = container(
        column![
            text("Resume").size(18),
            text(
                "Download my resume for a comprehensive overview of my experience, \
                 skills, and accomplishments."
            )
            .size(14)
            .style(style::muted),
            copy("Copy Resume Link", person.resume_url.clone()),
        ]
        .spacing(12),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::card);

    let availability = container(
        column![
            text("● Currently Available").size(16),
            text(
                "I'm open to new opportunities and freelance projects. \
                 Response time is typically within 24-48 hours."
            )
            .size(14)
            .style(style::muted),
        ]
        .spacing(10),
    )
    .padding(24)
    .width(Length::Fill)
    .style(style::outline_badge);

    column![direct, resume, availability].spacing(24).into()
}

pub fn view<'a>(catalog: &'a Catalog, form: &'a ContactForm) -> Element<'a, Message> {
    let left = match form.status() {
        SubmissionStatus::Submitted => submitted_view(),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => form_view(form),
    };

    column![
        super::page_header(
            "Contact",
            "Let's Connect",
            Some(
                "Have a project in mind or just want to say hello? I'd love to hear \
                 from you. Fill out the form below or reach out directly through any \
                 of the channels listed."
            ),
        ),
        row![
            container(left).width(Length::FillPortion(3)),
            container(details(catalog)).width(Length::FillPortion(2)),
        ]
        .spacing(48),
    ]
    .spacing(32)
    .into()
}
