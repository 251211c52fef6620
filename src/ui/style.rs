/// Shared widget styles
///
/// Colors come from the active theme's extended palette so the same
/// views work under both the dark and light themes.
use iced::widget::{button, container, text};
use iced::{Border, Color, Theme};

/// Width of a project card in the grid
pub const CARD_WIDTH: f32 = 340.0;

/// Width of the page content column
pub const CONTENT_WIDTH: f32 = 1100.0;

/// Bordered surface used for cards and panels
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Filled pill for categories and tags
pub fn badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.secondary.base.color.into()),
        text_color: Some(palette.secondary.base.text),
        border: Border {
            radius: 12.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Outlined pill
pub fn outline_badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Stand-in for images that are not available
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.strong.color.into()),
        text_color: Some(palette.background.strong.text),
        ..container::Style::default()
    }
}

/// Dimmed layer behind the detail overlay
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.8,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}

/// Secondary text (captions, dates, descriptions)
pub fn muted(theme: &Theme) -> text::Style {
    let color = theme.palette().text;

    text::Style {
        color: Some(Color { a: 0.65, ..color }),
    }
}

/// Filter chips and toggles: filled when active
pub fn toggle(active: bool) -> fn(&Theme, button::Status) -> button::Style {
    if active {
        button::primary
    } else {
        button::secondary
    }
}

/// Validation messages
pub fn error(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().danger),
    }
}
