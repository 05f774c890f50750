/// Main workflow panels: upload surface, preview, results, loading overlay

use iced::widget::{button, column, container, image as picture, row, scrollable, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

use crate::Message;

/// Height of the drop zone on the upload surface
const DROP_ZONE_HEIGHT: f32 = 280.0;

/// Height reserved for the preview image
const PREVIEW_HEIGHT: f32 = 360.0;

/// The upload surface: a drop zone with a browse button
///
/// `drop_hover` toggles the highlight affordance while a drag hovers the
/// window.
pub fn upload_area(drop_hover: bool) -> Element<'static, Message> {
    let content = column![
        text("Drop an image here").size(24),
        text("PNG, JPEG, GIF or WebP, up to 10 MiB").size(14),
        button("Browse Files")
            .on_press(Message::BrowseRequested)
            .padding(10),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(DROP_ZONE_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(move |theme: &Theme| drop_zone_style(theme, drop_hover))
        .into()
}

/// The preview panel: decoded image plus the analyze/reset actions
pub fn preview_panel<'a>(
    preview: &picture::Handle,
    filename: &'a str,
    analyzing: bool,
) -> Element<'a, Message> {
    let actions = row![
        button("Analyze Image")
            .on_press_maybe((!analyzing).then_some(Message::AnalyzeRequested))
            .padding(10),
        button("Choose Another")
            .on_press_maybe((!analyzing).then_some(Message::ResetRequested))
            .padding(10),
    ]
    .spacing(20);

    column![
        text(filename).size(16),
        picture(preview.clone()).height(Length::Fixed(PREVIEW_HEIGHT)),
        actions,
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .into()
}

/// The results panel: analysis text rendered verbatim, with a copy action
///
/// The text widget displays the service's answer as plain text; nothing is
/// interpreted as markup.
pub fn results_panel(result: &str) -> Element<'_, Message> {
    let header = row![
        text("Analysis").size(20),
        Space::with_width(Length::Fill),
        button("Copy").on_press(Message::CopyRequested).padding(8),
    ]
    .align_y(Alignment::Center);

    let body = scrollable(text(result).size(16)).height(Length::Fixed(220.0));

    container(column![header, body].spacing(12))
        .width(Length::Fill)
        .padding(16)
        .style(results_style)
        .into()
}

/// Blocking overlay shown while a request is in flight
pub fn loading_overlay() -> Element<'static, Message> {
    let content = column![
        text("Analyzing image...").size(24),
        text("This can take a few seconds").size(14),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: 0.8,
                ..Color::BLACK
            })),
            text_color: Some(Color::WHITE),
            ..container::Style::default()
        })
        .into()
}

/// Dashed-border look for the drop zone, highlighted while hovered
fn drop_zone_style(theme: &Theme, hovered: bool) -> container::Style {
    let palette = theme.extended_palette();

    let (background, border_color) = if hovered {
        (palette.primary.weak.color, palette.primary.strong.color)
    } else {
        (palette.background.weak.color, palette.background.strong.color)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 2.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}

/// Card look for the results panel
fn results_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..container::Style::default()
    }
}
