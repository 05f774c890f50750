/// Notification banner rendering
///
/// Renders the notification stack as a column of severity-colored banners.
/// The severity tag picks the palette pair; it carries no behavior.

use iced::widget::{container, text, Column};
use iced::{Background, Border, Element, Length, Theme};

use crate::state::notification::{Notification, Notifications, Severity};
use crate::Message;

/// Render every visible notification, oldest first
pub fn banners(notifications: &Notifications) -> Element<'_, Message> {
    notifications
        .iter()
        .fold(Column::new().spacing(8), |stack, notification| {
            stack.push(banner(notification))
        })
        .width(Length::Fill)
        .into()
}

/// One severity-styled banner
fn banner(notification: &Notification) -> Element<'_, Message> {
    let severity = notification.severity;

    container(text(&notification.message).size(14))
        .width(Length::Fill)
        .padding(10)
        .style(move |theme: &Theme| banner_style(theme, severity))
        .into()
}

/// Map a severity to the theme's palette pair
fn banner_style(theme: &Theme, severity: Severity) -> container::Style {
    let palette = theme.extended_palette();

    let pair = match severity {
        Severity::Info => palette.primary.weak,
        Severity::Success => palette.success.weak,
        Severity::Error => palette.danger.weak,
    };

    container::Style {
        background: Some(Background::Color(pair.color)),
        text_color: Some(pair.text),
        border: Border {
            radius: 6.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}
