// SPDX-License-Identifier: MPL-2.0
//! Inline error banner.
//!
//! Failures are shown where they happened instead of being swallowed: the
//! banner names the failed operation and keeps the surrounding content
//! untouched until the user dismisses it.

use iced::alignment::Vertical;
use iced::widget::{button, container, text, Row, Space};
use iced::{Border, Element, Length, Theme};

pub fn view<Message: Clone + 'static>(message: &str, on_dismiss: Message) -> Element<'_, Message> {
    let content = Row::new()
        .spacing(12)
        .align_y(Vertical::Center)
        .push(text(message))
        .push(Space::new().width(Length::Fill))
        .push(button(text("Dismiss")).on_press(on_dismiss));

    container(content)
        .width(Length::Fill)
        .padding(10)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.danger.weak.color.into()),
                text_color: Some(palette.danger.weak.text),
                border: Border {
                    color: palette.danger.base.color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..container::Style::default()
            }
        })
        .into()
}
