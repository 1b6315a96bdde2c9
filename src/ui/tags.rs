// SPDX-License-Identifier: MPL-2.0
//! Tag bar: one button per known tag plus a refresh action.

use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, scrollable, text, Row};
use iced::{Element, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    /// A tag button was activated.
    Selected(String),
    /// Re-fetch the tag list from the backend.
    Refresh,
}

/// Renders the tag bar as a projection of the loaded tag list and the
/// current selection. Exactly the tag matching `selected` is highlighted.
pub fn view<'a>(
    tags: &'a [String],
    selected: Option<&'a str>,
    loading: bool,
) -> Element<'a, Message> {
    let mut row = Row::new().spacing(8).padding([4, 0]);

    if loading && tags.is_empty() {
        row = row.push(text("Loading tags\u{2026}"));
    }

    for tag in tags {
        let active = selected == Some(tag.as_str());
        let style: fn(&Theme, button::Status) -> button::Style = if active {
            styles::selected_tag
        } else {
            styles::tag
        };

        row = row.push(
            button(text(tag.as_str()))
                .style(style)
                .on_press(Message::Selected(tag.clone())),
        );
    }

    row = row.push(button(text("Refresh")).style(styles::tag).on_press(Message::Refresh));

    scrollable(row)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .into()
}
