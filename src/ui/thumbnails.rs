// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for the selected tag.
//!
//! Each entry is clickable as soon as the image list arrives; its preview
//! bytes stream in independently and replace the placeholder when ready.
//! A failed preview stays selectable, since the full image may still load.

use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, container, image, scrollable, text, Column, Row};
use iced::{Element, Length};

/// Edge length of one thumbnail cell in logical pixels.
pub const CELL_SIZE: f32 = 120.0;

#[derive(Debug, Clone)]
pub enum Message {
    /// A thumbnail was activated.
    Selected(String),
}

/// One entry of the current thumbnail result set.
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub id: String,
    pub preview: Preview,
}

/// Load state of a thumbnail's preview bytes.
#[derive(Debug, Clone)]
pub enum Preview {
    Pending,
    Ready(image::Handle),
    Failed,
}

impl Thumbnail {
    pub fn pending(id: String) -> Self {
        Self {
            id,
            preview: Preview::Pending,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.preview, Preview::Ready(_))
    }
}

/// Renders the grid, `columns` cells per row.
pub fn view<'a>(
    thumbnails: &'a [Thumbnail],
    columns: u16,
    selected: Option<&'a str>,
) -> Element<'a, Message> {
    let columns = columns.max(1) as usize;
    let mut grid = Column::new().spacing(8).padding([4, 0]);

    for chunk in thumbnails.chunks(columns) {
        let mut row = Row::new().spacing(8);
        for thumbnail in chunk {
            row = row.push(cell(thumbnail, selected == Some(thumbnail.id.as_str())));
        }
        grid = grid.push(row);
    }

    scrollable(grid)
        .direction(Direction::Vertical(Scrollbar::new()))
        .height(Length::Fill)
        .into()
}

fn cell(thumbnail: &Thumbnail, selected: bool) -> Element<'_, Message> {
    let content: Element<'_, Message> = match &thumbnail.preview {
        Preview::Ready(handle) => image(handle.clone())
            .width(Length::Fixed(CELL_SIZE))
            .height(Length::Fixed(CELL_SIZE))
            .into(),
        Preview::Pending => placeholder("\u{2026}"),
        Preview::Failed => placeholder("no preview"),
    };

    button(content)
        .style(styles::thumbnail(selected))
        .on_press(Message::Selected(thumbnail.id.clone()))
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label))
        .width(Length::Fixed(CELL_SIZE))
        .height(Length::Fixed(CELL_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_thumbnail_is_not_ready() {
        let thumbnail = Thumbnail::pending("a.jpg".to_string());
        assert_eq!(thumbnail.id, "a.jpg");
        assert!(!thumbnail.is_ready());
    }

    #[test]
    fn ready_thumbnail_reports_ready() {
        let thumbnail = Thumbnail {
            id: "a.jpg".to_string(),
            preview: Preview::Ready(image::Handle::from_rgba(1, 1, vec![255; 4])),
        };
        assert!(thumbnail.is_ready());
    }
}
