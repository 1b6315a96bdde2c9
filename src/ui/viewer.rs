// SPDX-License-Identifier: MPL-2.0
//! Full image pane: the selected image, its description and tag list.

use crate::gallery::ImageInfo;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, text, Column};
use iced::{ContentFit, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    /// Export the displayed metadata as an HTML document.
    Export,
}

/// Everything the pane needs from the application state.
#[derive(Debug)]
pub struct Context<'a> {
    pub image_id: &'a str,
    /// Full-resolution image, once its bytes have arrived.
    pub image: Option<&'a image::Handle>,
    /// Metadata, once the backend has answered.
    pub info: Option<&'a ImageInfo>,
}

pub fn view(ctx: Context<'_>) -> Element<'_, Message> {
    let picture: Element<'_, Message> = match ctx.image {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text("Loading image\u{2026}"))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let description: Element<'_, Message> = match ctx.info {
        Some(info) => text(info.description.as_str()).into(),
        None => text("Loading details\u{2026}").into(),
    };

    let mut column = Column::new()
        .spacing(8)
        .push(text(ctx.image_id).size(20))
        .push(picture)
        .push(description);

    if let Some(info) = ctx.info {
        column = column.push(text(format!("Tags: {}", info.tags_line())));
    }

    let mut export = button(text("Export details\u{2026}"));
    if ctx.info.is_some() {
        export = export.on_press(Message::Export);
    }

    column.push(export).into()
}
