// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the gallery workflow.
//!
//! The `App` struct owns the entire UI state as an explicit record: loaded
//! tags, the current selection, the thumbnail result set and the viewer
//! contents. Rendering is a pure projection of that record; nothing is
//! inferred back from widgets.
//!
//! Tag and image selections each carry a generation counter. Every fetch
//! spawned for a selection remembers the generation it was issued under, and
//! a completion arriving for a superseded generation is dropped instead of
//! rendered. This closes the last-response-wins race between overlapping
//! requests without cancellation or sequencing.
//!
//! Two side effects are deliberately optimistic and happen before the
//! matching response arrives: activating a tag immediately highlights it and
//! updates the status line, and activating a thumbnail immediately clears
//! the viewer and starts loading the full image. Both are early feedback,
//! not artifacts of unsequenced code.

use crate::config;
use crate::error::Error;
use crate::export;
use crate::gallery::{GalleryClient, ImageInfo, DEFAULT_SERVER_URL};
use crate::ui;
use crate::ui::thumbnails::Thumbnail;
use iced::widget::image::Handle;
use iced::widget::{container, text, Column, Row};
use iced::{window, Element, Length, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    client: GalleryClient,
    thumbnail_columns: u16,

    tags: Vec<String>,
    tags_loading: bool,
    selected_tag: Option<String>,
    tag_generation: u64,

    thumbnails: Vec<Thumbnail>,
    thumbnails_loading: bool,

    selected_image: Option<String>,
    image_generation: u64,
    info: Option<ImageInfo>,
    full_image: Option<Handle>,

    error: Option<String>,
}

/// Top-level messages consumed by [`App::update`]. View-module messages are
/// forwarded through their own variants; fetch completions arrive tagged
/// with the generation that spawned them.
#[derive(Debug, Clone)]
pub enum Message {
    Tags(ui::tags::Message),
    Thumbnails(ui::thumbnails::Message),
    Viewer(ui::viewer::Message),
    TagsLoaded(Result<Vec<String>, Error>),
    ThumbnailListLoaded {
        generation: u64,
        result: Result<Vec<String>, Error>,
    },
    ThumbnailFetched {
        generation: u64,
        id: String,
        result: Result<Vec<u8>, Error>,
    },
    InfoLoaded {
        generation: u64,
        result: Result<ImageInfo, Error>,
    },
    ImageFetched {
        generation: u64,
        result: Result<Vec<u8>, Error>,
    },
    /// Save dialog outcome, carrying the selection the dialog was opened
    /// for so a selection change while it was open cannot leak in.
    ExportTargetChosen {
        target: Option<PathBuf>,
        id: String,
        info: ImageInfo,
    },
    DismissError,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Base URL of the gallery backend, overriding the configured one.
    pub server: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            client: GalleryClient::new(DEFAULT_SERVER_URL)
                .expect("default server URL is a valid base"),
            thumbnail_columns: config::DEFAULT_THUMBNAIL_COLUMNS,
            tags: Vec::new(),
            tags_loading: false,
            selected_tag: None,
            tag_generation: 0,
            thumbnails: Vec::new(),
            thumbnails_loading: false,
            selected_image: None,
            image_generation: 0,
            info: None,
            full_image: None,
            error: None,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let mut app = App::default();
        app.thumbnail_columns = config
            .thumbnail_columns
            .unwrap_or(config::DEFAULT_THUMBNAIL_COLUMNS);

        let server_url = flags
            .server
            .or(config.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        match GalleryClient::new(&server_url) {
            Ok(client) => app.client = client,
            // Fall back to the default server so the app still comes up.
            Err(error) => app.report("Using the configured server failed", &error),
        }

        app.tags_loading = true;
        let task = app.fetch_tags_task();
        (app, task)
    }

    fn title(&self) -> String {
        match &self.selected_tag {
            Some(tag) => format!("{} - IcedGallery", tag),
            None => String::from("IcedGallery"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tags(ui::tags::Message::Selected(tag)) => self.select_tag(tag),
            Message::Tags(ui::tags::Message::Refresh) => {
                self.tags_loading = true;
                self.fetch_tags_task()
            }
            Message::Thumbnails(ui::thumbnails::Message::Selected(id)) => self.select_image(id),
            Message::Viewer(ui::viewer::Message::Export) => self.choose_export_target(),

            Message::TagsLoaded(result) => {
                self.tags_loading = false;
                match result {
                    // A refresh replaces the list; tags are server-owned and
                    // accumulating stale buttons across reloads helps nobody.
                    Ok(tags) => self.tags = tags,
                    Err(error) => self.report("Loading tags failed", &error),
                }
                Task::none()
            }

            Message::ThumbnailListLoaded { generation, result } => {
                if generation != self.tag_generation {
                    return Task::none();
                }
                self.thumbnails_loading = false;
                match result {
                    Ok(ids) => {
                        self.thumbnails =
                            ids.iter().cloned().map(Thumbnail::pending).collect();
                        self.fetch_previews_task(ids, generation)
                    }
                    Err(error) => {
                        // The previous result set stays visible; the banner
                        // names the mismatch instead of hiding it.
                        self.report("Loading thumbnails failed", &error);
                        Task::none()
                    }
                }
            }

            Message::ThumbnailFetched {
                generation,
                id,
                result,
            } => {
                if generation == self.tag_generation {
                    self.apply_preview(&id, result);
                }
                Task::none()
            }

            Message::InfoLoaded { generation, result } => {
                if generation != self.image_generation {
                    return Task::none();
                }
                match result {
                    Ok(info) => self.info = Some(info),
                    Err(error) => self.report("Loading image details failed", &error),
                }
                Task::none()
            }

            Message::ImageFetched { generation, result } => {
                if generation != self.image_generation {
                    return Task::none();
                }
                match result {
                    Ok(bytes) => self.full_image = Some(Handle::from_bytes(bytes)),
                    Err(error) => self.report("Loading the full image failed", &error),
                }
                Task::none()
            }

            Message::ExportTargetChosen { target, id, info } => {
                if let Some(path) = target {
                    if let Err(error) = export::write_html(&path, &id, &info) {
                        self.report("Exporting details failed", &error);
                    }
                }
                Task::none()
            }

            Message::DismissError => {
                self.error = None;
                Task::none()
            }
        }
    }

    /// Optimistic tag activation: highlight and status update happen now,
    /// the thumbnail set changes only once the response for this generation
    /// arrives.
    fn select_tag(&mut self, tag: String) -> Task<Message> {
        self.selected_tag = Some(tag.clone());
        self.tag_generation += 1;
        self.thumbnails_loading = true;

        let generation = self.tag_generation;
        let client = self.client.clone();
        Task::perform(
            async move { client.fetch_images_for_tag(&tag).await },
            move |result| Message::ThumbnailListLoaded { generation, result },
        )
    }

    /// Optimistic image activation: the viewer clears and the full-image
    /// fetch starts immediately; metadata fills in when its response lands.
    fn select_image(&mut self, id: String) -> Task<Message> {
        self.selected_image = Some(id.clone());
        self.image_generation += 1;
        self.info = None;
        self.full_image = None;

        let generation = self.image_generation;
        let info_client = self.client.clone();
        let image_client = self.client.clone();
        let info_id = id.clone();

        Task::batch([
            Task::perform(
                async move { info_client.fetch_info(&info_id).await },
                move |result| Message::InfoLoaded { generation, result },
            ),
            Task::perform(
                async move { image_client.fetch_image(&id).await },
                move |result| Message::ImageFetched { generation, result },
            ),
        ])
    }

    fn fetch_tags_task(&self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(async move { client.fetch_tags().await }, Message::TagsLoaded)
    }

    /// One independent fetch per preview; each completion carries the
    /// generation of the result set it belongs to.
    fn fetch_previews_task(&self, ids: Vec<String>, generation: u64) -> Task<Message> {
        Task::batch(ids.into_iter().map(|id| {
            let client = self.client.clone();
            Task::perform(
                async move {
                    let result = client.fetch_thumbnail(&id).await;
                    (id, result)
                },
                move |(id, result)| Message::ThumbnailFetched {
                    generation,
                    id,
                    result,
                },
            )
        }))
    }

    fn apply_preview(&mut self, id: &str, result: Result<Vec<u8>, Error>) {
        use crate::ui::thumbnails::Preview;

        if let Some(thumbnail) = self.thumbnails.iter_mut().find(|t| t.id == id) {
            thumbnail.preview = match result {
                Ok(bytes) => Preview::Ready(Handle::from_bytes(bytes)),
                // The entry stays clickable; only its preview is missing.
                Err(_) => Preview::Failed,
            };
        }
    }

    /// Opens the save dialog for the current selection. The selection is
    /// captured here; the dialog may stay open across further clicks.
    fn choose_export_target(&self) -> Task<Message> {
        let (Some(id), Some(info)) = (self.selected_image.clone(), self.info.clone()) else {
            return Task::none();
        };

        let file_name = export::default_file_name(&id);
        Task::perform(
            async move {
                rfd::AsyncFileDialog::new()
                    .set_file_name(&file_name)
                    .add_filter("HTML Document", &["html"])
                    .save_file()
                    .await
                    .map(|handle| handle.path().to_path_buf())
            },
            move |target| Message::ExportTargetChosen {
                target,
                id: id.clone(),
                info: info.clone(),
            },
        )
    }

    fn report(&mut self, context: &str, error: &Error) {
        self.error = Some(format!("{}: {}", context, error));
    }

    fn status_line(&self) -> String {
        match &self.selected_tag {
            Some(tag) => format!("Selected tag: {}", tag),
            None => String::from("Select a tag to browse the gallery"),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(12)
            .padding(16)
            .push(
                ui::tags::view(&self.tags, self.selected_tag.as_deref(), self.tags_loading)
                    .map(Message::Tags),
            )
            .push(text(self.status_line()));

        if let Some(message) = &self.error {
            content = content.push(ui::banner::view(message, Message::DismissError));
        }

        // Sections appear once their selection exists; until then they are
        // simply not part of the projection.
        if self.selected_tag.is_some() {
            let mut body = Row::new().spacing(16).height(Length::Fill);

            let mut thumbnails_pane = Column::new().spacing(8);
            if self.thumbnails_loading {
                thumbnails_pane = thumbnails_pane.push(text("Loading thumbnails\u{2026}"));
            }
            thumbnails_pane = thumbnails_pane.push(
                ui::thumbnails::view(
                    &self.thumbnails,
                    self.thumbnail_columns,
                    self.selected_image.as_deref(),
                )
                .map(Message::Thumbnails),
            );
            body = body.push(
                container(thumbnails_pane)
                    .width(Length::FillPortion(1))
                    .height(Length::Fill),
            );

            if let Some(image_id) = &self.selected_image {
                let pane = ui::viewer::view(ui::viewer::Context {
                    image_id: image_id.as_str(),
                    image: self.full_image.as_ref(),
                    info: self.info.as_ref(),
                })
                .map(Message::Viewer);
                body = body.push(
                    container(pane)
                        .width(Length::FillPortion(1))
                        .height(Length::Fill),
                );
            }

            content = content.push(body);
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
