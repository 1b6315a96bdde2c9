// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types and the REST client.
//!
//! The backend owns the data: tags and image identifiers are plain strings,
//! fetched in batches and never mutated client-side. [`ImageInfo`] is the
//! per-image metadata record, fetched fresh on every image view.

pub mod client;

pub use client::{GalleryClient, DEFAULT_SERVER_URL};

use serde::Deserialize;

/// Metadata for one gallery image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImageInfo {
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ImageInfo {
    /// Tag list rendered for display, comma-and-space joined.
    pub fn tags_line(&self) -> String {
        self.tags.join(", ")
    }
}
