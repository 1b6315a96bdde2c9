// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a desktop client for a tag-based REST image gallery,
//! built with the Iced GUI framework.
//!
//! It fetches the set of known tags from a remote gallery backend, shows
//! thumbnails for the selected tag, and displays a full image together with
//! its description and tag list. The backend and the static image server are
//! external collaborators; this crate is the client only.

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod gallery;
pub mod html;
pub mod ui;
