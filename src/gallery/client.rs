// SPDX-License-Identifier: MPL-2.0
//! Typed client for the gallery REST backend.
//!
//! Endpoints, relative to one configurable base URL:
//! - `rest/tag`: JSON array of tag strings
//! - `rest/tag/{tag}`: JSON array of image identifiers
//! - `rest/image/{id}`: JSON metadata object
//! - `thumbnails/{id}` and `images/{id}`: raw image bytes
//!
//! Tags and image identifiers are inserted as single path segments, so
//! spaces, slashes and other reserved characters are percent-encoded.

use crate::error::{Error, Result};
use crate::gallery::ImageInfo;
use reqwest::Url;

/// Fallback base URL when neither the CLI nor the config provides one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080/gallery/";

#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    base: Url,
}

impl GalleryClient {
    /// Creates a client for the backend at `base_url`.
    ///
    /// Fails when the URL does not parse or cannot serve as a base for
    /// relative endpoint paths.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| Error::Config(format!("invalid server URL {:?}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "server URL {:?} cannot be used as a base",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedGallery/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self { http, base })
    }

    /// Fetches the full set of known tags from `rest/tag`, server order
    /// preserved.
    pub async fn fetch_tags(&self) -> Result<Vec<String>> {
        self.get_json(self.tags_url(), "tag list").await
    }

    /// Fetches the identifiers of the images carrying `tag` from
    /// `rest/tag/{tag}`.
    pub async fn fetch_images_for_tag(&self, tag: &str) -> Result<Vec<String>> {
        self.get_json(self.tag_url(tag), "image list").await
    }

    /// Fetches one image's description and tag list from `rest/image/{id}`.
    pub async fn fetch_info(&self, id: &str) -> Result<ImageInfo> {
        self.get_json(self.info_url(id), "image metadata").await
    }

    /// Fetches the encoded thumbnail bytes from `thumbnails/{id}`.
    pub async fn fetch_thumbnail(&self, id: &str) -> Result<Vec<u8>> {
        self.get_bytes(self.thumbnail_url(id), "thumbnail").await
    }

    /// Fetches the encoded full-resolution image bytes from `images/{id}`.
    pub async fn fetch_image(&self, id: &str) -> Result<Vec<u8>> {
        self.get_bytes(self.image_url(id), "image").await
    }

    pub fn tags_url(&self) -> Url {
        self.endpoint(&["rest", "tag"])
    }

    pub fn tag_url(&self, tag: &str) -> Url {
        self.endpoint(&["rest", "tag", tag])
    }

    pub fn info_url(&self, id: &str) -> Url {
        self.endpoint(&["rest", "image", id])
    }

    pub fn thumbnail_url(&self, id: &str) -> Url {
        self.endpoint(&["thumbnails", id])
    }

    pub fn image_url(&self, id: &str) -> Url {
        self.endpoint(&["images", id])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .expect("base URL was validated at construction");
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "fetching {} failed with status {}",
                what,
                response.status()
            )));
        }
        Ok(response.json().await?)
    }

    async fn get_bytes(&self, url: Url, what: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(Error::Http(format!(
                "fetching {} failed with status {}",
                what,
                response.status()
            )));
        }
        Ok(response.bytes().await?.to_vec())
    }
}
