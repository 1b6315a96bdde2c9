// SPDX-License-Identifier: MPL-2.0
//! HTML export of image metadata.
//!
//! Produces a small standalone document for the selected image. Descriptions
//! and tags come from the backend and may contain markup-significant
//! characters, so every interpolated value passes through [`crate::html::escape`].

use crate::error::Result;
use crate::gallery::ImageInfo;
use crate::html;
use std::fs;
use std::path::Path;

/// Renders the export document for one image.
pub fn render_html(image_id: &str, info: &ImageInfo) -> String {
    let id = html::escape(image_id);
    let description = html::escape(&info.description);
    let tags = html::escape(&info.tags_line());

    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{id}</title></head>\n\
         <body>\n\
         <h1>{id}</h1>\n\
         <p>{description}</p>\n\
         <p>Tags: {tags}</p>\n\
         </body>\n\
         </html>\n"
    )
}

/// Suggested file name for the save dialog, e.g. `a.jpg` -> `a-details.html`.
pub fn default_file_name(image_id: &str) -> String {
    let stem = Path::new(image_id)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    format!("{stem}-details.html")
}

/// Writes the export document to `path`.
pub fn write_html(path: &Path, image_id: &str, info: &ImageInfo) -> Result<()> {
    fs::write(path, render_html(image_id, info))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> ImageInfo {
        ImageInfo {
            description: "Fish & <chips>".to_string(),
            tags: vec!["food".to_string(), "b&w".to_string()],
        }
    }

    #[test]
    fn render_escapes_description_and_tags() {
        let document = render_html("a.jpg", &sample_info());
        assert!(document.contains("<p>Fish &amp; &lt;chips&gt;</p>"));
        assert!(document.contains("<p>Tags: food, b&amp;w</p>"));
        assert!(!document.contains("<chips>"));
    }

    #[test]
    fn render_escapes_image_id_in_title() {
        let document = render_html("a<b>.jpg", &sample_info());
        assert!(document.contains("<title>a&lt;b&gt;.jpg</title>"));
    }

    #[test]
    fn default_file_name_strips_extension() {
        assert_eq!(default_file_name("a.jpg"), "a-details.html");
        assert_eq!(default_file_name("archive.tar.gz"), "archive.tar-details.html");
    }

    #[test]
    fn default_file_name_falls_back_for_odd_ids() {
        assert_eq!(default_file_name(""), "image-details.html");
    }

    #[test]
    fn write_html_creates_the_document() {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("export.html");

        write_html(&path, "a.jpg", &sample_info()).expect("export should succeed");

        let written = fs::read_to_string(&path).expect("export file should exist");
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("&amp;"));
    }
}
