// SPDX-License-Identifier: MPL-2.0
//! Declared MIME type of a file, derived from its name.
//!
//! Mirrors what a browser reports as `File.type`: the content is never
//! inspected, only the extension.

use std::path::Path;

/// Returns the MIME type a file declares through its extension.
///
/// Extension matching is case-insensitive. Unknown extensions (and files
/// without one) declare no type at all.
#[must_use]
pub fn declared_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("svg") {
        return Some("image/svg+xml");
    }
    image_rs::ImageFormat::from_extension(ext).map(|format| format.to_mime_type())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_image_extensions_map_to_image_types() {
        assert_eq!(declared_type(Path::new("a.png")), Some("image/png"));
        assert_eq!(declared_type(Path::new("a.jpg")), Some("image/jpeg"));
        assert_eq!(declared_type(Path::new("a.jpeg")), Some("image/jpeg"));
        assert_eq!(declared_type(Path::new("a.gif")), Some("image/gif"));
        assert_eq!(declared_type(Path::new("a.webp")), Some("image/webp"));
        assert_eq!(declared_type(Path::new("a.svg")), Some("image/svg+xml"));
    }

    #[test]
    fn extension_case_does_not_matter() {
        assert_eq!(declared_type(Path::new("PHOTO.PNG")), Some("image/png"));
        assert_eq!(declared_type(Path::new("photo.JpG")), Some("image/jpeg"));
    }

    #[test]
    fn unknown_or_missing_extension_declares_nothing() {
        assert_eq!(declared_type(Path::new("notes.txt")), None);
        assert_eq!(declared_type(Path::new("README")), None);
    }
}
