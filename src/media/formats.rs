// SPDX-License-Identifier: MPL-2.0
//! Ordered list of image extensions the uploader accepts.

use super::PickedFile;
use crate::config::DEFAULT_ACCEPTED_FORMATS;

/// Accepted image extensions, in the order the host supplied them.
///
/// Extensions are expected lowercase and without a leading dot. They are
/// stored exactly as given: matching a file against the list is an exact,
/// case-sensitive comparison of its declared MIME type with `image/<ext>`.
///
/// # Example
///
/// ```
/// use iced_dropzone::media::AcceptedFormats;
///
/// let formats = AcceptedFormats::new(["jpg", "jpeg", "png"]);
/// assert!(formats.accepts_mime("image/png"));
/// assert!(!formats.accepts_mime("image/gif"));
/// assert_eq!(formats.accept_filter(), "jpg,jpeg,png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFormats(Vec<String>);

impl AcceptedFormats {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(extensions.into_iter().map(Into::into).collect())
    }

    /// Parses a comma separated list such as `jpg,jpeg,png`.
    ///
    /// Surrounding whitespace and empty items are dropped.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|ext| !ext.is_empty()),
        )
    }

    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// MIME types derived from the extensions, one `image/<ext>` per entry.
    pub fn mime_types(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(|ext| format!("image/{ext}"))
    }

    /// Whether `mime` exactly equals one of the derived MIME types.
    #[must_use]
    pub fn accepts_mime(&self, mime: &str) -> bool {
        self.mime_types().any(|accepted| accepted == mime)
    }

    /// Whether the file's declared MIME type is accepted.
    ///
    /// A file declaring no type is never accepted.
    #[must_use]
    pub fn accepts(&self, file: &PickedFile) -> bool {
        file.mime_type().is_some_and(|mime| self.accepts_mime(mime))
    }

    /// Extensions joined with commas, as used for a picker accept filter.
    #[must_use]
    pub fn accept_filter(&self) -> String {
        self.0.join(",")
    }
}

impl Default for AcceptedFormats {
    fn default() -> Self {
        Self::new(DEFAULT_ACCEPTED_FORMATS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_follow_extension_order() {
        let formats = AcceptedFormats::new(["jpg", "jpeg", "png"]);
        let mimes: Vec<String> = formats.mime_types().collect();
        assert_eq!(mimes, ["image/jpg", "image/jpeg", "image/png"]);
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let formats = AcceptedFormats::new(["png"]);
        assert!(formats.accepts_mime("image/png"));
        assert!(!formats.accepts_mime("image/PNG"));
        assert!(!formats.accepts_mime("IMAGE/png"));
        assert!(!formats.accepts_mime("image/png "));
        assert!(!formats.accepts_mime("png"));
        assert!(!formats.accepts_mime(""));
    }

    #[test]
    fn jpg_extension_does_not_cover_image_jpeg() {
        let formats = AcceptedFormats::new(["jpg"]);
        assert!(!formats.accepts(&PickedFile::from_path("photo.jpg")));

        let formats = AcceptedFormats::new(["jpg", "jpeg"]);
        assert!(formats.accepts(&PickedFile::from_path("photo.jpg")));
    }

    #[test]
    fn file_without_declared_type_is_rejected() {
        let formats = AcceptedFormats::default();
        assert!(!formats.accepts(&PickedFile::from_path("archive.zip")));
    }

    #[test]
    fn parse_list_trims_and_skips_empty_items() {
        let formats = AcceptedFormats::parse_list(" png, ,webp,");
        assert_eq!(formats.extensions(), ["png", "webp"]);
    }

    #[test]
    fn empty_list_accepts_nothing() {
        let formats = AcceptedFormats::new(Vec::<String>::new());
        assert!(formats.is_empty());
        assert!(!formats.accepts_mime("image/png"));
        assert_eq!(formats.accept_filter(), "");
    }

    #[test]
    fn default_matches_configured_defaults() {
        assert_eq!(AcceptedFormats::default().accept_filter(), "jpg,jpeg,png");
    }
}
