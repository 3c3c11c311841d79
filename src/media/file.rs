// SPDX-License-Identifier: MPL-2.0
//! Handle to a file chosen by the user, by drop or through the file dialog.

use super::mime;
use std::path::{Path, PathBuf};

/// A file offered to the uploader.
///
/// Carries the path plus the MIME type the file declares. The declared type
/// is computed once, when the handle is created, from the file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    path: PathBuf,
    mime_type: Option<String>,
}

impl PickedFile {
    /// Creates a handle whose declared MIME type is derived from the extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mime_type = mime::declared_type(&path).map(str::to_owned);
        Self { path, mime_type }
    }

    /// Creates a handle with an explicitly declared MIME type.
    pub fn with_mime_type(path: impl Into<PathBuf>, mime_type: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mime_type: Some(mime_type.into()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name without directories, lossily converted for display.
    #[must_use]
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Declared MIME type, `None` when the file declares none.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }
}

impl From<rfd::FileHandle> for PickedFile {
    fn from(handle: rfd::FileHandle) -> Self {
        Self::from_path(handle.path().to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_derives_mime_type() {
        let file = PickedFile::from_path("/tmp/cat.png");
        assert_eq!(file.mime_type(), Some("image/png"));
        assert_eq!(file.name(), "cat.png");
    }

    #[test]
    fn explicit_mime_type_is_kept_verbatim() {
        let file = PickedFile::with_mime_type("/tmp/cat.bin", "IMAGE/PNG");
        assert_eq!(file.mime_type(), Some("IMAGE/PNG"));
    }

    #[test]
    fn unknown_extension_has_no_mime_type() {
        let file = PickedFile::from_path("/tmp/report.pdf");
        assert_eq!(file.mime_type(), None);
    }
}
