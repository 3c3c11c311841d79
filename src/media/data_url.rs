// SPDX-License-Identifier: MPL-2.0
//! Base64 data-URL encoding of image files.

use super::PickedFile;
use crate::error::{Error, Result, UploadError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;

/// MIME type used when a file declares none.
const FALLBACK_MIME: &str = "application/octet-stream";

/// A `data:<mime>;base64,<payload>` string.
#[derive(Clone, PartialEq, Eq)]
pub struct DataUrl(String);

impl DataUrl {
    /// Encodes raw bytes under the given MIME type.
    #[must_use]
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type between `data:` and `;base64,`.
    #[must_use]
    pub fn mime_type(&self) -> Option<&str> {
        self.0.strip_prefix("data:")?.split_once(";base64,").map(|(mime, _)| mime)
    }

}

// Payloads are large; keep debug output readable
impl fmt::Debug for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataUrl")
            .field("mime_type", &self.mime_type())
            .field("len", &self.0.len())
            .finish()
    }
}

impl fmt::Display for DataUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file read into memory together with its data-URL encoding.
#[derive(Clone)]
pub struct EncodedImage {
    pub file: PickedFile,
    pub data_url: DataUrl,
    /// Raw file contents, used to render the preview.
    pub bytes: Vec<u8>,
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("file", &self.file)
            .field("data_url", &self.data_url)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Reads a file and encodes it as a base64 data URL.
///
/// Read failures are reported as [`UploadError::ReadFailed`].
pub async fn read_as_data_url(file: PickedFile) -> Result<EncodedImage> {
    let bytes = tokio::fs::read(file.path())
        .await
        .map_err(|err| Error::from(UploadError::ReadFailed(err.to_string())))?;
    let mime = file.mime_type().unwrap_or(FALLBACK_MIME);
    let data_url = DataUrl::encode(mime, &bytes);

    tracing::debug!(
        file = %file.path().display(),
        bytes = bytes.len(),
        "encoded file as data URL"
    );

    Ok(EncodedImage {
        file,
        data_url,
        bytes,
    })
}
