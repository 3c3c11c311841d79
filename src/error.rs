// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    Upload(UploadError),
}

/// Reasons an uploaded file is rejected by the uploader widget.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Declared MIME type is not one of the accepted `image/<ext>` types
    UnsupportedFormat,

    /// The file passed validation but its contents could not be read
    ReadFailed(String),
}

impl UploadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::UnsupportedFormat => "uploader-error-unsupported-format",
            UploadError::ReadFailed(_) => "uploader-error-read-failed",
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::UnsupportedFormat => write!(f, "File type is not valid"),
            UploadError::ReadFailed(msg) => write!(f, "File could not be read: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Upload(e) => write!(f, "Upload Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Error::Upload(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
