// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Manifest(ManifestError),
}

/// Specific error types for comparison-manifest loading.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ManifestError {
    /// The manifest file could not be read.
    Unreadable(String),

    /// The manifest file is not valid TOML or is missing required fields.
    Malformed(String),

    /// A pair references an image file that does not exist on disk.
    MissingImage(PathBuf),

    /// The manifest parsed but contains no pairs.
    Empty,
}

impl ManifestError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ManifestError::Unreadable(_) => "error-manifest-unreadable",
            ManifestError::Malformed(_) => "error-manifest-malformed",
            ManifestError::MissingImage(_) => "error-manifest-missing-image",
            ManifestError::Empty => "error-manifest-empty",
        }
    }
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Unreadable(msg) => write!(f, "Manifest unreadable: {}", msg),
            ManifestError::Malformed(msg) => write!(f, "Manifest malformed: {}", msg),
            ManifestError::MissingImage(path) => {
                write!(f, "Referenced image not found: {}", path.display())
            }
            ManifestError::Empty => write!(f, "Manifest contains no image pairs"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Manifest(e) => write!(f, "Manifest Error: {}", e),
        }
    }
}

impl From<ManifestError> for Error {
    fn from(err: ManifestError) -> Self {
        Error::Manifest(err)
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
