//! Shared types for the fotokit conversion pipeline.

use serde::{Deserialize, Serialize};

/// One user-selected image: its original file name and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name as reported by the file picker (e.g. `Photo.JPG`).
    pub name: String,
    /// Undecoded file contents.
    pub bytes: Vec<u8>,
}

impl SourceFile {
    /// Create a new source file.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Raster format that converted images are re-encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy WebP when the browser supports it, lossless otherwise.
    #[default]
    WebP,
}

impl OutputFormat {
    /// MIME type passed to the encoder.
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::WebP => "image/webp",
        }
    }

    /// File extension (without the leading dot) for archive entries.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::WebP => "webp",
        }
    }
}

/// Errors that can occur in the conversion pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Failed to re-encode the decoded image.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// Conversion configuration is invalid.
    #[error("invalid conversion configuration: {0}")]
    InvalidConfig(String),

    /// The archive was finalized without any entries.
    #[error("archive has no entries")]
    EmptyArchive,

    /// The ZIP writer rejected an entry or failed to finish.
    #[error("failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Writing entry bytes into the archive buffer failed.
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}
