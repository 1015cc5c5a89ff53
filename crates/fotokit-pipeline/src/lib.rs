//! fotokit-pipeline: Batch image conversion and archiving (sans-IO).
//!
//! Turns a selection of images into a single ZIP of WebP files:
//! name derivation -> per-file conversion result -> archive entry ->
//! final outcome, with the user-facing status line computed at every
//! step.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. Decoding and encoding in
//! the browser, downloads, and all UI live in `fotokit-io`.

pub mod archive;
pub mod batch;
pub mod config;
pub mod naming;
pub mod status;
pub mod transcode;
pub mod types;

pub use archive::ArchiveBuilder;
pub use batch::{Batch, BatchOutcome, FileFailure};
pub use config::{ConvertConfig, DuplicatePolicy};
pub use naming::output_name;
pub use status::{Status, Tone};
pub use types::{OutputFormat, PipelineError, SourceFile};

/// Convert `files` with the native encoder and bundle the results.
///
/// This is [`batch::run`] driven by [`transcode::to_webp`]; the browser
/// app uses the canvas encoder instead and drives a [`Batch`] itself.
///
/// Returns `None` if `files` is empty.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidConfig`] if `config` fails
/// validation. Per-file failures are not errors; they are reported in
/// the returned [`BatchOutcome`].
pub fn compress(
    files: &[SourceFile],
    config: &ConvertConfig,
    on_status: impl FnMut(&Status),
) -> Result<Option<BatchOutcome>, PipelineError> {
    config.validate()?;
    Ok(batch::run(
        files,
        config,
        |file| transcode::to_webp(&file.bytes),
        on_status,
    ))
}
