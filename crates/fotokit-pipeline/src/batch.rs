//! Sequential batch conversion as an explicit fold.
//!
//! A [`Batch`] accumulates one result per input file, in input order,
//! and produces the status line to show after each step. The actual
//! decode/encode work is supplied by the caller (the browser canvas in
//! the app, [`crate::transcode::to_webp`] natively), so this module
//! stays free of I/O and async runtimes.
//!
//! The archive is finalized only by [`Batch::finish`], after every
//! file has been attempted. A failed file never aborts the batch.

use std::fmt::Display;

use crate::archive::ArchiveBuilder;
use crate::config::ConvertConfig;
use crate::naming::{NameRegistry, output_name};
use crate::status::Status;
use crate::types::{PipelineError, SourceFile};

/// An input file that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Original input file name.
    pub name: String,
    /// Human-readable cause, for logs.
    pub reason: String,
}

/// Validate a selection before starting a batch.
///
/// # Errors
///
/// Returns the "select at least one photo" status if `selected` is
/// zero; no batch should be started in that case.
pub fn start(selected: usize) -> Result<Status, Status> {
    if selected == 0 {
        Err(Status::no_selection())
    } else {
        Ok(Status::starting())
    }
}

/// In-progress state of one batch run.
#[derive(Debug, Clone)]
pub struct Batch {
    total: usize,
    config: ConvertConfig,
    names: NameRegistry,
    archive: ArchiveBuilder,
    converted: usize,
    failures: Vec<FileFailure>,
    status: Status,
}

impl Batch {
    /// Start a batch over `total` input files.
    #[must_use]
    pub fn new(total: usize, config: ConvertConfig) -> Self {
        Self {
            total,
            names: NameRegistry::new(config.duplicates),
            config,
            archive: ArchiveBuilder::new(),
            converted: 0,
            failures: Vec::new(),
            status: Status::starting(),
        }
    }

    /// Record the outcome of converting `input_name`.
    pub fn record<E: Display>(&mut self, input_name: &str, result: Result<Vec<u8>, E>) -> &Status {
        match result {
            Ok(bytes) => self.record_success(input_name, bytes),
            Err(e) => self.record_failure(input_name, e.to_string()),
        }
    }

    /// Add the encoded bytes for `input_name` to the archive.
    pub fn record_success(&mut self, input_name: &str, bytes: Vec<u8>) -> &Status {
        let entry = self
            .names
            .claim(output_name(input_name, self.config.format));
        self.archive.insert(entry, bytes);
        self.converted += 1;
        self.status = Status::progress(self.status.tone, self.converted, self.total);
        &self.status
    }

    /// Note that `input_name` could not be converted.
    pub fn record_failure(&mut self, input_name: &str, reason: impl Into<String>) -> &Status {
        self.failures.push(FileFailure {
            name: input_name.to_owned(),
            reason: reason.into(),
        });
        self.status = Status::file_failed(input_name);
        &self.status
    }

    /// Number of input files in the batch.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of successful conversions so far.
    #[must_use]
    pub const fn converted(&self) -> usize {
        self.converted
    }

    /// Number of files attempted so far (successes and failures).
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.converted + self.failures.len()
    }

    /// Failures recorded so far, in input order.
    #[must_use]
    pub fn failures(&self) -> &[FileFailure] {
        &self.failures
    }

    /// The status line after the most recent step.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Archive entry names written so far.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.archive.names()
    }

    /// Finalize the batch once every file has been attempted.
    #[must_use]
    pub fn finish(self) -> BatchOutcome {
        debug_assert_eq!(
            self.attempted(),
            self.total,
            "batch finished before every file was attempted"
        );

        if self.converted == 0 {
            return BatchOutcome::NothingConverted {
                failures: self.failures,
            };
        }

        match self.archive.finish() {
            Ok(bytes) => BatchOutcome::Archive {
                bytes,
                file_name: self.config.archive_name,
                converted: self.converted,
                failures: self.failures,
            },
            Err(error) => BatchOutcome::ArchiveFailed {
                error,
                converted: self.converted,
                failures: self.failures,
            },
        }
    }
}

/// Final result of a batch.
#[derive(Debug)]
pub enum BatchOutcome {
    /// At least one file converted; the archive is ready to offer.
    Archive {
        /// Finished ZIP payload.
        bytes: Vec<u8>,
        /// Download name for the payload.
        file_name: String,
        /// Number of entries in the archive.
        converted: usize,
        /// Files left out of the archive.
        failures: Vec<FileFailure>,
    },
    /// Every file failed; there is nothing to offer.
    NothingConverted {
        /// One failure per input file.
        failures: Vec<FileFailure>,
    },
    /// Conversions succeeded but the archive could not be written.
    ArchiveFailed {
        /// Why finalization failed.
        error: PipelineError,
        /// Number of successful conversions that were lost.
        converted: usize,
        /// Files that had already failed.
        failures: Vec<FileFailure>,
    },
}

impl BatchOutcome {
    /// Final status line for this outcome, assuming an
    /// [`Archive`](Self::Archive) is successfully offered for download.
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Archive { converted, .. } => Status::done(*converted),
            Self::NothingConverted { .. } => Status::nothing_converted(),
            Self::ArchiveFailed { .. } => Status::archive_failed(),
        }
    }

    /// Number of successful conversions.
    #[must_use]
    pub const fn converted(&self) -> usize {
        match self {
            Self::Archive { converted, .. } | Self::ArchiveFailed { converted, .. } => *converted,
            Self::NothingConverted { .. } => 0,
        }
    }

    /// Files that failed to convert.
    #[must_use]
    pub fn failures(&self) -> &[FileFailure] {
        match self {
            Self::Archive { failures, .. }
            | Self::NothingConverted { failures }
            | Self::ArchiveFailed { failures, .. } => failures,
        }
    }
}

/// Run a whole batch synchronously.
///
/// Calls `convert` once per file, in order, and `on_status` with every
/// intermediate status line (the starting line, then one per file).
/// The final status depends on what the caller does with the outcome,
/// so it is not emitted here; use [`BatchOutcome::status`].
///
/// Returns `None` after emitting the "select at least one photo" status
/// if `files` is empty.
pub fn run<F, E>(
    files: &[SourceFile],
    config: &ConvertConfig,
    mut convert: F,
    mut on_status: impl FnMut(&Status),
) -> Option<BatchOutcome>
where
    F: FnMut(&SourceFile) -> Result<Vec<u8>, E>,
    E: Display,
{
    match start(files.len()) {
        Ok(status) => on_status(&status),
        Err(status) => {
            on_status(&status);
            return None;
        }
    }

    let batch = files
        .iter()
        .fold(Batch::new(files.len(), config.clone()), |mut batch, file| {
            on_status(batch.record(&file.name, convert(file)));
            batch
        });
    Some(batch.finish())
}
