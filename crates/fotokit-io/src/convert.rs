//! Browser-side driver for the batch compressor.
//!
//! Reads, converts, and archives the selected files one after another
//! on the UI thread, reporting every step through a status callback,
//! then offers the archive for download.

use dioxus::html::FileData;
use fotokit_pipeline::batch::{self, Batch, BatchOutcome};
use fotokit_pipeline::{ConvertConfig, Status};

use crate::{canvas, download};

/// Compress `files` to WebP, bundle them into a ZIP, and download it.
///
/// Files are processed strictly in order; each conversion finishes
/// before the next file is read, so only one decoded image is alive at
/// a time.  A failed file is reported and skipped.  The archive is
/// offered only after every file has been attempted.
///
/// `on_status` receives every status line, ending with the final one.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn compress_and_download(
    files: Vec<FileData>,
    config: ConvertConfig,
    mut on_status: impl FnMut(Status),
) {
    match batch::start(files.len()) {
        Ok(status) => on_status(status),
        Err(status) => {
            on_status(status);
            return;
        }
    }

    // Yield to the browser event loop so it can paint the starting
    // status before the first decode.
    gloo_timers::future::TimeoutFuture::new(0).await;

    let started = web_time::Instant::now();
    let mut batch = Batch::new(files.len(), config.clone());

    for file in &files {
        let name = file.name();
        let result = match file.read_bytes().await {
            Ok(bytes) => canvas::encode(&bytes, &config)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(format!("failed to read file: {e}")),
        };
        if let Err(ref reason) = result {
            web_sys::console::error_1(&format!("failed to compress {name}: {reason}").into());
        }
        on_status(batch.record(&name, result).clone());
    }

    let total = batch.total();
    let outcome = batch.finish();
    web_sys::console::log_1(
        &format!(
            "batch finished: {}/{total} converted in {} ms",
            outcome.converted(),
            started.elapsed().as_millis()
        )
        .into(),
    );
    on_status(offer(&outcome));
}

/// Hand a finished archive to the browser and pick the final status.
fn offer(outcome: &BatchOutcome) -> Status {
    match outcome {
        BatchOutcome::Archive {
            bytes, file_name, ..
        } => match download::trigger_download(bytes, file_name, download::ZIP_MIME) {
            Ok(()) => outcome.status(),
            Err(e) => {
                web_sys::console::error_1(&format!("failed to offer {file_name}: {e}").into());
                Status::archive_failed()
            }
        },
        BatchOutcome::ArchiveFailed { error, .. } => {
            web_sys::console::error_1(&format!("failed to build archive: {error}").into());
            outcome.status()
        }
        BatchOutcome::NothingConverted { .. } => outcome.status(),
    }
}
