//! Batch compress panel: file picker, trigger button, and status line.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use fotokit_pipeline::{ConvertConfig, Status};

use crate::components::{StatusLine, send_cursor_event};
use crate::convert::compress_and_download;
use crate::cursor::{CursorEvent, CursorState};

/// Accepted file types for the picker.
const ACCEPT: &str = ".png,.jpg,.jpeg,image/png,image/jpeg";

/// Panel that compresses the selected photos into a ZIP of WebP files.
///
/// The button is enabled only while at least one file is selected and
/// no batch is running; it comes back once the batch has finished,
/// whatever the outcome.
#[component]
pub fn CompressPanel() -> Element {
    let cursor: Option<Signal<CursorState>> = try_use_context();
    let config = use_hook(ConvertConfig::default);
    let mut files = use_signal(Vec::<FileData>::new);
    let mut status = use_signal(Status::default);
    let mut busy = use_signal(|| false);

    let handle_files = move |evt: FormEvent| {
        let picked = evt.files();
        status.set(Status::selection(picked.len()));
        files.set(picked);
    };

    let handle_compress = {
        let config = config.clone();
        move |_| {
            let config = config.clone();
            async move {
                if busy() {
                    return;
                }
                busy.set(true);
                compress_and_download(files(), config, move |s| status.set(s)).await;
                busy.set(false);
            }
        }
    };

    let disabled = busy() || files.read().is_empty();
    let quality_percent = format!("{:.0}", config.quality * 100.0);

    rsx! {
        section { class: "panel",
            h2 { "Kompres Foto" }
            p { class: "hint",
                "Foto PNG atau JPEG diubah ke WebP (kualitas {quality_percent}%) lalu diunduh sekaligus sebagai {config.archive_name}."
            }

            label {
                class: "file-picker",
                onmouseenter: move |_| send_cursor_event(cursor, CursorEvent::HoverStart),
                onmouseleave: move |_| send_cursor_event(cursor, CursorEvent::HoverEnd),
                input {
                    r#type: "file",
                    id: "fileInput",
                    accept: ACCEPT,
                    multiple: true,
                    onchange: handle_files,
                }
            }

            button {
                id: "compressBtn",
                class: "primary",
                disabled: disabled,
                onclick: handle_compress,
                onmouseenter: move |_| send_cursor_event(cursor, CursorEvent::HoverStart),
                onmouseleave: move |_| send_cursor_event(cursor, CursorEvent::HoverEnd),
                "Kompres & Unduh ZIP"
            }

            StatusLine { id: "status", status: status() }
        }
    }
}
