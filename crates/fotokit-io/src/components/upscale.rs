//! Upscale placeholder panel.

use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::components::{StatusLine, send_cursor_event};
use crate::cursor::{CursorEvent, CursorState};
use crate::upscale::UpscaleStub;

/// Panel for the not-yet-available upscale feature.
///
/// Accepts one photo, but never reads or transforms it: pressing the
/// button always ends with the "not available yet" notice.
#[component]
pub fn UpscalePanel() -> Element {
    let cursor: Option<Signal<CursorState>> = try_use_context();
    let mut stub = use_signal(UpscaleStub::default);

    let handle_files = move |evt: FormEvent| {
        stub.write().select(evt.files().len());
    };

    let handle_upscale = move |_| async move {
        let delay = stub.write().trigger();
        if let Some(delay) = delay {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::future::TimeoutFuture::new(millis).await;
            stub.write().delay_elapsed();
        }
    };

    let state = stub();

    rsx! {
        section { class: "panel",
            h2 { "Jernihkan Foto" }
            p { class: "hint",
                "Tingkatkan resolusi dan kejernihan satu foto."
            }

            label {
                class: "file-picker",
                onmouseenter: move |_| send_cursor_event(cursor, CursorEvent::HoverStart),
                onmouseleave: move |_| send_cursor_event(cursor, CursorEvent::HoverEnd),
                input {
                    r#type: "file",
                    id: "upscaleFileInput",
                    accept: "image/*",
                    onchange: handle_files,
                }
            }

            button {
                id: "upscaleBtn",
                class: "primary",
                disabled: !state.trigger_enabled(),
                onclick: handle_upscale,
                onmouseenter: move |_| send_cursor_event(cursor, CursorEvent::HoverStart),
                onmouseleave: move |_| send_cursor_event(cursor, CursorEvent::HoverEnd),
                "Jernihkan"
            }

            StatusLine { id: "upscaleStatus", status: state.status().clone() }
        }
    }
}
