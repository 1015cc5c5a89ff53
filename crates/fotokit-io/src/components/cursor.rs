//! Cursor follower markers.

use dioxus::prelude::*;

use crate::cursor::{CursorEvent, CursorState};

/// Apply `event` to the shared cursor state, if one is provided.
///
/// Components look the state up with `try_use_context` and pass the
/// result here from their event handlers; without a provider this does
/// nothing.
pub fn send_cursor_event(cursor: Option<Signal<CursorState>>, event: CursorEvent) {
    if let Some(mut cursor) = cursor {
        let next = cursor.peek().apply(event);
        cursor.set(next);
    }
}

/// The dot and outline markers.
///
/// Renders nothing when no `Signal<CursorState>` context exists.
#[component]
pub fn CursorFollower() -> Element {
    let cursor: Option<Signal<CursorState>> = try_use_context();
    let Some(cursor) = cursor else {
        return rsx! {};
    };
    let state = cursor();

    rsx! {
        div {
            class: "cursor-dot",
            aria_hidden: "true",
            style: "{state.dot_style()}",
        }
        div {
            class: "cursor-dot-outline",
            aria_hidden: "true",
            style: "{state.outline_style()}",
        }
    }
}
