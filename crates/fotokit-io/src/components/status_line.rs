//! Status line shown under each trigger button.

use dioxus::prelude::*;
use fotokit_pipeline::Status;

/// Props for the [`StatusLine`] component.
#[derive(Props, Clone, PartialEq)]
pub struct StatusLineProps {
    /// Element id, so each panel's line can be styled or targeted.
    id: &'static str,
    /// Message and tone to display.
    status: Status,
}

/// A single message with a `success`/`error` class.
#[component]
pub fn StatusLine(props: StatusLineProps) -> Element {
    let class = props.status.css_class();
    rsx! {
        p {
            id: props.id,
            class: "status {class}",
            role: "status",
            "{props.status.message}"
        }
    }
}
