use dioxus::prelude::*;
use fotokit_io::{
    CompressPanel, CursorEvent, CursorFollower, CursorState, TabBar, TabId, TabSet, UpscalePanel,
    send_cursor_event,
};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Provides the shared cursor state, tracks pointer movement over the
/// whole page, and wires the tab bar to its two panels.  Both panels
/// stay mounted; only the `active` class decides which one is shown,
/// so a selection in a hidden panel survives switching tabs.
fn app() -> Element {
    let cursor = use_context_provider(|| Signal::new(CursorState::default()));
    let mut tabs = use_signal(TabSet::default);

    let on_select = move |tab: TabId| {
        tabs.write().select(tab);
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }

        div {
            class: "page",
            onmousemove: move |evt| {
                let point = evt.client_coordinates();
                send_cursor_event(Some(cursor), CursorEvent::Moved { x: point.x, y: point.y });
            },
            onmouseenter: move |_| send_cursor_event(Some(cursor), CursorEvent::EnteredPage),
            onmouseleave: move |_| send_cursor_event(Some(cursor), CursorEvent::LeftPage),

            CursorFollower {}

            header { class: "header",
                h1 { "Fotokit" }
                p { class: "tagline", "Alat foto sederhana langsung di browser." }
            }

            TabBar { tabs: tabs(), on_select: on_select }

            main {
                div {
                    id: TabId::Compress.dom_id(),
                    class: tabs().panel_class(TabId::Compress),
                    CompressPanel {}
                }
                div {
                    id: TabId::Upscale.dom_id(),
                    class: tabs().panel_class(TabId::Upscale),
                    UpscalePanel {}
                }
            }

            footer { class: "footer",
                "Semua proses berjalan di perangkat Anda; tidak ada foto yang diunggah."
            }
        }
    }
}
