//! Tab buttons for switching between panels.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdArchive, LdSparkles};

use crate::components::send_cursor_event;
use crate::cursor::{CursorEvent, CursorState};
use crate::tabs::{TabId, TabSet};

/// Props for the [`TabBar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct TabBarProps {
    /// Current selection.
    tabs: TabSet,
    /// Callback fired when a tab button is clicked.
    on_select: EventHandler<TabId>,
}

/// Row of tab buttons; the active one carries the `active` class.
///
/// Panels are rendered by the parent with [`TabSet::panel_class`].
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    let cursor: Option<Signal<CursorState>> = try_use_context();
    let on_select = props.on_select;
    let tabs = props.tabs;

    rsx! {
        nav { class: "tab-bar", role: "tablist",
            for tab in TabId::ALL {
                button {
                    key: "{tab.dom_id()}",
                    class: tabs.button_class(tab),
                    role: "tab",
                    "data-tab": tab.dom_id(),
                    "aria-selected": "{tabs.is_active(tab)}",
                    onclick: move |_| on_select.call(tab),
                    onmouseenter: move |_| send_cursor_event(cursor, CursorEvent::HoverStart),
                    onmouseleave: move |_| send_cursor_event(cursor, CursorEvent::HoverEnd),
                    {render_icon(tab)}
                    span { "{tab.label()}" }
                }
            }
        }
    }
}

fn render_icon(tab: TabId) -> Element {
    match tab {
        TabId::Compress => rsx! { Icon { width: 16, height: 16, icon: LdArchive } },
        TabId::Upscale => rsx! { Icon { width: 16, height: 16, icon: LdSparkles } },
    }
}
