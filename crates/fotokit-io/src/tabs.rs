//! Tab identifiers and the single-selection tab set.

use std::fmt;

/// One tab and its content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    /// Batch WebP compression.
    #[default]
    Compress,
    /// Upscale placeholder.
    Upscale,
}

impl TabId {
    /// All tabs in display order.
    pub const ALL: [Self; 2] = [Self::Compress, Self::Upscale];

    /// Panel element id, also used as the button's `data-tab` value.
    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Compress => "kompres",
            Self::Upscale => "jernihkan",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compress => "Kompres Foto",
            Self::Upscale => "Jernihkan Foto",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which tab is active.
///
/// Holding a single [`TabId`] makes "no active tab" and "several active
/// tabs" unrepresentable: every selection leaves exactly one active
/// button/panel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSet {
    active: TabId,
}

impl TabSet {
    /// A tab set with `active` selected.
    #[must_use]
    pub const fn new(active: TabId) -> Self {
        Self { active }
    }

    /// Make `tab` the active tab, deactivating every other one.
    pub const fn select(&mut self, tab: TabId) {
        self.active = tab;
    }

    /// The active tab.
    #[must_use]
    pub const fn active(&self) -> TabId {
        self.active
    }

    /// Returns `true` if `tab` is the active tab.
    #[must_use]
    pub fn is_active(&self, tab: TabId) -> bool {
        self.active == tab
    }

    /// Class list for `tab`'s button.
    #[must_use]
    pub fn button_class(&self, tab: TabId) -> &'static str {
        if self.is_active(tab) {
            "tab-button active"
        } else {
            "tab-button"
        }
    }

    /// Class list for `tab`'s content panel.
    #[must_use]
    pub fn panel_class(&self, tab: TabId) -> &'static str {
        if self.is_active(tab) {
            "tab-content active"
        } else {
            "tab-content"
        }
    }
}
