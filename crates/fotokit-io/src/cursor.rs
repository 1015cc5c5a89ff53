//! Decorative cursor follower state.
//!
//! Two markers track the pointer: a small dot and a larger outline.
//! [`CursorState::apply`] computes the next state from the previous one
//! and a pointer event; the component only renders the derived style
//! strings.

/// Outline background at rest.
pub const OUTLINE_COLOR: &str = "rgba(67, 97, 238, 0.3)";

/// Outline background while hovering an interactive control.
pub const OUTLINE_HOVER_COLOR: &str = "rgba(67, 97, 238, 0.4)";

/// Outline scale while hovering an interactive control.
pub const OUTLINE_HOVER_SCALE: f64 = 1.5;

/// Pointer events the follower reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CursorEvent {
    /// Pointer moved to viewport coordinates `(x, y)`.
    Moved {
        /// Horizontal client coordinate in CSS pixels.
        x: f64,
        /// Vertical client coordinate in CSS pixels.
        y: f64,
    },
    /// Pointer re-entered the page.
    EnteredPage,
    /// Pointer left the page.
    LeftPage,
    /// Pointer entered a button, input, or link.
    HoverStart,
    /// Pointer left a button, input, or link.
    HoverEnd,
}

/// Position and appearance of the cursor markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorState {
    /// Horizontal client coordinate in CSS pixels.
    pub x: f64,
    /// Vertical client coordinate in CSS pixels.
    pub y: f64,
    /// Whether the markers are shown.
    pub visible: bool,
    /// Whether the pointer is over an interactive control.
    pub hovering: bool,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            visible: true,
            hovering: false,
        }
    }
}

impl CursorState {
    /// State after `event`.
    #[must_use]
    pub const fn apply(self, event: CursorEvent) -> Self {
        match event {
            CursorEvent::Moved { x, y } => Self { x, y, ..self },
            CursorEvent::EnteredPage => Self {
                visible: true,
                ..self
            },
            CursorEvent::LeftPage => Self {
                visible: false,
                ..self
            },
            CursorEvent::HoverStart => Self {
                hovering: true,
                ..self
            },
            CursorEvent::HoverEnd => Self {
                hovering: false,
                ..self
            },
        }
    }

    /// CSS opacity for both markers.
    #[must_use]
    pub const fn opacity(&self) -> &'static str {
        if self.visible { "1" } else { "0" }
    }

    /// Inline style for the dot marker.
    #[must_use]
    pub fn dot_style(&self) -> String {
        format!(
            "left: {}px; top: {}px; opacity: {};",
            self.x,
            self.y,
            self.opacity()
        )
    }

    /// Inline style for the outline marker.
    #[must_use]
    pub fn outline_style(&self) -> String {
        let (scale, background) = if self.hovering {
            (OUTLINE_HOVER_SCALE, OUTLINE_HOVER_COLOR)
        } else {
            (1.0, OUTLINE_COLOR)
        };
        format!(
            "left: {}px; top: {}px; opacity: {}; transform: translate(-50%, -50%) scale({scale}); background: {background};",
            self.x,
            self.y,
            self.opacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_at_origin() {
        let state = CursorState::default();
        assert!(state.visible);
        assert!(!state.hovering);
        assert_eq!(state.dot_style(), "left: 0px; top: 0px; opacity: 1;");
    }

    #[test]
    fn move_updates_both_markers() {
        let state = CursorState::default().apply(CursorEvent::Moved { x: 12.0, y: 40.5 });
        assert!(state.dot_style().starts_with("left: 12px; top: 40.5px;"));
        assert!(state.outline_style().starts_with("left: 12px; top: 40.5px;"));
    }

    #[test]
    fn leaving_and_entering_toggle_opacity() {
        let hidden = CursorState::default().apply(CursorEvent::LeftPage);
        assert_eq!(hidden.opacity(), "0");
        assert!(hidden.dot_style().contains("opacity: 0;"));
        assert!(hidden.outline_style().contains("opacity: 0;"));

        let shown = hidden.apply(CursorEvent::EnteredPage);
        assert_eq!(shown.opacity(), "1");
    }

    #[test]
    fn hover_enlarges_and_recolors_outline() {
        let hovering = CursorState::default().apply(CursorEvent::HoverStart);
        let style = hovering.outline_style();
        assert!(style.contains("transform: translate(-50%, -50%) scale(1.5);"));
        assert!(style.contains("background: rgba(67, 97, 238, 0.4);"));

        let rest = hovering.apply(CursorEvent::HoverEnd).outline_style();
        assert!(rest.contains("transform: translate(-50%, -50%) scale(1);"));
        assert!(rest.contains("background: rgba(67, 97, 238, 0.3);"));
    }

    #[test]
    fn hover_does_not_move_markers() {
        let state = CursorState::default()
            .apply(CursorEvent::Moved { x: 5.0, y: 6.0 })
            .apply(CursorEvent::HoverStart);
        assert!((state.x - 5.0).abs() < f64::EPSILON);
        assert!((state.y - 6.0).abs() < f64::EPSILON);
    }
}
