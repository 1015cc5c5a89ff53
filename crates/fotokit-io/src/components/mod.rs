//! Dioxus UI components for fotokit.
//!
//! Provides the cursor follower, the tab bar, the batch compress panel,
//! the upscale placeholder panel, and the shared status line.

mod compress;
mod cursor;
mod status_line;
mod tab_bar;
mod upscale;

pub use compress::CompressPanel;
pub use cursor::{CursorFollower, send_cursor_event};
pub use status_line::StatusLine;
pub use tab_bar::TabBar;
pub use upscale::UpscalePanel;
