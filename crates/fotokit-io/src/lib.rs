//! fotokit-io: Browser I/O and Dioxus component library.
//!
//! Handles canvas re-encoding, Blob conversions and downloads, drives
//! the batch compressor on the UI thread, and provides the cursor
//! follower, tab bar, and panel components for the fotokit web app.

pub mod blob;
pub mod canvas;
pub mod components;
pub mod convert;
pub mod cursor;
pub mod download;
pub mod tabs;
pub mod upscale;

pub use components::{
    CompressPanel, CursorFollower, StatusLine, TabBar, UpscalePanel, send_cursor_event,
};
pub use cursor::{CursorEvent, CursorState};
pub use tabs::{TabId, TabSet};
