//! Upscale placeholder.
//!
//! The upscale feature is not available. Pressing the button shows a
//! "still in development" notice, keeps the button disabled for
//! [`UPSCALE_DELAY`], then reports that the feature cannot be used. No
//! image is ever read, transformed, or produced.

use std::time::Duration;

use fotokit_pipeline::Status;

/// Simulated processing time before the unavailable notice.
pub const UPSCALE_DELAY: Duration = Duration::from_secs(3);

/// Where the placeholder flow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Waiting for the user.
    #[default]
    Idle,
    /// Triggered; the simulated delay is running.
    Pending,
    /// The delay elapsed and the unavailable notice is shown.
    Unavailable,
}

/// State of the upscale panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpscaleStub {
    selected: usize,
    phase: Phase,
    status: Status,
}

impl UpscaleStub {
    /// The file picker selection changed to `count` files.
    ///
    /// While pending, the running flow keeps its notice.
    pub fn select(&mut self, count: usize) {
        self.selected = count;
        if self.phase != Phase::Pending {
            self.phase = Phase::Idle;
            self.status = Status::selection(count);
        }
    }

    /// The button was pressed.
    ///
    /// Returns the delay to wait before calling
    /// [`delay_elapsed`](Self::delay_elapsed), or `None` if nothing is
    /// selected or a flow is already pending.
    pub fn trigger(&mut self) -> Option<Duration> {
        if self.phase == Phase::Pending {
            return None;
        }
        if self.selected == 0 {
            self.status = Status::error("Pilih satu foto untuk dijernihkan.");
            return None;
        }
        self.phase = Phase::Pending;
        self.status =
            Status::error("Fitur ini masih dalam pengembangan. Mohon tunggu update selanjutnya!");
        Some(UPSCALE_DELAY)
    }

    /// The simulated delay finished.
    pub fn delay_elapsed(&mut self) {
        if self.phase == Phase::Pending {
            self.phase = Phase::Unavailable;
            self.status = Status::error("Maaf, fitur ini belum bisa digunakan.");
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current status line.
    #[must_use]
    pub const fn status(&self) -> &Status {
        &self.status
    }

    /// Whether the button accepts clicks.
    #[must_use]
    pub fn trigger_enabled(&self) -> bool {
        self.selected > 0 && self.phase != Phase::Pending
    }
}

#[cfg(test)]
mod tests {
    use fotokit_pipeline::Tone;

    use super::*;

    #[test]
    fn disabled_until_a_file_is_selected() {
        let mut stub = UpscaleStub::default();
        assert!(!stub.trigger_enabled());
        stub.select(1);
        assert!(stub.trigger_enabled());
        assert_eq!(stub.status().message, "1 foto terpilih.");
    }

    #[test]
    fn trigger_without_selection_asks_for_one_photo() {
        let mut stub = UpscaleStub::default();
        assert_eq!(stub.trigger(), None);
        assert_eq!(stub.status().message, "Pilih satu foto untuk dijernihkan.");
        assert_eq!(stub.phase(), Phase::Idle);
    }

    #[test]
    fn flow_always_ends_unavailable() {
        let mut stub = UpscaleStub::default();
        stub.select(1);

        assert_eq!(stub.trigger(), Some(Duration::from_millis(3000)));
        assert_eq!(stub.phase(), Phase::Pending);
        assert!(!stub.trigger_enabled());
        assert_eq!(
            stub.status().message,
            "Fitur ini masih dalam pengembangan. Mohon tunggu update selanjutnya!"
        );
        assert_eq!(stub.status().tone, Tone::Error);

        stub.delay_elapsed();
        assert_eq!(stub.phase(), Phase::Unavailable);
        assert_eq!(stub.status().message, "Maaf, fitur ini belum bisa digunakan.");
        assert_eq!(stub.status().tone, Tone::Error);
        assert!(stub.trigger_enabled());
    }

    #[test]
    fn second_trigger_while_pending_is_ignored() {
        let mut stub = UpscaleStub::default();
        stub.select(1);
        assert!(stub.trigger().is_some());
        assert_eq!(stub.trigger(), None);
        assert_eq!(stub.phase(), Phase::Pending);
    }

    #[test]
    fn selection_change_while_pending_keeps_notice() {
        let mut stub = UpscaleStub::default();
        stub.select(1);
        stub.trigger();
        stub.select(0);
        assert_eq!(stub.phase(), Phase::Pending);
        assert!(stub.status().message.starts_with("Fitur ini"));
        stub.delay_elapsed();
        assert!(!stub.trigger_enabled());
    }

    #[test]
    fn can_run_again_after_unavailable() {
        let mut stub = UpscaleStub::default();
        stub.select(1);
        stub.trigger();
        stub.delay_elapsed();
        assert_eq!(stub.trigger(), Some(UPSCALE_DELAY));
    }
}
