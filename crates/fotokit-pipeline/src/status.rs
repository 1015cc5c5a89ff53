//! User-visible status lines.
//!
//! A [`Status`] is the single message shown under a trigger button plus
//! its display tone. Every pipeline step overwrites the previous one;
//! nothing is queued. The message texts are the exact strings users
//! see.

/// Display tone of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Informational, no highlight.
    #[default]
    Neutral,
    /// Finished successfully.
    Success,
    /// Something went wrong.
    Error,
}

impl Tone {
    /// CSS class applied to the status element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A status message and its tone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    /// Text shown to the user. Empty means nothing is shown.
    pub message: String,
    /// Display tone.
    pub tone: Tone,
}

impl Status {
    /// A status with an explicit tone.
    #[must_use]
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }

    /// An informational status.
    #[must_use]
    pub fn neutral(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Neutral)
    }

    /// A success status.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Success)
    }

    /// An error status.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Error)
    }

    /// Returns `true` for the error tone.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }

    /// CSS class for the current tone.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        self.tone.css_class()
    }

    /// Status after the file picker selection changed.
    ///
    /// An empty selection clears the status line.
    #[must_use]
    pub fn selection(count: usize) -> Self {
        if count == 0 {
            Self::default()
        } else {
            Self::neutral(format!("{count} foto terpilih."))
        }
    }

    /// The trigger was pressed with nothing selected.
    #[must_use]
    pub fn no_selection() -> Self {
        Self::error("Pilih setidaknya satu foto.")
    }

    /// A batch is starting.
    #[must_use]
    pub fn starting() -> Self {
        Self::neutral("Memulai kompresi dan pembuatan ZIP... Mohon tunggu.")
    }

    /// Progress after a successful conversion.
    ///
    /// Keeps `tone` so that an earlier per-file failure stays flagged
    /// while the rest of the batch continues.
    #[must_use]
    pub fn progress(tone: Tone, converted: usize, total: usize) -> Self {
        Self::new(format!("Mengkompres: {converted}/{total}"), tone)
    }

    /// A single file could not be converted.
    #[must_use]
    pub fn file_failed(name: &str) -> Self {
        Self::error(format!("Error: Gagal memproses {name}."))
    }

    /// The archive was built and handed to the browser for download.
    #[must_use]
    pub fn done(converted: usize) -> Self {
        Self::success(format!(
            "Selesai! {converted} foto berhasil dikompres dan diunduh."
        ))
    }

    /// Building or offering the archive failed.
    #[must_use]
    pub fn archive_failed() -> Self {
        Self::error("Terjadi kesalahan saat membuat file ZIP.")
    }

    /// Every file in the batch failed.
    #[must_use]
    pub fn nothing_converted() -> Self {
        Self::error("Tidak ada foto yang berhasil dikompres.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_messages() {
        assert_eq!(Status::selection(3).message, "3 foto terpilih.");
        assert_eq!(Status::selection(3).tone, Tone::Neutral);
        assert_eq!(Status::selection(0), Status::default());
        assert!(Status::selection(0).message.is_empty());
    }

    #[test]
    fn exact_pipeline_strings() {
        assert_eq!(Status::no_selection().message, "Pilih setidaknya satu foto.");
        assert_eq!(
            Status::starting().message,
            "Memulai kompresi dan pembuatan ZIP... Mohon tunggu."
        );
        assert_eq!(
            Status::progress(Tone::Neutral, 1, 4).message,
            "Mengkompres: 1/4"
        );
        assert_eq!(
            Status::file_failed("a.png").message,
            "Error: Gagal memproses a.png."
        );
        assert_eq!(
            Status::done(2).message,
            "Selesai! 2 foto berhasil dikompres dan diunduh."
        );
        assert_eq!(
            Status::archive_failed().message,
            "Terjadi kesalahan saat membuat file ZIP."
        );
        assert_eq!(
            Status::nothing_converted().message,
            "Tidak ada foto yang berhasil dikompres."
        );
    }

    #[test]
    fn tones_and_classes() {
        assert_eq!(Status::done(1).css_class(), "success");
        assert!(Status::file_failed("x").is_error());
        assert!(Status::nothing_converted().is_error());
        assert!(Status::archive_failed().is_error());
        assert_eq!(Status::starting().css_class(), "");
    }

    #[test]
    fn progress_keeps_previous_tone() {
        assert_eq!(Status::progress(Tone::Error, 2, 3).tone, Tone::Error);
        assert_eq!(Status::progress(Tone::Neutral, 2, 3).tone, Tone::Neutral);
    }
}
