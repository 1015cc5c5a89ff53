//! In-memory ZIP archive builder.
//!
//! Entries accumulate as conversions succeed and are written out once
//! by [`ArchiveBuilder::finish`]. Entries are stored without
//! compression: WebP payloads are already compressed, so deflating them
//! only costs time.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::types::PipelineError;

/// Ordered collection of named archive entries.
#[derive(Debug, Clone, Default)]
pub struct ArchiveBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl ArchiveBuilder {
    /// Create an empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry.
    ///
    /// If an entry with the same name exists its content is replaced in
    /// place (it keeps its original position) and `true` is returned.
    pub fn insert(&mut self, name: String, bytes: Vec<u8>) -> bool {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            *existing = bytes;
            return true;
        }
        self.entries.push((name, bytes));
        false
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Content of the entry called `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, bytes)| bytes.as_slice())
    }

    /// Write all entries into a single ZIP payload.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyArchive`] if there are no entries,
    /// or [`PipelineError::Archive`] / [`PipelineError::Io`] if the ZIP
    /// writer fails.
    pub fn finish(self) -> Result<Vec<u8>, PipelineError> {
        if self.entries.is_empty() {
            return Err(PipelineError::EmptyArchive);
        }

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, bytes) in self.entries {
            writer.start_file(name, options)?;
            writer.write_all(&bytes)?;
        }
        Ok(writer.finish()?.into_inner())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Read;

    use super::*;

    /// Read every entry of a finished archive back as `(name, bytes)`.
    fn read_entries(payload: Vec<u8>) -> Vec<(String, Vec<u8>)> {
        let mut archive = zip::ZipArchive::new(Cursor::new(payload)).unwrap();
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).unwrap();
                let mut buf = Vec::new();
                file.read_to_end(&mut buf).unwrap();
                (file.name().to_owned(), buf)
            })
            .collect()
    }

    #[test]
    fn empty_builder_cannot_finish() {
        let result = ArchiveBuilder::new().finish();
        assert!(matches!(result, Err(PipelineError::EmptyArchive)));
    }

    #[test]
    fn entries_are_written_in_insertion_order() {
        let mut builder = ArchiveBuilder::new();
        builder.insert("b.webp".into(), vec![2; 8]);
        builder.insert("a.webp".into(), vec![1; 4]);
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.names().collect::<Vec<_>>(), ["b.webp", "a.webp"]);

        let entries = read_entries(builder.finish().unwrap());
        assert_eq!(
            entries,
            [
                ("b.webp".to_owned(), vec![2; 8]),
                ("a.webp".to_owned(), vec![1; 4]),
            ]
        );
    }

    #[test]
    fn same_name_replaces_content_in_place() {
        let mut builder = ArchiveBuilder::new();
        assert!(!builder.insert("a.webp".into(), vec![1]));
        assert!(!builder.insert("b.webp".into(), vec![2]));
        assert!(builder.insert("a.webp".into(), vec![3]));
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.get("a.webp"), Some([3].as_slice()));

        let entries = read_entries(builder.finish().unwrap());
        assert_eq!(entries[0], ("a.webp".to_owned(), vec![3]));
        assert_eq!(entries[1], ("b.webp".to_owned(), vec![2]));
    }

    #[test]
    fn entries_are_stored_uncompressed() {
        let mut builder = ArchiveBuilder::new();
        builder.insert("a.webp".into(), vec![0; 64]);
        let payload = builder.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(payload)).unwrap();
        let file = archive.by_index(0).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Stored);
        assert_eq!(file.size(), 64);
    }

    #[test]
    fn missing_entry_lookup() {
        let builder = ArchiveBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.get("nope.webp"), None);
    }
}
