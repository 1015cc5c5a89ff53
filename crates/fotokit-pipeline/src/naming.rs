//! Archive entry naming.
//!
//! Each input keeps its base name and gets the output format's
//! extension. Collisions between entries are resolved by a
//! [`NameRegistry`] according to the configured [`DuplicatePolicy`].

use std::collections::HashSet;

use crate::config::DuplicatePolicy;
use crate::types::OutputFormat;

/// Input extensions that are replaced rather than appended to.
const REPLACED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Derive the archive entry name for an input file name.
///
/// - A trailing `.png`, `.jpg` or `.jpeg` (ASCII case-insensitive) is
///   replaced: `Photo.JPG` becomes `Photo.webp`.
/// - A name already carrying the output extension is kept as is.
/// - Any other name gets the extension appended: `scan.bmp` becomes
///   `scan.bmp.webp`.
///
/// The result always ends in the output extension, so applying the
/// function twice gives the same name as applying it once.
#[must_use]
pub fn output_name(input: &str, format: OutputFormat) -> String {
    let ext = format.extension();
    if let Some((stem, suffix)) = input.rsplit_once('.') {
        if suffix.eq_ignore_ascii_case(ext) {
            return input.to_owned();
        }
        if REPLACED_EXTENSIONS
            .iter()
            .any(|r| r.eq_ignore_ascii_case(suffix))
        {
            return format!("{stem}.{ext}");
        }
    }
    format!("{input}.{ext}")
}

/// Tracks entry names already used in one archive.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    policy: DuplicatePolicy,
    taken: HashSet<String>,
}

impl NameRegistry {
    /// Create an empty registry with the given collision policy.
    #[must_use]
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            taken: HashSet::new(),
        }
    }

    /// Reserve `name`, returning the entry name to write under.
    ///
    /// With [`DuplicatePolicy::Overwrite`] the name is returned
    /// unchanged even if already taken. With [`DuplicatePolicy::Rename`]
    /// a taken name becomes `stem (n).ext` for the smallest `n >= 2`
    /// that is still free.
    pub fn claim(&mut self, name: String) -> String {
        match self.policy {
            DuplicatePolicy::Overwrite => {
                self.taken.insert(name.clone());
                name
            }
            DuplicatePolicy::Rename => {
                if self.taken.insert(name.clone()) {
                    return name;
                }
                let (stem, ext) = name
                    .rsplit_once('.')
                    .map_or((name.as_str(), None), |(s, e)| (s, Some(e)));
                let mut n: u32 = 2;
                loop {
                    let candidate = ext.map_or_else(
                        || format!("{stem} ({n})"),
                        |ext| format!("{stem} ({n}).{ext}"),
                    );
                    if self.taken.insert(candidate.clone()) {
                        return candidate;
                    }
                    n += 1;
                }
            }
        }
    }

    /// Number of distinct names reserved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    /// Returns `true` if no name has been reserved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
