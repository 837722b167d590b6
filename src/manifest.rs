use crate::constants::*;
use std::path::Path;

/// What a fixture file holds once written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureContent {
    /// UTF-8 text, written without a trailing newline.
    Text(&'static str),
    /// `len` random bytes. Only the length is fixed.
    Random { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureEntry {
    /// Path relative to the output root, `/`-separated.
    pub path: &'static str,
    pub content: FixtureContent,
}

impl FixtureEntry {
    const fn text(path: &'static str, content: &'static str) -> Self {
        Self {
            path,
            content: FixtureContent::Text(content),
        }
    }

    pub fn expected_len(&self) -> u64 {
        match self.content {
            FixtureContent::Text(text) => text.len() as u64,
            FixtureContent::Random { len } => len as u64,
        }
    }

    /// Parent directory relative to the root, `None` for top-level files.
    pub fn parent_dir(&self) -> Option<&'static str> {
        self.path.rsplit_once('/').map(|(dir, _)| dir)
    }

    pub fn relative_path(&self) -> &'static Path {
        Path::new(self.path)
    }
}

/// Entries in the order they are written.
pub static MANIFEST: [FixtureEntry; 9] = [
    FixtureEntry::text(DOC_PATH, DOC_CONTENT),
    FixtureEntry {
        path: DATA_BIN_PATH,
        content: FixtureContent::Random { len: DATA_BIN_SIZE },
    },
    FixtureEntry::text(README_PATH, README_CONTENT),
    FixtureEntry::text(DEEP_PATH, DEEP_CONTENT),
    FixtureEntry::text(CONFLICT_SOURCE_PATH, CONFLICT_SOURCE_CONTENT),
    FixtureEntry::text(CONFLICT_TARGET_PATH, CONFLICT_TARGET_CONTENT),
    FixtureEntry::text(RENAME_BASE_PATH, RENAME_BASE_CONTENT),
    FixtureEntry::text(RENAME_FIRST_PATH, RENAME_FIRST_CONTENT),
    FixtureEntry::text(RENAME_SECOND_PATH, RENAME_SECOND_CONTENT),
];

pub fn manifest() -> &'static [FixtureEntry] {
    &MANIFEST
}

/// Distinct directories the manifest needs, in first-use order.
pub fn fixture_directories() -> Vec<&'static str> {
    let mut dirs: Vec<&'static str> = Vec::new();
    for dir in MANIFEST.iter().filter_map(FixtureEntry::parent_dir) {
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// Looks up an entry by its relative path.
pub fn find_entry(path: &str) -> Option<&'static FixtureEntry> {
    MANIFEST.iter().find(|entry| entry.path == path)
}
