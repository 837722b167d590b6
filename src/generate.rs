use crate::constants::{DIR_PREFIX, FILE_PREFIX, SUCCESS_PREFIX, SUMMARY_PREFIX};
use crate::error::{FixtureError, Result};
use crate::manifest::{manifest, FixtureContent, FixtureEntry};
use crate::{info, verbose};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub root: PathBuf,
    pub seed: Option<u64>,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>, seed: Option<u64>) -> Result<Self> {
        let root = root.into();
        if root.exists() && !root.is_dir() {
            return Err(FixtureError::RootNotADirectory(root));
        }

        Ok(Self { root, seed })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub files: Vec<WrittenFile>,
    pub directories: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Fills `len` bytes from a seeded `StdRng`, or from the thread RNG when no
/// seed is given.
pub fn random_bytes(len: usize, seed: Option<u64>) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed).fill_bytes(&mut bytes),
        None => rand::rng().fill_bytes(&mut bytes),
    }
    bytes
}

fn ensure_dir(dir: &Path, report: &mut GenerationReport) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| FixtureError::io(dir, e))?;
    verbose!("{} Created directory {}", DIR_PREFIX, dir.display());
    report.directories.push(dir.to_path_buf());
    Ok(())
}

fn write_entry(root: &Path, entry: &FixtureEntry, seed: Option<u64>) -> Result<WrittenFile> {
    let path = root.join(entry.relative_path());
    let bytes = match entry.content {
        FixtureContent::Text(text) => text.as_bytes().to_vec(),
        FixtureContent::Random { len } => random_bytes(len, seed),
    };

    fs::write(&path, &bytes).map_err(|e| FixtureError::io(&path, e))?;
    verbose!("{} Wrote {} ({} bytes)", FILE_PREFIX, path.display(), bytes.len());

    Ok(WrittenFile {
        path,
        bytes: bytes.len() as u64,
    })
}

/// Writes every manifest entry under `options.root`, in manifest order.
///
/// Existing files are overwritten. The first failure aborts the run and
/// leaves already-written files in place.
pub fn generate_fixtures(options: &GenerateOptions) -> Result<GenerationReport> {
    let root = &options.root;
    let mut report = GenerationReport::default();

    ensure_dir(root, &mut report)?;

    for entry in manifest() {
        if let Some(dir) = entry.parent_dir() {
            ensure_dir(&root.join(dir), &mut report)?;
        }
        let written = write_entry(root, entry, options.seed)?;
        report.files.push(written);
    }

    info!(
        "{} Wrote {} files ({} bytes) under {}",
        SUMMARY_PREFIX,
        report.files.len(),
        report.total_bytes(),
        root.display()
    );
    info!("{} All fixture files created", SUCCESS_PREFIX);

    Ok(report)
}
