use crate::constants::{CHECK_PREFIX, SUCCESS_PREFIX};
use crate::error::{FixtureError, Result};
use crate::manifest::{find_entry, fixture_directories, manifest, FixtureContent, FixtureEntry};
use crate::{info, verbose};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub checked: usize,
    pub total_bytes: u64,
}

fn check_entry(root: &Path, entry: &FixtureEntry) -> Result<u64> {
    let path = root.join(entry.relative_path());
    let metadata = match fs::metadata(&path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(FixtureError::Missing(path)),
        Err(e) => return Err(FixtureError::io(path, e)),
    };
    if !metadata.is_file() {
        return Err(FixtureError::NotAFile(path));
    }

    match entry.content {
        FixtureContent::Text(expected) => {
            let actual = fs::read(&path).map_err(|e| FixtureError::io(&path, e))?;
            if actual != expected.as_bytes() {
                return Err(FixtureError::ContentMismatch {
                    path,
                    expected: expected.to_string(),
                    actual: String::from_utf8_lossy(&actual).into_owned(),
                });
            }
        }
        FixtureContent::Random { .. } => {
            if metadata.len() != entry.expected_len() {
                return Err(FixtureError::SizeMismatch {
                    path,
                    expected: entry.expected_len(),
                    actual: metadata.len(),
                });
            }
        }
    }

    verbose!("{} {} ok", CHECK_PREFIX, path.display());
    Ok(metadata.len())
}

/// Rejects anything inside the fixture directories that the manifest does
/// not list. The root itself is not walked.
fn check_no_strays(root: &Path) -> Result<()> {
    for dir in fixture_directories() {
        let dir_path = root.join(dir);
        if !dir_path.is_dir() {
            continue;
        }

        for entry in WalkDir::new(&dir_path).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let relative = match entry.path().strip_prefix(root) {
                Ok(relative) => relative,
                Err(_) => return Err(FixtureError::UnexpectedEntry(entry.path().to_path_buf())),
            };
            let key = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            if !entry.file_type().is_file() || find_entry(&key).is_none() {
                return Err(FixtureError::UnexpectedEntry(entry.path().to_path_buf()));
            }
        }
    }
    Ok(())
}

/// Checks that every manifest entry exists under `root` with the expected
/// content, or for random entries the expected length. Stops at the first
/// problem.
pub fn verify_fixtures(root: &Path, strict: bool) -> Result<VerificationReport> {
    let mut report = VerificationReport::default();

    for entry in manifest() {
        report.total_bytes += check_entry(root, entry)?;
        report.checked += 1;
    }

    if strict {
        check_no_strays(root)?;
    }

    info!(
        "{} {} fixtures verified under {}",
        SUCCESS_PREFIX,
        report.checked,
        root.display()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate_fixtures, GenerateOptions};
    use tempfile::TempDir;

    fn generated() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let options = GenerateOptions::new(temp_dir.path(), None).unwrap();
        generate_fixtures(&options).unwrap();
        temp_dir
    }

    #[test]
    fn test_verify_generated_tree() {
        let temp_dir = generated();
        let report = verify_fixtures(temp_dir.path(), true).unwrap();
        assert_eq!(report.checked, 9);
        assert!(report.total_bytes > 10_000);
    }

    #[test]
    fn test_verify_missing_file() {
        let temp_dir = generated();
        fs::remove_file(temp_dir.path().join("target_rename/conflict_2.txt")).unwrap();

        let result = verify_fixtures(temp_dir.path(), false);
        assert!(matches!(result, Err(FixtureError::Missing(_))));
    }

    #[test]
    fn test_verify_content_mismatch() {
        let temp_dir = generated();
        fs::write(temp_dir.path().join("conflict.txt"), "Original\n").unwrap();

        match verify_fixtures(temp_dir.path(), false) {
            Err(FixtureError::ContentMismatch { expected, actual, .. }) => {
                assert_eq!(expected, "Original");
                assert_eq!(actual, "Original\n");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_verify_size_mismatch() {
        let temp_dir = generated();
        fs::write(temp_dir.path().join("data.bin"), vec![0u8; 9_999]).unwrap();

        let result = verify_fixtures(temp_dir.path(), false);
        assert!(matches!(
            result,
            Err(FixtureError::SizeMismatch {
                expected: 10_000,
                actual: 9_999,
                ..
            })
        ));
    }

    #[test]
    fn test_verify_directory_in_place_of_file() {
        let temp_dir = generated();
        fs::remove_file(temp_dir.path().join("readme")).unwrap();
        fs::create_dir(temp_dir.path().join("readme")).unwrap();

        let result = verify_fixtures(temp_dir.path(), false);
        assert!(matches!(result, Err(FixtureError::NotAFile(_))));
    }

    #[test]
    fn test_strict_rejects_stray_file() {
        let temp_dir = generated();
        fs::write(temp_dir.path().join("target_rename/conflict_3.txt"), "extra").unwrap();

        assert!(verify_fixtures(temp_dir.path(), false).is_ok());
        let result = verify_fixtures(temp_dir.path(), true);
        assert!(matches!(result, Err(FixtureError::UnexpectedEntry(_))));
    }

    #[test]
    fn test_strict_ignores_root_extras() {
        let temp_dir = generated();
        fs::write(temp_dir.path().join("notes.md"), "unrelated").unwrap();

        assert!(verify_fixtures(temp_dir.path(), true).is_ok());
    }
}
