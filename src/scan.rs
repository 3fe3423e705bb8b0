//! Recursive discovery of candidate documents.

use crate::batch::{Progress, ProgressSink};
use crate::config::ScanOptions;
use crate::error::{AtoError, Result};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Find every document under `root` whose extension is configured.
///
/// Hidden directories and configured dependency directories are not entered.
/// Entries that cannot be read are logged and skipped; the walk continues.
/// Progress is reported every `options.progress_interval` directories and on
/// every file found.
///
/// # Errors
///
/// Returns [`AtoError::RootNotFound`] if `root` is not an existing directory.
pub fn scan(root: &Path, options: &ScanOptions, sink: &dyn ProgressSink) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AtoError::RootNotFound(root.display().to_string()));
    }

    let interval = options.progress_interval.max(1);
    let mut files = Vec::new();
    let mut dirs_scanned = 0usize;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !should_skip_dir(entry, options));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(
                    path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            },
        };

        if entry.file_type().is_dir() {
            dirs_scanned += 1;
            if dirs_scanned % interval == 0 {
                sink.report(Progress::Scanning {
                    dirs_scanned,
                    files_found: files.len(),
                });
            }
            continue;
        }

        // symlinks are not followed into directories, but linked files count
        let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
        if is_file && options.matches_extension(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
            sink.report(Progress::Scanning {
                dirs_scanned,
                files_found: files.len(),
            });
        }
    }

    Ok(files)
}

fn should_skip_dir(entry: &DirEntry, options: &ScanOptions) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    (options.skip_hidden && name.starts_with('.')) || options.skip_dirs.iter().any(|d| *d == name)
}
