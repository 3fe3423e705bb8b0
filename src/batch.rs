//! Asynchronous batch driver.
//!
//! Files are processed strictly one after another: each file's search or
//! replace runs to completion on the blocking pool before the next starts.
//! Progress updates are emitted between steps so a caller can render progress
//! while the work proceeds. A failing file is logged and recorded in the
//! result; it never aborts the batch.

use crate::config::{ScanOptions, SnippetOptions};
use crate::document::{self, DocumentKind, ReplaceReport, SearchReport};
use crate::error::Result;
use crate::ooxml::text::Query;
use crate::scan;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// A progress notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Progress {
    /// Walking the directory tree
    Scanning {
        dirs_scanned: usize,
        files_found: usize,
    },
    /// Searching file `current` of `total`
    Searching {
        current: usize,
        total: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        current_file: Option<String>,
        matches_found: usize,
    },
    /// Replacing in file `current` of `total`
    Replacing {
        current: usize,
        total: usize,
        current_file: String,
    },
    /// The batch finished
    Complete,
}

/// Receiver of progress notifications.
pub trait ProgressSink: Send + Sync {
    /// Deliver one notification. Must not block.
    fn report(&self, progress: Progress);
}

/// Sink that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _progress: Progress) {}
}

impl ProgressSink for UnboundedSender<Progress> {
    fn report(&self, progress: Progress) {
        // A dropped receiver only means nobody is watching
        let _ = self.send(progress);
    }
}

impl<F> ProgressSink for F
where
    F: Fn(Progress) + Send + Sync,
{
    fn report(&self, progress: Progress) {
        self(progress)
    }
}

/// A document that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHit {
    pub file_path: PathBuf,
    pub file_name: String,
    #[serde(flatten)]
    pub report: SearchReport,
}

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub file_path: PathBuf,
    pub error: String,
}

/// Aggregate result of searching a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    /// Documents with at least one match, in scan order
    pub hits: Vec<FileHit>,
    /// Documents that failed to open or parse
    pub failures: Vec<FileFailure>,
    /// Number of candidate documents examined
    pub files_scanned: usize,
}

/// Per-file outcome of a batch step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOutcome<T> {
    Success(T),
    Failed { error: String },
}

impl<T> FileOutcome<T> {
    /// The success value, if any.
    pub fn success(&self) -> Option<&T> {
        match self {
            FileOutcome::Success(value) => Some(value),
            FileOutcome::Failed { .. } => None,
        }
    }
}

/// Result of replacing in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReplace {
    pub file_path: PathBuf,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DocumentKind>,
    pub outcome: FileOutcome<ReplaceReport>,
}

/// Batch driver holding options and a progress sink.
///
/// # Examples
///
/// ```rust,no_run
/// use ato::batch::{Progress, Session};
/// use ato::Query;
///
/// # async fn run() -> ato::Result<()> {
/// let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Progress>();
/// tokio::spawn(async move {
///     while let Some(progress) = rx.recv().await {
///         println!("{progress:?}");
///     }
/// });
///
/// let session = Session::new(tx);
/// let query = Query::new("ACME", true)?;
/// let summary = session.search_folder("/shared/contracts", &query).await?;
/// let files: Vec<_> = summary.hits.iter().map(|h| h.file_path.clone()).collect();
/// let results = session.replace_files(&files, &query, "Acme", false).await;
/// # let _ = results;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Session<S> {
    sink: Arc<S>,
    scan_options: ScanOptions,
    snippet_options: SnippetOptions,
}

impl<S: ProgressSink + 'static> Session<S> {
    /// Create a session with default options.
    pub fn new(sink: S) -> Self {
        Self {
            sink: Arc::new(sink),
            scan_options: ScanOptions::default(),
            snippet_options: SnippetOptions::default(),
        }
    }

    /// Set the directory walker options.
    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.scan_options = options;
        self
    }

    /// Set the dry-run preview options.
    pub fn with_snippet_options(mut self, options: SnippetOptions) -> Self {
        self.snippet_options = options;
        self
    }

    /// Walk `root` for candidate documents.
    pub async fn scan(&self, root: impl Into<PathBuf>) -> Result<Vec<PathBuf>> {
        let root = root.into();
        let options = self.scan_options.clone();
        let sink = Arc::clone(&self.sink);
        tokio::task::spawn_blocking(move || scan::scan(&root, &options, sink.as_ref())).await?
    }

    /// Scan `root` and search every candidate document.
    ///
    /// # Errors
    ///
    /// Only failing to start (the root folder doesn't exist) is an error;
    /// per-file failures are collected in the summary.
    pub async fn search_folder(&self, root: impl Into<PathBuf>, query: &Query) -> Result<SearchSummary> {
        self.sink.report(Progress::Scanning {
            dirs_scanned: 0,
            files_found: 0,
        });
        let files = self.scan(root).await?;
        let total = files.len();
        info!(files = total, "scan complete");

        self.sink.report(Progress::Searching {
            current: 0,
            total,
            current_file: None,
            matches_found: 0,
        });

        let mut summary = SearchSummary {
            files_scanned: total,
            ..Default::default()
        };

        for (i, path) in files.into_iter().enumerate() {
            self.sink.report(Progress::Searching {
                current: i + 1,
                total,
                current_file: Some(file_name(&path)),
                matches_found: summary.hits.len(),
            });

            let task_query = query.clone();
            let task_path = path.clone();
            let result = run_blocking(move || document::search(&task_path, &task_query)).await;

            match result {
                Ok(report) if report.found => {
                    debug!(path = %path.display(), matches = report.total_count, "match");
                    summary.hits.push(FileHit {
                        file_name: file_name(&path),
                        file_path: path,
                        report,
                    });
                },
                Ok(_) => {},
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "search failed");
                    summary.failures.push(FileFailure {
                        file_path: path,
                        error: err.to_string(),
                    });
                },
            }
        }

        self.sink.report(Progress::Complete);
        Ok(summary)
    }

    /// Replace in each file, one at a time.
    ///
    /// Returns one entry per input file, in order.
    pub async fn replace_files(
        &self,
        files: &[PathBuf],
        query: &Query,
        replacement: &str,
        dry_run: bool,
    ) -> Vec<FileReplace> {
        let total = files.len();
        let mut results = Vec::with_capacity(total);

        for (i, path) in files.iter().enumerate() {
            self.sink.report(Progress::Replacing {
                current: i + 1,
                total,
                current_file: file_name(path),
            });

            let task_query = query.clone();
            let task_path = path.clone();
            let task_replacement = replacement.to_string();
            let options = self.snippet_options;
            let result = run_blocking(move || {
                document::replace(&task_path, &task_query, &task_replacement, dry_run, &options)
            })
            .await;

            let outcome = match result {
                Ok(report) => FileOutcome::Success(report),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "replace failed");
                    FileOutcome::Failed {
                        error: err.to_string(),
                    }
                },
            };

            results.push(FileReplace {
                file_path: path.clone(),
                file_name: file_name(path),
                kind: DocumentKind::from_path(path).ok(),
                outcome,
            });
        }

        self.sink.report(Progress::Complete);
        results
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_json_shape() {
        let json = serde_json::to_value(Progress::Searching {
            current: 1,
            total: 3,
            current_file: Some("a.docx".into()),
            matches_found: 0,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "phase": "searching",
                "current": 1,
                "total": 3,
                "currentFile": "a.docx",
                "matchesFound": 0
            })
        );
        assert_eq!(
            serde_json::to_value(Progress::Complete).unwrap(),
            serde_json::json!({"phase": "complete"})
        );
    }

    #[test]
    fn test_failed_outcome_json_shape() {
        let outcome: FileOutcome<ReplaceReport> = FileOutcome::Failed { error: "boom".into() };
        assert!(outcome.success().is_none());
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            serde_json::json!({"status": "failed", "error": "boom"})
        );
    }

    #[tokio::test]
    async fn test_channel_sink() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.report(Progress::Complete);
        assert_eq!(rx.recv().await, Some(Progress::Complete));
        drop(rx);
        // no receiver left, must not panic
        tx.report(Progress::Complete);
    }

    #[tokio::test]
    async fn test_search_missing_root_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(NoProgress);
        let query = Query::new("x", true).unwrap();
        assert!(session.search_folder(dir.path().join("missing"), &query).await.is_err());
    }
}
