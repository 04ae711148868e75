//! Pipeline orchestration: scan the source directory, feed files through the
//! parser/normalizer into the collection, then hand off to the renderer.
//!
//! Two-pass by design: the read phase fully completes before the first
//! output byte is written. Per-file parse failures are absorbed here as
//! warnings; only an unlistable source directory aborts the read phase.

use std::path::Path;

use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::Serialize;

use crate::collection::Collection;
use crate::config::ConvertConfig;
use crate::parse::parse_snippet;
use crate::render::write_dir;
use crate::scope;

/// Standard TextMate snippet suffix, matched case-sensitively.
pub const SOURCE_SUFFIX: &str = ".tmSnippet";

/// Counters from the read phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadStats {
    /// Records that parsed and validated.
    pub valid: usize,
    /// Candidate files scanned, rejected ones included.
    pub scanned: usize,
}

/// Final run summary, printed as JSON under --json.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunReport {
    pub snippets_read: usize,
    pub files_scanned: usize,
    pub namespaces: usize,
    pub snippets_written: usize,
}

/// Read phase: scan `source` (non-recursive) for .tmSnippet files and fold
/// every valid record into `collection`.
///
/// The only error this returns is a directory that cannot be listed; every
/// per-file problem is logged and skipped.
pub fn read_dir(
    source: &Path,
    cfg: &ConvertConfig,
    collection: &mut Collection,
) -> Result<ReadStats> {
    let entries = std::fs::read_dir(source)
        .with_context(|| format!("could not open source directory '{}'", source.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("could not list source directory '{}'", source.display()))?;
        let name = entry.file_name();
        let is_match = name.to_str().is_some_and(|n| n.ends_with(SOURCE_SUFFIX));
        if is_match && entry.path().is_file() {
            files.push(entry.path());
        }
    }

    if files.is_empty() {
        warn!(
            "no TextMate snippets found in directory '{}'",
            source.display()
        );
        return Ok(ReadStats::default());
    }

    let mut stats = ReadStats {
        valid: 0,
        scanned: files.len(),
    };
    for fpath in &files {
        let fname = fpath
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<non-utf8>");
        match parse_snippet(fpath) {
            Ok(mut rec) => {
                rec.scope = scope::canonicalize(&rec.scope);
                let key = scope::namespace_key(&rec.scope, &cfg.domain);
                collection.add(key, rec);
                stats.valid += 1;
            }
            Err(reject) => {
                warn!("'{}': {}, skipping", fname, reject);
            }
        }
    }

    info!(
        "read {} snippets out of {} files and found {} namespaces",
        stats.valid,
        stats.scanned,
        collection.namespace_count()
    );
    Ok(stats)
}

/// Full pipeline: read phase, then write phase.
///
/// A failed read phase (unlistable source directory) is absorbed here with
/// an error log; the run then completes with nothing written and the
/// process still exits 0, in keeping with the tool's best-effort posture.
/// A target-directory precondition failure in the write phase does
/// propagate.
pub fn run(
    source: &Path,
    target: &Path,
    cfg: &ConvertConfig,
    invocation: &str,
) -> Result<RunReport> {
    let mut collection = Collection::new();
    let stats = match read_dir(source, cfg, &mut collection) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{:#}, aborting read phase", e);
            ReadStats::default()
        }
    };

    let wrote = write_dir(&collection, target, invocation)?;

    Ok(RunReport {
        snippets_read: stats.valid,
        files_scanned: stats.scanned,
        namespaces: collection.namespace_count(),
        snippets_written: wrote,
    })
}
