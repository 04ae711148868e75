//! Snippet Renderer: serialize each namespace group into snipMate syntax and
//! write one .snippets file per namespace.
//!
//! Output layout per file:
//!
//! ```text
//! # <namespace> snippets for snipMate.
//! # Created by <invocation> @ <local timestamp>
//!
//! # <display name>
//! snippet <trigger> <display name>
//! \t<body, continuation lines indented by one tab>
//! ```
//!
//! Body newlines become newline+tab so every continuation line sits inside
//! the snippet block, as snipMate requires. Everything else in the body is
//! passed through byte-for-byte.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Local;
use log::info;

use crate::collection::Collection;
use crate::snippet::SnippetRecord;

pub const OUTPUT_SUFFIX: &str = ".snippets";

/// Write the whole collection into `target`, one file per namespace.
/// Returns the total number of records written.
///
/// An empty collection is a no-op (logged, target never touched). A missing
/// or non-directory target is a fatal precondition, checked once before any
/// file is created.
pub fn write_dir(collection: &Collection, target: &Path, invocation: &str) -> Result<usize> {
    if collection.is_empty() {
        info!("no data loaded, nothing to write");
        return Ok(0);
    }

    if !target.is_dir() {
        bail!(
            "target directory '{}' does not exist or is not a directory",
            target.display()
        );
    }

    // One timestamp per run so every file carries the same banner.
    let banner = format!(
        "# Created by {} @ {}\n\n",
        invocation,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let mut wrote = 0usize;
    for (key, records) in collection.iter() {
        let fpath = target.join(format!("{}{}", key, OUTPUT_SUFFIX));
        let mut fd = File::create(&fpath)
            .with_context(|| format!("create output file '{}'", fpath.display()))?;

        let mut buf = String::new();
        buf.push_str(&format!("# {} snippets for snipMate.\n", key));
        buf.push_str(&banner);
        for rec in records {
            buf.push_str(&render_entry(rec));
            wrote += 1;
        }

        fd.write_all(buf.as_bytes())
            .with_context(|| format!("write output file '{}'", fpath.display()))?;
    }

    info!(
        "successfully wrote {} snippets across {} files",
        wrote,
        collection.namespace_count()
    );
    Ok(wrote)
}

/// One snippet entry in snipMate syntax, trailing blank line included.
pub fn render_entry(rec: &SnippetRecord) -> String {
    let name = rec.display_name();
    let body = rec.content.replace('\n', "\n\t");
    format!(
        "# {}\nsnippet {} {}\n\t{}\n\n",
        name, rec.tab_trigger, name, body
    )
}
