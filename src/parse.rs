//! Record Parser: one .tmSnippet XML file -> SnippetRecord or a typed
//! rejection.
//!
//! TextMate snippets are plist-style XML; the payload is an alternating
//! sequence of <key>/<string> elements inside a <dict>:
//!
//! ```text
//! <dict>
//!     <key>content</key>
//!     <string>browser.handleErrors = True</string>
//!     ...
//! </dict>
//! ```
//!
//! The pairing is positional, not a real map: the i-th <key> names the field
//! carried by the i-th <string>. A count mismatch is fatal for that file,
//! and a later duplicate key silently overwrites an earlier one.
//!
//! Every failure mode here is per-file and recoverable; callers log the
//! rejection and move on. Nothing in this module aborts a batch.

use std::fmt;
use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};

use crate::snippet::SnippetRecord;

/// Why a source file was dropped from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reject {
    /// Unreadable file or malformed markup.
    NotASnippet,
    /// No <key> elements or no <string> elements at all.
    EmptyRecord,
    /// Key and value element counts differ.
    Unbalanced { keys: usize, values: usize },
    /// A required field is absent after folding the pairs.
    MissingField(&'static str),
}

impl fmt::Display for Reject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reject::NotASnippet => write!(f, "not a valid snippet source"),
            Reject::EmptyRecord => write!(f, "invalid snippet information"),
            Reject::Unbalanced { keys, values } => write!(
                f,
                "missing snippet information ({} keys vs {} values)",
                keys, values
            ),
            Reject::MissingField(name) => {
                write!(f, "required key '{}' is missing", name)
            }
        }
    }
}

/// Parse one candidate source file.
pub fn parse_snippet(path: &Path) -> Result<SnippetRecord, Reject> {
    let text = fs::read_to_string(path).map_err(|_| Reject::NotASnippet)?;
    parse_str(&text)
}

/// Parse an in-memory XML document (the pure core of `parse_snippet`).
pub fn parse_str(xml: &str) -> Result<SnippetRecord, Reject> {
    let doc = Document::parse(xml).map_err(|_| Reject::NotASnippet)?;

    let keys = element_texts(&doc, "key");
    let values = element_texts(&doc, "string");

    if keys.is_empty() || values.is_empty() {
        return Err(Reject::EmptyRecord);
    }
    if keys.len() != values.len() {
        return Err(Reject::Unbalanced {
            keys: keys.len(),
            values: values.len(),
        });
    }

    // Zip index-wise and fold, last key wins on duplicates. uuid and any
    // other unrecognized keys are dropped here.
    let mut content: Option<String> = None;
    let mut name: Option<String> = None;
    let mut scope: Option<String> = None;
    let mut tab_trigger: Option<String> = None;

    for (k, v) in keys.into_iter().zip(values) {
        match k.as_str() {
            "content" => content = Some(v),
            "name" => name = Some(v),
            "scope" => scope = Some(v),
            "tabTrigger" => tab_trigger = Some(v),
            _ => {}
        }
    }

    // Required fields, checked in the canonical order so the first missing
    // one is the one reported.
    let content = content.ok_or(Reject::MissingField("content"))?;
    let name = name.ok_or(Reject::MissingField("name"))?;
    let scope = scope.ok_or(Reject::MissingField("scope"))?;
    let tab_trigger = tab_trigger.ok_or(Reject::MissingField("tabTrigger"))?;

    Ok(SnippetRecord {
        content,
        name,
        scope,
        tab_trigger,
    })
}

/// Text content of every element named `tag`, in document order. An element
/// without text children contributes an empty string (keeps the positional
/// pairing intact).
fn element_texts(doc: &Document<'_>, tag: &str) -> Vec<String> {
    doc.root()
        .descendants()
        .filter(|n| n.is_element() && n.has_tag_name(tag))
        .map(node_text)
        .collect()
}

fn node_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|c| c.is_text())
        .filter_map(|c| c.text())
        .collect()
}
