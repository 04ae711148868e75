//! The unit of work: one parsed TextMate snippet.

/// A validated snippet record. All four fields are guaranteed present by the
/// parser; `scope` is canonicalized in place during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetRecord {
    /// Snippet body, passed through verbatim (placeholders, newlines and all).
    pub content: String,
    /// Human-readable label.
    pub name: String,
    /// Dot-hierarchical category, e.g. "source.python.django".
    pub scope: String,
    /// Token the user types to expand the snippet.
    pub tab_trigger: String,
}

impl SnippetRecord {
    /// Name as rendered into the output file: the first space-delimited
    /// token is dropped when the name is multi-word ("My Snippet Title" ->
    /// "Snippet Title"); single-word names are used unmodified.
    pub fn display_name(&self) -> &str {
        match self.name.split_once(' ') {
            Some((_, rest)) => rest,
            None => &self.name,
        }
    }
}
