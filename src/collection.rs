//! Collection Aggregator: namespace key -> ordered records.
//!
//! Append-only for the duration of one run; there is no removal. Iteration
//! order across namespaces is unspecified (HashMap), but within a namespace
//! records keep their arrival order. The collection exclusively owns its
//! records once they are added.

use std::collections::HashMap;

use crate::snippet::SnippetRecord;

#[derive(Debug, Default)]
pub struct Collection {
    groups: HashMap<String, Vec<SnippetRecord>>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` under `key`, creating the group on first sight.
    pub fn add(&mut self, key: String, record: SnippetRecord) {
        self.groups.entry(key).or_default().push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct namespace keys seen so far.
    pub fn namespace_count(&self) -> usize {
        self.groups.len()
    }

    /// Total records across all namespaces.
    pub fn snippet_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Enumerate (key, records) pairs for the render phase. Order across
    /// keys is unspecified; order within a group is insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SnippetRecord])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}
