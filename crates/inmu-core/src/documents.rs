//! Snapshot of open document texts
//!
//! The host owns the documents; the store mirrors the latest full text of
//! each open one so queries can read raw lines.

use std::collections::BTreeMap;

/// Open documents keyed by URI, iterated in URI order
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    docs: BTreeMap<String, String>,
}

impl DocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the full text of `uri`, replacing any previous snapshot
    pub fn upsert(&mut self, uri: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(uri.into(), text.into());
    }

    /// Forget `uri`; returns its last text
    pub fn remove(&mut self, uri: &str) -> Option<String> {
        self.docs.remove(uri)
    }

    #[must_use]
    pub fn get(&self, uri: &str) -> Option<&str> {
        self.docs.get(uri).map(String::as_str)
    }

    /// One line of `uri`, if both exist
    #[must_use]
    pub fn line(&self, uri: &str, line: u32) -> Option<&str> {
        let text = self.get(uri)?;
        text.split('\n')
            .nth(line as usize)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    #[must_use]
    pub fn contains(&self, uri: &str) -> bool {
        self.docs.contains_key(uri)
    }

    /// `(uri, text)` pairs of every open document
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.docs.iter().map(|(uri, text)| (uri.as_str(), text.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
