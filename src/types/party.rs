use std::fmt;

use serde::Serialize;

/// A party column of the election table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Party {
    /// Position of the party in the vote-share table.
    pub index: usize,
    /// Header name, or the source column position when the file has no header.
    pub label: String,
}

impl Party {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self { index, label: label.into() }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
