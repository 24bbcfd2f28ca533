//! Namespaced symbol paths

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder namespace for references that could not be resolved.
pub const UNKNOWN_NAMESPACE: &str = "<unknown>";

/// Fully-qualified, ordered name of a code symbol.
///
/// Equality and hashing are structural over the segment sequence. Segments
/// never contain the `.` separator — any embedded dot in a raw segment is
/// normalized to `_` at construction so that the dotted rendering stays
/// unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymbolPath {
    segments: Vec<String>,
}

impl SymbolPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments = segments
            .into_iter()
            .map(|s| s.into().replace('.', "_"))
            .collect();
        SymbolPath { segments }
    }

    /// Parse a dot-joined rendering back into a path.
    pub fn from_dotted(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::empty();
        }
        SymbolPath {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    /// Placeholder path for an unresolvable reference, carrying the original
    /// literal as its final segment.
    pub fn unknown(literal: &str) -> Self {
        Self::new([UNKNOWN_NAMESPACE, literal])
    }

    pub fn empty() -> Self {
        SymbolPath {
            segments: Vec::new(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment, i.e. the symbol's own name.
    pub fn name(&self) -> &str {
        self.segments
            .last()
            .map(String::as_str)
            .unwrap_or(UNKNOWN_NAMESPACE)
    }

    /// All segments but the last.
    pub fn namespace(&self) -> &[String] {
        match self.segments.len() {
            0 => &[],
            n => &self.segments[..n - 1],
        }
    }

    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// Filesystem-safe rendering.
    pub fn underscored(&self) -> String {
        self.segments.join("_")
    }

    pub fn join(&self, other: &SymbolPath) -> SymbolPath {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        SymbolPath { segments }
    }

    /// Empty paths and single blank segments count as degenerate, not errors.
    pub fn is_blank(&self) -> bool {
        self.segments.is_empty() || (self.segments.len() == 1 && self.segments[0].trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length of the shared namespace prefix with another path.
    pub fn common_prefix_len(&self, other: &[String]) -> usize {
        self.namespace()
            .iter()
            .zip(other.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }
}

impl From<Vec<String>> for SymbolPath {
    fn from(segments: Vec<String>) -> Self {
        SymbolPath::new(segments)
    }
}

impl From<SymbolPath> for Vec<String> {
    fn from(path: SymbolPath) -> Self {
        path.segments
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}
