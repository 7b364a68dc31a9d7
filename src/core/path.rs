//! Slash-delimited secret paths.
//!
//! A path like `/prod/db/admin` names an entry (`admin`) and the groups it
//! lives under (`prod`, `db`). Empty segments from leading, trailing or
//! doubled slashes are dropped.

use std::fmt;
use std::str::FromStr;

use crate::core::constants::SEPARATOR;
use crate::core::types::Segment;
use crate::error::PathError;

/// A parsed path with at least one non-empty segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretPath {
    segments: Vec<Segment>,
}

/// Resolve a possibly-missing raw path string.
///
/// # Errors
///
/// Returns `PathError::Missing` for `None`, `PathError::Blank` for empty
/// or whitespace-only input, and `PathError::NoSegments` when nothing but
/// separators remains.
pub fn resolve(raw: Option<&str>) -> Result<SecretPath, PathError> {
    let raw = raw.ok_or(PathError::Missing)?;
    if raw.trim().is_empty() {
        return Err(PathError::Blank);
    }

    let segments: Vec<Segment> = raw
        .split(SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if segments.is_empty() {
        return Err(PathError::NoSegments(raw.to_string()));
    }

    Ok(SecretPath { segments })
}

impl SecretPath {
    /// Parse a raw path string.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        resolve(Some(raw))
    }

    /// All segments, groups first, terminal name last.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Terminal segment.
    pub fn name(&self) -> &str {
        // never empty by construction
        &self.segments[self.segments.len() - 1]
    }

    /// Segments naming the enclosing groups (everything but the terminal one).
    pub fn groups(&self) -> &[Segment] {
        &self.segments[..self.segments.len() - 1]
    }

    /// A single-segment path lives directly under the root group.
    pub fn is_root_level(&self) -> bool {
        self.segments.len() == 1
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl FromStr for SecretPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SecretPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{}{}", SEPARATOR, segment)?;
        }
        Ok(())
    }
}
