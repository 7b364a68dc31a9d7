//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A single path segment (a group name or an entry title).
pub type Segment = String;

/// A custom property name on an entry.
pub type PropertyKey = String;

/// A custom property value, always stored as a string.
pub type PropertyValue = String;
