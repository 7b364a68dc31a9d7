//! Secret operations addressed by raw path strings.
//!
//! These are the entry points used by the CLI. Each one validates the path
//! before touching the store and tags store failures with the operation
//! and path.

use tracing::debug;

use crate::core::domain::{SecretFields, SecretLookup, SecretRecord};
use crate::core::path::SecretPath;
use crate::core::reader;
use crate::core::store::TreeStore;
use crate::core::writer::{self, WriteOutcome};
use crate::error::{Error, Operation, Result};

/// Read one secret.
///
/// # Errors
///
/// Returns `Error::InvalidPath` for an empty or blank path. A missing entry
/// is not an error and yields `SecretLookup::Absent`.
pub fn read_secret<S: TreeStore + ?Sized>(store: &S, raw_path: &str) -> Result<SecretLookup> {
    let path = SecretPath::parse(raw_path)?;
    debug!(op = %Operation::ReadSecret, path = %path, "reading secret");
    Ok(reader::read_secret(store, &path))
}

/// Read every secret directly under a group.
///
/// # Errors
///
/// Returns `Error::InvalidPath` for an empty or blank path. A missing group
/// yields an empty list.
pub fn read_group<S: TreeStore + ?Sized>(store: &S, raw_path: &str) -> Result<Vec<SecretRecord>> {
    let path = SecretPath::parse(raw_path)?;
    debug!(op = %Operation::ReadGroup, path = %path, "reading group");
    Ok(reader::read_group(store, &path))
}

/// Write one secret, creating missing groups on the way.
///
/// # Arguments
///
/// * `store` - Opened tree store
/// * `raw_path` - Slash-delimited path of the entry
/// * `fields` - Values for the new entry
/// * `force` - Replace an existing entry instead of leaving it alone
///
/// # Errors
///
/// Returns `Error::InvalidPath` before any store access for an empty or
/// blank path, and `Error::StoreAccess` if the store fails.
pub fn write_secret<S: TreeStore + ?Sized>(
    store: &mut S,
    raw_path: &str,
    fields: &SecretFields,
    force: bool,
) -> Result<WriteOutcome> {
    let path = SecretPath::parse(raw_path)?;
    debug!(op = %Operation::WriteSecret, path = %path, force, "writing secret");
    writer::write(store, &path, fields, force)
        .map_err(|e| Error::store_access(Operation::WriteSecret, &path, e))
}

/// Report whether [`write_secret`] would change the store.
///
/// # Errors
///
/// Returns `Error::InvalidPath` for an empty or blank path.
pub fn check_write<S: TreeStore + ?Sized>(store: &S, raw_path: &str, force: bool) -> Result<bool> {
    let path = SecretPath::parse(raw_path)?;
    Ok(writer::plan(store, &path, force))
}
