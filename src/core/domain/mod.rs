//! Domain types.

mod entry;
mod record;

pub use entry::{Entry, SecretFields};
pub use record::{SecretLookup, SecretRecord};
