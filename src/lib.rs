//! keepath - Path-addressed secrets in an encrypted tree database.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create a new database
//! │   ├── secrets       # get / group / set commands
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # keepath.toml management
//!     ├── path          # Slash-delimited path parsing
//!     ├── resolve       # Exact entry lookup
//!     ├── materialize   # Group lookup / creation along a path
//!     ├── writer        # Create-or-replace of one entry
//!     ├── reader        # Single and group reads
//!     ├── secrets       # Path-string operations (read/group/write)
//!     ├── domain/       # Entry fields and secret records
//!     └── store/        # Tree store trait and implementations
//!         ├── tree      # In-memory arena tree
//!         └── database  # age-encrypted database file
//! ```
//!
//! The engine only ever talks to a [`core::store::TreeStore`]; encryption
//! and file handling stay behind that trait.

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::{SecretFields, SecretLookup, SecretRecord};
pub use crate::core::path::SecretPath;
pub use crate::core::store::{Database, Tree, TreeStore};
pub use crate::core::writer::WriteOutcome;
