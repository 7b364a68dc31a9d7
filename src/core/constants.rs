//! Constants used throughout keepath.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "keepath.toml";

/// Database file used when neither `--db` nor the config names one.
pub const DEFAULT_DATABASE: &str = "keepath.age";

/// Name given to the root group of a new database.
pub const ROOT_GROUP: &str = "Root";

/// Path segment separator.
pub const SEPARATOR: char = '/';

/// Environment variable holding the master password.
pub const PASSWORD_ENV: &str = "KEEPATH_PASSWORD";

/// Environment variable overriding the database path.
pub const DATABASE_ENV: &str = "KEEPATH_DB";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "KEEPATH_LOG";

/// Record keys filled from the entry's own fields.
pub const USERNAME_KEY: &str = "username";
pub const PASSWORD_KEY: &str = "password";
