//! Opening the database for a command.
//!
//! Combines `keepath.toml`, the global flags and the master password into
//! an opened [`Database`].

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::Globals;
use crate::core::config::Config;
use crate::core::store::Database;
use crate::error::{ConfigError, Error, Operation, Result};

/// Everything needed to open the database for one invocation.
pub struct Session {
    config: Config,
    db_path: PathBuf,
    password: Zeroizing<String>,
}

impl Session {
    /// Load configuration and obtain the master password.
    ///
    /// The password comes from `--master-password` / `KEEPATH_PASSWORD`, or
    /// an interactive prompt when stdin is a terminal. `confirm` asks for it
    /// twice, for new databases.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoPassword` when no password is given and
    /// stdin is not a terminal.
    pub fn start(globals: &Globals, confirm: bool) -> Result<Self> {
        let config = Config::load()?;
        let db_path = config.database_path(globals.db.as_deref());
        debug!(path = %db_path.display(), "using database");

        let password = master_password(globals.master_password.as_deref(), confirm)?;

        Ok(Self {
            config,
            db_path,
            password,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Open the existing database.
    pub fn open(&self, op: Operation, path: &str) -> Result<Database> {
        Database::open(&self.db_path, &self.password)
            .map(|db| db.with_work_factor(self.config.work_factor))
            .map_err(|e| Error::store_access(op, path, e))
    }

    /// Open the database, creating an empty one if it does not exist yet.
    pub fn open_or_create(&self, op: Operation, path: &str) -> Result<Database> {
        Database::open_or_create(&self.db_path, &self.password, self.config.work_factor)
            .map_err(|e| Error::store_access(op, path, e))
    }

    /// Create a new empty database.
    pub fn create(&self) -> Result<Database> {
        Ok(Database::create(
            &self.db_path,
            &self.password,
            self.config.work_factor,
        )?)
    }
}

fn master_password(given: Option<&str>, confirm: bool) -> Result<Zeroizing<String>> {
    if let Some(password) = given {
        return Ok(Zeroizing::new(password.to_string()));
    }

    if !io::stdin().is_terminal() {
        return Err(ConfigError::NoPassword.into());
    }

    let mut prompt = Password::new().with_prompt("Master password");
    if confirm {
        prompt = prompt.with_confirmation("Confirm master password", "passwords do not match");
    }
    prompt
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| ConfigError::Prompt(e.to_string()).into())
}

/// Prompt for a secret's password with hidden input.
pub fn prompt_secret_password(path: &str) -> Result<String> {
    if !io::stdin().is_terminal() {
        return Err(Error::Input(
            "--ask-password needs an interactive terminal".to_string(),
        ));
    }

    Password::new()
        .with_prompt(format!("Password for {}", path))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| ConfigError::Prompt(e.to_string()).into())
}
