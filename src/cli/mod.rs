//! Command-line interface.

pub mod completions;
pub mod init;
pub mod output;
pub mod secrets;
pub mod session;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{DATABASE_ENV, PASSWORD_ENV};

/// keepath - Path-addressed secrets in an encrypted tree database.
#[derive(Parser)]
#[command(
    name = "keepath",
    about = "Path-addressed secrets in an encrypted tree database",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Database file (overrides keepath.toml)
    #[arg(long, global = true, env = DATABASE_ENV)]
    pub db: Option<PathBuf>,

    /// Database master password (prompted for when omitted)
    #[arg(long, global = true, env = PASSWORD_ENV, hide_env_values = true)]
    pub master_password: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a new empty database
    Init,

    /// Read one secret, e.g. /prod/db/admin
    Get {
        /// Secret path
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show passwords instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Read every secret directly under a group
    Group {
        /// Group path
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show passwords instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Write a secret, creating missing groups and the database if needed
    Set {
        /// Secret path
        path: String,
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Password
        #[arg(short, long, conflicts_with = "ask_password")]
        password: Option<String>,
        /// Prompt for the secret's password with hidden input
        #[arg(long)]
        ask_password: bool,
        /// URL
        #[arg(long)]
        url: Option<String>,
        /// Custom property as KEY=VALUE (repeatable)
        #[arg(short = 'P', long = "property", value_name = "KEY=VALUE")]
        properties: Vec<String>,
        /// Custom properties as a JSON object
        #[arg(long, value_name = "JSON")]
        properties_json: Option<String>,
        /// Replace the secret if it already exists
        #[arg(short, long)]
        force: bool,
        /// Only report whether the write would change anything
        #[arg(long)]
        check: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Global options shared by every command.
#[derive(Clone, Default)]
pub struct Globals {
    pub db: Option<PathBuf>,
    pub master_password: Option<String>,
}

/// Execute a command.
pub fn execute(command: Command, globals: Globals) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init => init::execute(&globals),
        Get { path, json, reveal } => secrets::get(&globals, &path, json, reveal),
        Group { path, json, reveal } => secrets::group(&globals, &path, json, reveal),
        Set {
            path,
            username,
            password,
            ask_password,
            url,
            properties,
            properties_json,
            force,
            check,
            json,
        } => secrets::set(
            &globals,
            &path,
            secrets::SetArgs {
                username,
                password,
                ask_password,
                url,
                properties,
                properties_json,
                force,
                check,
                json,
            },
        ),
        Completions { shell } => completions::execute(shell),
    }
}
