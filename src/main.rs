//! keepath - Path-addressed secrets in an encrypted tree database.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use keepath::cli::output;
use keepath::cli::{execute, Cli, Globals};
use keepath::core::constants::LOG_ENV;
use keepath::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("keepath=debug")
        } else {
            EnvFilter::new("keepath=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    let globals = Globals {
        db: cli.db,
        master_password: cli.master_password,
    };

    if let Err(e) = execute(cli.command, globals) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::StoreAccess {
                source: StoreError::NotFound(_),
                ..
            } => Some("run: keepath init"),
            Error::StoreAccess {
                source: StoreError::Decrypt(_),
                ..
            } => Some("check the master password"),
            Error::Store(StoreError::AlreadyExists(_)) => {
                Some("pass --db to create a database elsewhere")
            }
            Error::Config(ConfigError::NoPassword) => Some("export KEEPATH_PASSWORD=..."),
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
