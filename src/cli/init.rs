//! Init command.

use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::cli::Globals;
use crate::error::Result;

/// Create a new empty database.
pub fn execute(globals: &Globals) -> Result<()> {
    let session = Session::start(globals, true)?;
    let db = session.create()?;
    info!(path = %db.path().display(), "initialized");

    output::success(&format!(
        "created {}",
        output::path(&db.path().display().to_string())
    ));
    output::dimmed("next: keepath set /group/name --username USER --password PASS");
    Ok(())
}
