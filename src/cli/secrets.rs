//! Secret commands (get, group, set).

use serde_json::json;

use crate::cli::output;
use crate::cli::session::{self, Session};
use crate::cli::Globals;
use crate::core::domain::SecretFields;
use crate::core::path::SecretPath;
use crate::core::secrets;
use crate::error::{Error, Operation, Result};

/// Read one secret.
pub fn get(globals: &Globals, raw_path: &str, json: bool, reveal: bool) -> Result<()> {
    let path = SecretPath::parse(raw_path)?;
    let session = Session::start(globals, false)?;
    let db = session.open(Operation::ReadSecret, raw_path)?;

    let lookup = secrets::read_secret(&db, raw_path)?;

    if json {
        let output = json!({ "secret": lookup });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match lookup.record() {
            Some(record) => output::record(record, reveal),
            None => output::dimmed(&format!("no secret at {}", path)),
        }
    }

    Ok(())
}

/// Read every secret directly under a group.
pub fn group(globals: &Globals, raw_path: &str, json: bool, reveal: bool) -> Result<()> {
    let path = SecretPath::parse(raw_path)?;
    let session = Session::start(globals, false)?;
    let db = session.open(Operation::ReadGroup, raw_path)?;

    let records = secrets::read_group(&db, raw_path)?;

    if json {
        let output = json!({
            "path": raw_path,
            "group": records,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if records.is_empty() {
        output::dimmed(&format!("no secrets under {}", path));
    } else {
        for (i, record) in records.iter().enumerate() {
            if i > 0 {
                println!();
            }
            output::record(record, reveal);
        }
    }

    Ok(())
}

/// Arguments of `keepath set`.
#[derive(Default)]
pub struct SetArgs {
    pub username: Option<String>,
    pub password: Option<String>,
    pub ask_password: bool,
    pub url: Option<String>,
    pub properties: Vec<String>,
    pub properties_json: Option<String>,
    pub force: bool,
    pub check: bool,
    pub json: bool,
}

/// Write one secret.
pub fn set(globals: &Globals, raw_path: &str, args: SetArgs) -> Result<()> {
    let path = SecretPath::parse(raw_path)?;
    let fields = build_fields(raw_path, &args)?;
    let session = Session::start(globals, false)?;

    if args.check {
        let (changed, lookup) = if session.db_path().exists() {
            let db = session.open(Operation::WriteSecret, raw_path)?;
            (
                secrets::check_write(&db, raw_path, args.force)?,
                secrets::read_secret(&db, raw_path)?,
            )
        } else {
            (true, crate::core::domain::SecretLookup::Absent)
        };

        if args.json {
            let output = json!({ "changed": changed, "path": raw_path, "secret": lookup });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else if changed {
            output::warn(&format!("would write {}", output::path(&path.to_string())));
        } else {
            output::dimmed(&format!("{} exists, nothing to do", path));
        }
        return Ok(());
    }

    let mut db = session.open_or_create(Operation::WriteSecret, raw_path)?;
    let outcome = secrets::write_secret(&mut db, raw_path, &fields, args.force)?;

    if args.json {
        let output = json!({
            "changed": outcome.changed,
            "path": raw_path,
            "secret": outcome.record,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if outcome.changed {
        output::success(&format!("wrote {}", output::path(&path.to_string())));
    } else {
        output::warn(&format!(
            "{} already exists, left untouched (use --force to replace)",
            output::path(&path.to_string())
        ));
    }

    Ok(())
}

fn build_fields(raw_path: &str, args: &SetArgs) -> Result<SecretFields> {
    let password = if args.ask_password {
        Some(session::prompt_secret_password(raw_path)?)
    } else {
        args.password.clone()
    };

    let mut fields = SecretFields {
        username: args.username.clone(),
        password,
        url: args.url.clone(),
        ..SecretFields::default()
    };

    if let Some(raw) = &args.properties_json {
        fields.properties = SecretFields::properties_from_json(raw)?;
    }
    for pair in &args.properties {
        let (key, value) = parse_property(pair)?;
        fields.properties.insert(key.to_string(), value.to_string());
    }

    Ok(fields)
}

/// Split a `KEY=VALUE` argument. The value may itself contain `=`.
fn parse_property(pair: &str) -> Result<(&str, &str)> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(Error::Input(format!(
            "invalid property '{}': expected KEY=VALUE",
            pair
        ))),
    }
}
