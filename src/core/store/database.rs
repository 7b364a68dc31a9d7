//! Password-protected database file.
//!
//! The tree is serialized as TOML and encrypted with an age passphrase
//! (scrypt) stanza in ASCII armor. Saving writes a sibling temporary file
//! and renames it over the database.

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use age::secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
use zeroize::Zeroizing;

use super::tree::GroupDoc;
use super::{EntryId, GroupId, Tree, TreeStore};
use crate::core::domain::{Entry, SecretFields};
use crate::core::types::Segment;
use crate::error::StoreError;

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    keepath: Meta,
    root: GroupDoc,
}

#[derive(Debug, Serialize, Deserialize)]
struct Meta {
    version: String,
}

/// An opened database: the decrypted tree plus what is needed to save it.
pub struct Database {
    path: PathBuf,
    password: Zeroizing<String>,
    work_factor: Option<u8>,
    tree: Tree,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("work_factor", &self.work_factor)
            .field("tree", &self.tree)
            .finish()
    }
}

impl Database {
    /// Create and save a new empty database.
    ///
    /// # Arguments
    ///
    /// * `path` - Database file to create
    /// * `password` - Master password
    /// * `work_factor` - scrypt log2 work factor; `None` uses age's default
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if the file exists, or an
    /// encryption / write error if the initial save fails.
    pub fn create(path: &Path, password: &str, work_factor: Option<u8>) -> Result<Self, StoreError> {
        if path.exists() {
            return Err(StoreError::AlreadyExists(path.to_path_buf()));
        }

        let mut db = Self {
            path: path.to_path_buf(),
            password: Zeroizing::new(password.to_string()),
            work_factor,
            tree: Tree::new(),
        };
        db.save()?;

        info!(path = %path.display(), "database created");
        Ok(db)
    }

    /// Open and decrypt an existing database.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the file is missing,
    /// `StoreError::Decrypt` for a wrong password or damaged ciphertext, and
    /// `StoreError::Parse` if the decrypted document is malformed.
    pub fn open(path: &Path, password: &str) -> Result<Self, StoreError> {
        debug!(path = %path.display(), "opening database");

        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        let armored = fs::read_to_string(path).map_err(StoreError::Read)?;
        let plaintext = decrypt(&armored, password)?;
        let document: Document = toml::from_str(&plaintext)?;

        let tree = Tree::from_doc(document.root);
        debug!(
            groups = tree.group_count(),
            entries = tree.entry_count(),
            "database loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            password: Zeroizing::new(password.to_string()),
            work_factor: None,
            tree,
        })
    }

    /// Open a database, creating it first when the file does not exist.
    pub fn open_or_create(
        path: &Path,
        password: &str,
        work_factor: Option<u8>,
    ) -> Result<Self, StoreError> {
        if path.exists() {
            Ok(Self::open(path, password)?.with_work_factor(work_factor))
        } else {
            Self::create(path, password, work_factor)
        }
    }

    /// Use a different scrypt work factor for subsequent saves.
    pub fn with_work_factor(mut self, work_factor: Option<u8>) -> Self {
        self.work_factor = work_factor;
        self
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The decrypted tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl TreeStore for Database {
    fn root_group(&self) -> GroupId {
        self.tree.root_group()
    }

    fn find_group(&self, path: &[Segment]) -> Option<GroupId> {
        self.tree.find_group(path)
    }

    fn find_entry(&self, path: &[Segment]) -> Option<EntryId> {
        self.tree.find_entry(path)
    }

    fn add_group(&mut self, parent: GroupId, name: &str) -> Result<GroupId, StoreError> {
        self.tree.add_group(parent, name)
    }

    fn add_entry(
        &mut self,
        parent: GroupId,
        title: &str,
        fields: &SecretFields,
    ) -> Result<EntryId, StoreError> {
        self.tree.add_entry(parent, title, fields)
    }

    fn set_property(&mut self, entry: EntryId, key: &str, value: &str) -> Result<(), StoreError> {
        self.tree.set_property(entry, key, value)
    }

    fn delete_entry(&mut self, entry: EntryId) -> Result<(), StoreError> {
        self.tree.delete_entry(entry)
    }

    fn entry(&self, entry: EntryId) -> Option<&Entry> {
        self.tree.entry(entry)
    }

    fn group_entries(&self, group: GroupId) -> Vec<EntryId> {
        self.tree.group_entries(group)
    }

    fn entry_path(&self, entry: EntryId) -> Option<Vec<Segment>> {
        self.tree.entry_path(entry)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), "saving database");

        let document = Document {
            keepath: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            root: self.tree.to_doc(),
        };
        let plaintext = Zeroizing::new(toml::to_string_pretty(&document)?);
        let armored = encrypt(&plaintext, &self.password, self.work_factor)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, armored).map_err(StoreError::Write)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(StoreError::Write)?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::Write(e));
        }

        self.tree.save()
    }
}

fn encrypt(plaintext: &str, password: &str, work_factor: Option<u8>) -> Result<String, StoreError> {
    trace!(plaintext_len = plaintext.len(), "encrypting");

    let mut recipient = age::scrypt::Recipient::new(SecretString::from(password.to_string()));
    if let Some(log_n) = work_factor {
        recipient.set_work_factor(log_n);
    }

    let encryptor =
        age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn age::Recipient))
            .map_err(|e| StoreError::Encrypt(format!("{}", e)))?;

    let mut encrypted = Vec::new();
    let mut writer = encryptor
        .wrap_output(
            age::armor::ArmoredWriter::wrap_output(&mut encrypted, age::armor::Format::AsciiArmor)
                .map_err(StoreError::Write)?,
        )
        .map_err(|e| StoreError::Encrypt(format!("{}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| StoreError::Encrypt(format!("{}", e)))?;
    let armored = writer
        .finish()
        .map_err(|e| StoreError::Encrypt(format!("{}", e)))?;
    armored
        .finish()
        .map_err(|e| StoreError::Encrypt(format!("armor: {}", e)))?;

    trace!(ciphertext_len = encrypted.len(), "encrypted");

    String::from_utf8(encrypted).map_err(|e| StoreError::Encrypt(format!("UTF-8 error: {}", e)))
}

fn decrypt(armored: &str, password: &str) -> Result<Zeroizing<String>, StoreError> {
    trace!(ciphertext_len = armored.len(), "decrypting");

    let identity = age::scrypt::Identity::new(SecretString::from(password.to_string()));
    let reader = age::armor::ArmoredReader::new(armored.as_bytes());
    let decryptor =
        age::Decryptor::new(reader).map_err(|e| StoreError::Decrypt(format!("{}", e)))?;

    let mut decrypted = Zeroizing::new(Vec::new());
    let mut reader = decryptor
        .decrypt(std::iter::once(&identity as &dyn age::Identity))
        .map_err(|e| StoreError::Decrypt(format!("{}", e)))?;
    reader
        .read_to_end(&mut decrypted)
        .map_err(|e| StoreError::Decrypt(format!("{}", e)))?;

    trace!(plaintext_len = decrypted.len(), "decrypted");

    String::from_utf8(decrypted.to_vec())
        .map(Zeroizing::new)
        .map_err(|e| StoreError::Decrypt(format!("UTF-8 error: {}", e)))
}
