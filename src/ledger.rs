//! Reads and writes the ledger file that keeps transactions across restarts.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, Transaction};

/// The JSON file the transactions are mirrored to.
///
/// Every save rewrites the whole file from the current transaction list,
/// there are no partial updates.
#[derive(Debug)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    /// Create a ledger that reads and writes `path`.
    ///
    /// The file does not have to exist yet, it is created on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the ledger file lives on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `transactions` to the ledger file, replacing its contents.
    ///
    /// # Errors
    /// This function will return an [Error::SaveFailed] if the file could not
    /// be written, for example because the disk is full or the directory is
    /// read-only. The in-memory data is unaffected either way.
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(transactions)
            .map_err(|error| Error::SaveFailed(error.to_string()))?;

        std::fs::write(&self.path, json).map_err(|error| Error::SaveFailed(error.to_string()))
    }

    /// Read the transactions out of the ledger file.
    ///
    /// A missing file is normal on first run and produces an empty list. A
    /// file that cannot be read or parsed also produces an empty list, with
    /// a warning in the logs.
    pub fn load(&self) -> Vec<Transaction> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(error) => {
                tracing::warn!(
                    "could not read the ledger file {}: {error}, starting with an empty ledger",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(transactions) => transactions,
            Err(error) => {
                tracing::warn!(
                    "ignoring malformed ledger file {}: {error}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }
}
