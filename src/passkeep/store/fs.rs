use super::CredentialStore;
use crate::error::{PassKeepError, Result};
use crate::model::Credential;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File-backed credential store.
///
/// The whole store is one JSON document; every mutation loads it, applies
/// one change and writes it back. Entry order is preserved as read from the
/// file, and new entries append at the end.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl ToString) -> PassKeepError {
        PassKeepError::CorruptStore {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    /// Load the full document. An absent file reads as an empty mapping; an
    /// unparsable file or a non-object root is an error, never empty.
    fn load_document(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = fs::read_to_string(&self.path).map_err(PassKeepError::Persistence)?;
        let root: Value = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        match root {
            Value::Object(map) => Ok(map),
            _ => Err(self.corrupt("root is not an object")),
        }
    }

    /// Write the full document back, pretty-printed with a 4-space indent.
    ///
    /// The document is serialized to a temp file in the destination's
    /// directory and renamed into place, so a failed write never leaves a
    /// previously valid store truncated.
    fn save_document(&self, document: &Map<String, Value>) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        document.serialize(&mut ser)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(PassKeepError::Persistence)?;
        tmp.write_all(&buf).map_err(PassKeepError::Persistence)?;
        tmp.persist(&self.path)
            .map_err(|e| PassKeepError::Persistence(e.error))?;
        Ok(())
    }

    fn decode(&self, site: &str, value: Value) -> Result<Credential> {
        serde_json::from_value(value)
            .map_err(|e| self.corrupt(format!("entry for {site} is malformed: {e}")))
    }
}

impl CredentialStore for FileStore {
    fn get(&self, site: &str) -> Result<Credential> {
        let document = self.load_document()?;
        match document.get(site) {
            Some(value) => self.decode(site, value.clone()),
            None => Err(PassKeepError::NotFound(site.to_string())),
        }
    }

    fn put(&mut self, site: &str, credential: &Credential) -> Result<()> {
        let mut document = self.load_document()?;
        document.insert(site.to_string(), serde_json::to_value(credential)?);
        self.save_document(&document)
    }

    fn delete(&mut self, site: &str) -> Result<()> {
        let mut document = self.load_document()?;
        // shift_remove keeps the remaining entries in stored order
        if document.shift_remove(site).is_none() {
            return Err(PassKeepError::NotFound(site.to_string()));
        }
        self.save_document(&document)
    }

    fn list(&self) -> Result<Vec<(String, Credential)>> {
        let document = self.load_document()?;
        document
            .into_iter()
            .map(|(site, value)| {
                let credential = self.decode(&site, value)?;
                Ok((site, credential))
            })
            .collect()
    }
}
