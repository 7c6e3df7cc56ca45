use super::CredentialStore;
use crate::error::{PassKeepError, Result};
use crate::model::Credential;

/// In-memory credential store for tests.
///
/// Mirrors the file store's semantics: insertion order is preserved,
/// overwrites keep the entry's position, keys match case-sensitively.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Vec<(String, Credential)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryStore {
    fn get(&self, site: &str) -> Result<Credential> {
        self.entries
            .iter()
            .find(|(s, _)| s == site)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| PassKeepError::NotFound(site.to_string()))
    }

    fn put(&mut self, site: &str, credential: &Credential) -> Result<()> {
        if let Some(entry) = self.entries.iter_mut().find(|(s, _)| s == site) {
            entry.1 = credential.clone();
        } else {
            self.entries.push((site.to_string(), credential.clone()));
        }
        Ok(())
    }

    fn delete(&mut self, site: &str) -> Result<()> {
        match self.entries.iter().position(|(s, _)| s == site) {
            Some(i) => {
                self.entries.remove(i);
                Ok(())
            }
            None => Err(PassKeepError::NotFound(site.to_string())),
        }
    }

    fn list(&self) -> Result<Vec<(String, Credential)>> {
        Ok(self.entries.clone())
    }
}
