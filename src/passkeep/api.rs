//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the
//! single entry point for all passkeep operations, regardless of the UI in
//! front of it.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over CredentialStore
//!
//! `PassKeepApi<S: CredentialStore>` is generic over the storage backend:
//! - Production: `PassKeepApi<FileStore>`
//! - Testing: `PassKeepApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::GenerationOptions;
use crate::store::CredentialStore;

/// The main API facade for passkeep operations.
///
/// Generic over `CredentialStore` to allow different storage backends.
/// All UI clients should interact through this API.
pub struct PassKeepApi<S: CredentialStore> {
    store: S,
}

impl<S: CredentialStore> PassKeepApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Generate a password and score its strength. Does not touch the store.
    pub fn generate(&self, options: &GenerationOptions) -> Result<commands::CmdResult> {
        commands::generate::run(options)
    }

    /// Score an existing password.
    pub fn score(&self, password: &str) -> Result<commands::CmdResult> {
        commands::score::run(password)
    }

    /// Save or overwrite the credential for a site.
    pub fn save(&mut self, site: &str, email: &str, password: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, site, email, password)
    }

    pub fn get(&self, site: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, site)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn delete(&mut self, site: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, site)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
