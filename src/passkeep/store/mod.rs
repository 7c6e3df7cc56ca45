//! # Storage Layer
//!
//! This module defines the storage abstraction for passkeep. The
//! [`CredentialStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON document (`data.json` by default), root object mapping
//!     site name to `{ "email": ..., "password": ... }`
//!   - Every mutation is a read-modify-write of the whole document
//!   - Writes go through a temp file and an atomic rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Consistency
//!
//! Implementations must keep the stored view and the caller-visible view in
//! agreement after every successful operation, preserve entry order across
//! operations, and refuse to operate on a document they cannot parse rather
//! than treating it as empty.

use crate::error::Result;
use crate::model::Credential;

pub mod fs;
pub mod memory;

/// Abstract interface for credential storage.
///
/// Sites are case-sensitive exact-match keys; `put` on an existing site
/// overwrites its record.
pub trait CredentialStore {
    /// Get the credential stored for a site
    fn get(&self, site: &str) -> Result<Credential>;

    /// Insert or overwrite the credential for a site
    fn put(&mut self, site: &str, credential: &Credential) -> Result<()>;

    /// Remove the credential for a site
    fn delete(&mut self, site: &str) -> Result<()>;

    /// All stored (site, credential) pairs, in stored order
    fn list(&self) -> Result<Vec<(String, Credential)>>;
}
