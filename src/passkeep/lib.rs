//! # Passkeep Architecture
//!
//! Passkeep is a **UI-agnostic password library**. The CLI binary is a thin
//! client; all logic lives behind the API facade and could serve any other
//! front end unchanged.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles exit codes    │
//! │  - The ONLY place that knows about stdout/stderr           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (generator, strength, store/)               │
//! │  - Pool building and sampling, strength scoring             │
//! │  - Abstract CredentialStore trait                           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, generator, strength, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## A note on security
//!
//! Credentials are persisted as **cleartext JSON**. Passkeep reproduces the
//! storage behavior of the tool it replaces; it is not an encrypted secrets
//! manager and should not be treated as one.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`generator`]: Character pool construction and password sampling
//! - [`strength`]: Password strength classification
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Credential`, `GenerationOptions`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;
pub mod strength;
