//! veritrust - A CLI tool for NGO staff identity management and verification
//!
//! This library provides the core functionality for registering staff,
//! managing the status lifecycle of their digital identity cards, and
//! resolving scanned QR payloads into an append-only verification log.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod session;
pub mod store;
