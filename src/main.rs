//! veritrust - A CLI tool for NGO staff identity management and verification
//!
//! Administrators register staff and manage identity status, staff hold a
//! digital identity card, and verifiers scan QR payloads to confirm active
//! status. Every matched scan lands in an append-only verification log.

/// Main entry point for the veritrust CLI
fn main() {
    if let Err(e) = veritrust::cli::run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
