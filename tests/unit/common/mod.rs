//! Common test utilities shared across unit tests
//!
//! - `fixtures.rs` - Test data builders and mock port implementations
