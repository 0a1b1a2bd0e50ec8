//! Adapters for the external collaborators
//!
//! Concrete implementations of the `core::ports` traits:
//!
//! - [`remote`] - HTTP document store client
//! - [`email`] - OTP mail dispatch (with simulation mode)
//! - [`insight`] - generative-text advisory client
//!
//! All adapters use a blocking HTTP client with explicit request timeouts;
//! a hung collaborator call can never hang a local mutation, which has
//! already committed by the time any adapter runs.

pub mod email;
pub mod insight;
pub mod remote;
