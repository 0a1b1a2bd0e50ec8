//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between core business logic and the
//! three external collaborators: the remote document store, the OTP mailer,
//! and the insight summarizer.
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod insight;
mod mailer;
mod remote_store;

pub use insight::InsightProvider;
pub use mailer::OtpMailer;
pub use remote_store::RemoteStore;
