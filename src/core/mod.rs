//! Core domain logic for veritrust
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (StaffMember, VerificationLog, Role)
//! - `services/` - Business logic (auth gates, status lifecycle, scan resolution)
//! - `ports/` - Trait definitions for external collaborators

pub mod models;
pub mod ports;
pub mod services;
