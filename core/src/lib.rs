//! # Verimail Core
//!
//! Core domain layer for the Verimail backend.
//! This crate contains the verification record entity, the token store
//! contract, the verification service and the error types shared by every
//! layer. It performs no I/O of its own and emits no log events; storage and
//! delivery are reached only through the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
