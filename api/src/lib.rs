//! # Verimail API
//!
//! HTTP surface over the verification service: issuing tokens by email and
//! redeeming them through a link.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;

pub use app::create_app;
pub use routes::verification::AppState;
