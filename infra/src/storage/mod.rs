//! Storage module for durable verification records
//!
//! This module provides the file-backed implementation of the core
//! [`TokenStore`](verimail_core::TokenStore) contract.

pub mod file_store;


pub use file_store::FileTokenStore;
