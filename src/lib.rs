// ABOUTME: Library root for kivotos - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod export;
pub mod runtime;
pub mod types;
