//! Sitegen Shared Library
//!
//! Wire types for the public generation API, shared between the service
//! and client crates.

pub mod types;

pub use types::{GenerateRequest, GenerationResponse, HealthStatus};
