//! Shared types for BizHub
//!
//! Common types used across the client and app crates: the API response
//! envelope, auth DTOs, entity models, and reference types.

pub mod client;
pub mod models;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{LoginRequest, LoginResponse, RegisterRequest};
pub use response::ApiResponse;
pub use types::EntityRef;
