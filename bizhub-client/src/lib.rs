//! BizHub Client - HTTP client for the BizHub REST API
//!
//! Provides the session-aware HTTP client and per-resource gateways.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{ClientEvent, MemorySessionStore, Session, SessionStore};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, RegisterRequest};
