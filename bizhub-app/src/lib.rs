//! BizHub App - hosting-application layer
//!
//! Everything the UI host needs around the client: durable session
//! storage, route handling for session expiry, per-page view state, and
//! the presentation helpers (formatting, status styling).

pub mod format;
pub mod pages;
pub mod router;
pub mod session_file;
pub mod status;

pub use router::{Navigator, Route};
pub use session_file::FileSessionStore;
