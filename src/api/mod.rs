//! Public and private endpoints under `/api`.
//!
//! # Data Flow
//! ```text
//! GET /api/public  → handlers.rs → greeting.rs (fixed text)
//! GET /api/private → handlers.rs → greeting.rs (credential header → text)
//!                                      ↳ error.rs (reject policy only)
//! ```
//!
//! # Design Decisions
//! - The credential header is trusted verbatim; no verification happens here
//! - Rendering is a pure function of the header map and the active `Greeting`
//! - The active `Greeting` is swapped atomically on config reload

pub mod error;
pub mod greeting;
pub mod handlers;

pub use error::ApiError;
pub use greeting::{credential_value, Greeting, MissingCredential, PUBLIC_MESSAGE};
pub use handlers::router;

/// Path prefix all API routes are mounted under.
pub const API_PREFIX: &str = "/api";
