//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → tower-http TraceLayer (per-request spans)
//!     → trace module (in-memory exchange history)
//!
//! Consumers:
//!     → Log aggregation (stdout, pretty or JSON)
//!     → /actuator/httptrace
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows through all log lines of a request

pub mod logging;

pub use logging::init_logging;
