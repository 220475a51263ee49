//! HTTP trace history.
//!
//! # Data Flow
//! ```text
//! request ─▶ recorder.rs (capture method, uri, headers, start time)
//!              → inner routes
//!         ◀─ recorder.rs (capture status, headers, elapsed)
//!              → store.rs (append, evict oldest)
//!
//! GET /actuator/httptrace ─▶ admin (store snapshot, oldest first)
//! ```

pub mod entry;
pub mod recorder;
pub mod store;

pub use entry::{CapturedHeaders, TraceEntry, TracedRequest, TracedResponse};
pub use recorder::record_exchange;
pub use store::TraceStore;
