//! Recorded HTTP exchanges.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header name (lowercase) to every value sent under it, in arrival order.
pub type CapturedHeaders = BTreeMap<String, Vec<String>>;

/// Summary of one completed exchange. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// When the request arrived, in milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    pub request: TracedRequest,
    pub response: TracedResponse,
    /// Time from arrival until the response head was produced.
    pub time_taken_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracedRequest {
    pub method: String,
    pub uri: String,
    pub path: String,
    pub remote_address: Option<String>,
    pub headers: CapturedHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracedResponse {
    pub status: u16,
    pub headers: CapturedHeaders,
}
