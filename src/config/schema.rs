//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Which header carries the caller identity and how it is rendered.
    pub credential: CredentialConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// In-memory HTTP exchange history.
    pub trace: TraceConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Credential header configuration.
///
/// The header is injected by an upstream gateway and trusted verbatim.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CredentialConfig {
    /// Header to read on the private route (matched case-insensitively).
    pub header: String,

    /// Append `\n` to every response body.
    pub trailing_newline: bool,

    /// What to do when the header is absent.
    pub on_missing: MissingCredentialPolicy,

    /// Text rendered in place of an absent header under the placeholder policy.
    pub placeholder: String,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            header: "X-Credential-Identifier".to_string(),
            trailing_newline: false,
            on_missing: MissingCredentialPolicy::Placeholder,
            placeholder: "null".to_string(),
        }
    }
}

/// Behaviour of the private route when the credential header is absent.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingCredentialPolicy {
    /// Render the placeholder text and answer 200.
    #[default]
    Placeholder,
    /// Answer 400 Bad Request.
    Reject,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// HTTP trace history configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TraceConfig {
    /// Record exchanges and expose `/actuator/httptrace`.
    pub enabled: bool,

    /// Number of exchanges retained; the oldest is evicted first.
    pub capacity: usize,

    /// Header names never copied into a trace entry.
    pub excluded_headers: Vec<String>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: 100,
            excluded_headers: vec![
                "authorization".to_string(),
                "cookie".to_string(),
                "set-cookie".to_string(),
            ],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format of log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}
