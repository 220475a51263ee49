//! Gateway-fronted demo service library.
//!
//! Two endpoints under `/api`: a public one returning fixed text and a private
//! one echoing the identity an upstream gateway injected as a header. Recent
//! exchanges are kept in memory and exposed under `/actuator/httptrace`.

pub mod admin;
pub mod api;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod trace;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
