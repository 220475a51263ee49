//! Rendering of the public and private response bodies.
//!
//! Pure functions over a header map; nothing here touches the transport,
//! so the handlers stay thin and everything testable lives in this file.

use axum::http::header::InvalidHeaderName;
use axum::http::{HeaderMap, HeaderName};

use crate::api::error::ApiError;
use crate::config::{CredentialConfig, MissingCredentialPolicy};

/// Body of `GET /api/public`, without the optional newline.
pub const PUBLIC_MESSAGE: &str = "It is public.";

const PRIVATE_SUFFIX: &str = ", it is private.";

/// What to render when the credential header is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingCredential {
    /// Substitute this text for the absent value.
    Placeholder(String),
    /// Fail with [`ApiError::MissingCredential`].
    Reject,
}

impl Default for MissingCredential {
    fn default() -> Self {
        MissingCredential::Placeholder("null".to_string())
    }
}

/// Renders response bodies for one credential header convention.
#[derive(Debug, Clone)]
pub struct Greeting {
    header: HeaderName,
    trailing_newline: bool,
    missing: MissingCredential,
}

impl Greeting {
    /// Read `header`, no trailing newline, `null` placeholder.
    pub fn new(header: HeaderName) -> Self {
        Self {
            header,
            trailing_newline: false,
            missing: MissingCredential::default(),
        }
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub fn with_missing(mut self, missing: MissingCredential) -> Self {
        self.missing = missing;
        self
    }

    /// Build from the `credential` config section.
    pub fn from_config(config: &CredentialConfig) -> Result<Self, InvalidHeaderName> {
        let header = HeaderName::from_bytes(config.header.as_bytes())?;
        let missing = match config.on_missing {
            MissingCredentialPolicy::Placeholder => {
                MissingCredential::Placeholder(config.placeholder.clone())
            }
            MissingCredentialPolicy::Reject => MissingCredential::Reject,
        };

        Ok(Self::new(header)
            .with_trailing_newline(config.trailing_newline)
            .with_missing(missing))
    }

    /// The header consulted by [`Greeting::private_message`].
    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// `It is public.`
    pub fn public_message(&self) -> String {
        self.finish(PUBLIC_MESSAGE.to_string())
    }

    /// `<credential>, it is private.`
    pub fn private_message(&self, headers: &HeaderMap) -> Result<String, ApiError> {
        let identity = match credential_value(headers, &self.header) {
            Some(value) => value,
            None => match &self.missing {
                MissingCredential::Placeholder(text) => text.clone(),
                MissingCredential::Reject => {
                    return Err(ApiError::MissingCredential(self.header.clone()))
                }
            },
        };

        Ok(self.finish(format!("{identity}{PRIVATE_SUFFIX}")))
    }

    fn finish(&self, mut body: String) -> String {
        if self.trailing_newline {
            body.push('\n');
        }
        body
    }
}

/// Value of `name` in `headers`, taking the last one when repeated.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub fn credential_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get_all(name)
        .iter()
        .last()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
