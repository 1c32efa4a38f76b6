//! HTTP Basic credential parsing
//!
//! Parses `Authorization: Basic <base64>` header values into a username and
//! password pair. The payload uses the standard base64 alphabet and must
//! decode to UTF-8 text with a `:` between the two parts.
//!
//! # Example
//!
//! ```
//! use tasknest_shared::auth::basic::Credentials;
//!
//! let header = Credentials::new("homer", "duffbeer").to_header_value();
//! let parsed = Credentials::from_header(&header).unwrap();
//! assert_eq!(parsed.username, "homer");
//! assert_eq!(parsed.password, "duffbeer");
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Error type for Basic header parsing
#[derive(Debug, thiserror::Error)]
pub enum BasicAuthError {
    /// Header does not carry the Basic scheme
    #[error("Expected Basic authorization scheme")]
    NotBasic,

    /// Payload is not valid base64
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// Decoded payload is not UTF-8 text
    #[error("Credentials are not valid UTF-8")]
    InvalidUtf8,

    /// Decoded payload has no `:` separator
    #[error("Missing ':' separator in credentials")]
    MissingSeparator,
}

/// Credential pair carried by an `Authorization: Basic` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login name
    pub username: String,

    /// Plaintext password
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Parses an `Authorization` header value into a credential pair
    ///
    /// The decoded payload is split at the first `:`, so passwords may
    /// contain colons but usernames may not.
    ///
    /// # Errors
    ///
    /// Returns a [`BasicAuthError`] when the scheme is not Basic, the payload
    /// is not base64, the decoded bytes are not UTF-8, or the separator is
    /// missing
    pub fn from_header(value: &str) -> Result<Self, BasicAuthError> {
        let encoded = value
            .strip_prefix("Basic ")
            .ok_or(BasicAuthError::NotBasic)?;

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|e| BasicAuthError::InvalidBase64(e.to_string()))?;

        let decoded = String::from_utf8(decoded).map_err(|_| BasicAuthError::InvalidUtf8)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(BasicAuthError::MissingSeparator)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Renders the pair as an `Authorization` header value
    pub fn to_header_value(&self) -> String {
        let payload = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(payload))
    }
}
