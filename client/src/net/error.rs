//! Failure classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every fetch resolves to `Result<_, ApiError>`; list sections and inventory
//! panels render the error text in place, and a 401 additionally expires the
//! session.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why a REST call did not produce the expected payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: HTTP {status}")]
    Status { status: u16 },
    /// The body did not match the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser, where no HTTP client is compiled in.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map an HTTP status to `Ok` for 2xx and [`ApiError::Status`] otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any status outside `200..300`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) { Ok(()) } else { Err(Self::Status { status }) }
    }

    /// True when the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 })
    }
}
