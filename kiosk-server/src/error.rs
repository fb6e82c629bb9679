//! Upstream fetch error types.

/// Errors from fetching and decoding an upstream API response.
///
/// Shared by the weather and transit clients. The distinction that matters
/// downstream is whether the upstream answered with an error status
/// (`Upstream`), answered successfully but with a shape we do not
/// understand (`Schema`), or could not be reached at all (`Http`).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("upstream error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Response body did not match the expected schema
    #[error("schema validation error: {message}")]
    Schema {
        message: String,
        body: Option<String>,
    },
}

impl FetchError {
    /// Whether this failure was the request timing out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Http(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FetchError::Upstream {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "upstream error 502: Bad Gateway");

        let err = FetchError::Schema {
            message: "missing field `main`".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("schema validation error"));
        assert!(err.to_string().contains("missing field `main`"));
        assert!(!err.is_timeout());
    }
}
