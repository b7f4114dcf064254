//! Gateway error types

use thiserror::Error;

/// Errors from the recipe service gateway. All of these mean "no usable
/// recipe"; the caller decides whether to fall back to demo data.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("recipe {0} not found")]
    NotFound(i64),

    #[error("recipe service rejected the request (401) - check the API token")]
    Unauthorized,

    #[error("recipe service returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("could not reach the recipe service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("recipe service returned malformed data: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// Whether demo-data fallback is a sensible response to this error
    pub fn is_retryable_offline(&self) -> bool {
        !matches!(self, GatewayError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_not_retryable() {
        assert!(!GatewayError::NotFound(3).is_retryable_offline());
        assert!(GatewayError::Unauthorized.is_retryable_offline());
        assert!(GatewayError::Http {
            status: 500,
            message: "boom".to_string()
        }
        .is_retryable_offline());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GatewayError::NotFound(7).to_string(),
            "recipe 7 not found"
        );
        let err = GatewayError::Http {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "recipe service returned HTTP 503: unavailable"
        );
    }
}
