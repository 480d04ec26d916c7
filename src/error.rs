//! Dashboard Error Types
//!
//! Failures are handled at the call site that produced them: logged to the
//! console and surfaced as a transient toast message. Nothing here is fatal.

use thiserror::Error;

/// Errors produced by the dashboard's own flows
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// Transport failure, non-success HTTP status, or an unparseable body
    #[error("Failed to fetch {endpoint} data")]
    Network { endpoint: String, detail: String },

    /// Rejected user input
    #[error("{0}")]
    Validation(String),
}

impl DashboardError {
    /// Detail string for console diagnostics (the toast only names the endpoint)
    pub fn detail(&self) -> &str {
        match self {
            Self::Network { detail, .. } => detail,
            Self::Validation(msg) => msg,
        }
    }
}

/// Validate a free-text question before it is sent to the backend.
///
/// Whitespace-only input is rejected without a network round-trip.
pub fn validate_question(raw: &str) -> Result<String, DashboardError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(DashboardError::Validation("Question cannot be empty".to_string()))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_names_endpoint() {
        let err = DashboardError::Network {
            endpoint: "chart-data".to_string(),
            detail: "HTTP status 500".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to fetch chart-data data");
        assert_eq!(err.detail(), "HTTP status 500");
    }

    #[test]
    fn test_validate_question_rejects_whitespace() {
        assert!(validate_question("").is_err());
        assert!(validate_question("   \t\n").is_err());
    }

    #[test]
    fn test_validate_question_trims() {
        assert_eq!(validate_question("  why reels?  ").unwrap(), "why reels?");
    }
}
