//! Error types for subnet calculations and report output.

use thiserror::Error;

/// Errors raised while validating input or writing a report.
#[derive(Debug, Error)]
pub enum SubnetError {
    /// The IP address is not four dot-separated decimal octets in 0-255.
    #[error("invalid IP address: {0:?}")]
    InvalidAddressFormat(String),

    /// The mask string can not be read as four octets in 0-255.
    #[error("invalid subnet mask: {0:?}")]
    InvalidMaskFormat(String),

    /// The mask bits are not a run of ones followed by zeros.
    /// Only raised when masks are checked with [`crate::MaskPolicy::Reject`].
    #[error("subnet mask is not contiguous: {0}")]
    NonContiguousMask(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SubnetError {
    /// True for errors caused by the address/mask input rather than I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            SubnetError::InvalidAddressFormat(_)
                | SubnetError::InvalidMaskFormat(_)
                | SubnetError::NonContiguousMask(_)
        )
    }

    /// Short message shown to the end user instead of the full error chain.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubnetError::InvalidAddressFormat(_) => "Please enter a valid IP address.",
            SubnetError::InvalidMaskFormat(_) => "Please enter a valid subnet mask.",
            SubnetError::NonContiguousMask(_) => {
                "The subnet mask must be a contiguous run of 1-bits."
            }
            SubnetError::Config(_) => "Invalid configuration.",
            SubnetError::Io(_) | SubnetError::Json(_) => "Could not read input or write the result.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_input() {
        let err = SubnetError::InvalidAddressFormat("999.1.1.1".to_string());
        assert_eq!(err.to_string(), "invalid IP address: \"999.1.1.1\"");
        assert_eq!(err.user_message(), "Please enter a valid IP address.");
        assert!(err.is_input_error());
    }

    #[test]
    fn test_io_from() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: SubnetError = io.into();
        assert!(matches!(err, SubnetError::Io(_)));
        assert!(!err.is_input_error());
        assert_eq!(err.to_string(), "I/O error: pipe");
    }
}
