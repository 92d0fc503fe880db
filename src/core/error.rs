//! # Error types
//!
//! This module contains the error types for the [`submitter`] crate.
//!
//! [`submitter`]: ../index.html

use snafu::Snafu;

/// Submitter error type
///
/// This type is used to represent errors that can occur while a submission is
/// prepared or sent. It is used as the error type for the [`Result`] type.
///
/// # Examples
/// ```
/// use submitter::core::SubmitterError;
///
/// fn foo() -> Result<(), SubmitterError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   SubmitterError::Transport { .. } => println!("Transport error"),
///   SubmitterError::InvalidRequest { .. } => println!("Invalid request"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum SubmitterError {
    /// this error is returned when the transport layer fails and no response
    /// has been received
    #[snafu(display("Transport error: {}", details))]
    Transport {
        /// Message which describes transport failure reason.
        details: String,
    },

    /// this error is returned when a response body can't be parsed
    #[snafu(display("Deserialization error: {}", details))]
    Deserialization {
        /// Message which describes deserialization failure reason.
        details: String,
    },

    /// this error is returned when the submission description breaks one of
    /// its constraints
    #[snafu(display("Invalid request: {}", details))]
    InvalidRequest {
        /// Message which describes which constraint has been violated.
        details: String,
    },

    /// this error is returned when the initialization of client fails
    #[snafu(display("Client initialization error: {}", details))]
    ClientInitialization {
        /// Message which describes client initialization failure reason.
        details: String,
    },
}

impl SubmitterError {
    /// Create [`SubmitterError::Transport`] from anything which can be
    /// displayed.
    pub(crate) fn transport<E: std::fmt::Display>(error: E) -> Self {
        Self::Transport {
            details: error.to_string(),
        }
    }

    /// Create [`SubmitterError::InvalidRequest`].
    pub(crate) fn invalid_request<S: Into<String>>(details: S) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    /// Whether the error has been reported by the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn display_details() {
        let error = SubmitterError::transport("connection refused");

        assert_eq!(error.to_string(), "Transport error: connection refused");
        assert!(error.is_transport());
    }

    #[test]
    fn not_treat_invalid_request_as_transport() {
        let error = SubmitterError::invalid_request("empty target url");

        assert!(!error.is_transport());
        assert_eq!(error.to_string(), "Invalid request: empty target url");
    }
}
