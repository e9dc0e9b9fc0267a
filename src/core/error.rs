//! # Error types
//!
//! This module contains the error types for the [`newsdesk`] crate.
//!
//! [`newsdesk`]: ../index.html

use snafu::Snafu;

use crate::core::TransportResponse;

/// Newsdesk error type
///
/// This type is used to represent errors that can occur while talking to the
/// newsdesk API. It is used as the error type for the [`Result`] type.
///
/// Request dispatching never produces errors of its own: every
/// [`NewsDeskError::Transport`] returned by an `execute` call is the one the
/// transport produced.
///
/// # Examples
/// ```
/// use newsdesk::core::NewsDeskError;
///
/// fn foo() -> Result<(), NewsDeskError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   NewsDeskError::Transport { .. } => println!("Transport error"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum NewsDeskError {
    /// this error is returned when the transport layer fails
    ///
    /// Covers network errors, timeouts and non-success HTTP statuses. For the
    /// latter the received response is attached.
    #[snafu(display("Transport error: {details}"))]
    Transport {
        /// Reason of the failure.
        details: String,

        /// Response received from the server, if any.
        response: Option<Box<TransportResponse>>,
    },

    /// this error is returned when the deserialization of the response fails
    #[snafu(display("Deserialization error: {details}"))]
    Deserialization {
        /// Reason of the failure.
        details: String,
    },

    /// this error is returned when the initialization of client fails
    #[snafu(display("Client initialization error: {details}"))]
    ClientInitialization {
        /// Reason of the failure.
        details: String,
    },
}

impl NewsDeskError {
    /// Create a transport error without an attached response.
    pub fn transport_error<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::Transport {
            details: details.into(),
            response: None,
        }
    }

    /// HTTP status code of the response attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport {
                response: Some(response),
                ..
            } => Some(response.status),
            _ => None,
        }
    }
}
