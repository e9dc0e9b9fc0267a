//! # Transport module
//!
//! Contract between the request builders and the HTTP layer: the async
//! [`Transport`] trait and its blocking flavour.

use super::{transport_response::TransportResponse, NewsDeskError, TransportRequest};

/// This trait is used to send requests to the newsdesk API.
///
/// Implement it for your own types, or enable the `reqwest` feature for a
/// ready-made one. Implementations own connection handling, encoding and
/// timeout enforcement (see [`TransportRequest::timeout`]). A response with a
/// non-success status should be reported as [`NewsDeskError::Transport`] with
/// the response attached.
///
/// # Examples
/// ```
/// use newsdesk::core::{Transport, TransportRequest, TransportResponse, NewsDeskError};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to the newsdesk API.
    ///
    /// # Errors
    /// Should return an [`NewsDeskError::Transport`] if the request cannot be sent.
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, NewsDeskError>;
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Blocking transport module
    //!
    //! This module contains the blocking flavour of the [`Transport`] trait.

    use crate::core::{NewsDeskError, TransportRequest, TransportResponse};

    /// Blocking counterpart of the async [`Transport`] trait.
    ///
    /// Nothing bounds a blocking `send` from the outside, so implementations
    /// must enforce [`TransportRequest::timeout`] themselves.
    ///
    /// [`Transport`]: crate::core::Transport
    ///
    /// # Examples
    /// ```
    /// use newsdesk::core::{blocking::Transport, TransportRequest, TransportResponse, NewsDeskError};
    ///
    /// struct MyTransport;
    ///
    /// impl Transport for MyTransport {
    ///    fn send(&self, req: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
    ///         // Send your request here
    ///
    ///         Ok(TransportResponse::default())
    ///    }
    /// }
    /// ```
    pub trait Transport {
        /// Send a request to the newsdesk API.
        ///
        /// # Errors
        /// Should return an [`NewsDeskError::Transport`] if the request cannot be sent.
        fn send(&self, req: TransportRequest) -> Result<TransportResponse, NewsDeskError>;
    }
}
