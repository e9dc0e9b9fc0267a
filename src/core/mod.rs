//! # Newsdesk Core
//!
//! Core functionality of the newsdesk client.
//!
//! This module contains the transport contract shared by the request builders
//! of the [`dx`] module and the transport implementations.
//!
//! [`dx`]: ../dx/index.html

pub use error::NewsDeskError;
pub mod error;

#[cfg(feature = "blocking")]
pub use transport::blocking;
pub use transport::Transport;
pub mod transport;

pub use transport_request::{TransportMethod, TransportRequest};
pub mod transport_request;

pub use transport_response::TransportResponse;
pub mod transport_response;

pub use deserializer::Deserializer;
pub mod deserializer;

pub mod utils;
