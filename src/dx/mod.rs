//! # Newsdesk Developer Experience
//!
//! This module provides the client and the request builders for the
//! newsdesk API.
//! It is intended to be used by the [`newsdesk`] crate.
//!
//! [`newsdesk`]: ../index.html

pub mod articles;
pub mod jobs;

pub use envelope::ApiEnvelope;
pub mod envelope;

#[cfg(feature = "reqwest")]
pub use newsdesk_client::NewsDeskClient;
pub use newsdesk_client::{
    NewsDeskClientBuilder, NewsDeskClientInstance, NewsDeskConfig, NewsDeskGenericClient,
};
pub mod newsdesk_client;
