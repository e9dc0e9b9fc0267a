//! # Transport Providers Module
//!
//! This module contains the Transport Providers that can be used by [`NewsDeskClient`].
//! It is intended to be used by the [`newsdesk`] crate.
//!
//! [`NewsDeskClient`]: ../dx/newsdesk_client/type.NewsDeskClient.html
//! [`newsdesk`]: ../index.html

#[cfg(feature = "reqwest")]
pub use self::reqwest::TransportReqwest;
#[cfg(feature = "reqwest")]
pub mod reqwest;

pub use middleware::NewsDeskMiddleware;
pub mod middleware;
