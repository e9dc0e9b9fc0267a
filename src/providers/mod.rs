//! # Providers module
//!
//! This module contains the Providers that can be used by [`NewsDeskClient`].
//! It is intended to be used by the [`newsdesk`] crate.
//!
//! [`NewsDeskClient`]: ../dx/newsdesk_client/type.NewsDeskClient.html
//! [`newsdesk`]: ../index.html

#[cfg(feature = "serde")]
pub mod deserialization_serde;
