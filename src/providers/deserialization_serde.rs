//! Serde implementation for newsdesk [`Deserializer`] trait.
//!
//! This module provides a `serde_json` deserializer for newsdesk API
//! responses.
//!
//! # Examples
//! ```
//! use newsdesk::{core::Deserializer, providers::deserialization_serde::DeserializerSerde};
//!
//! #[derive(serde::Deserialize, Debug, PartialEq)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo: Foo = DeserializerSerde.deserialize(b"{\"bar\":\"baz\"}").unwrap();
//! assert_eq!(foo, Foo { bar: "baz".to_string() });
//! ```
//!
//! [`Deserializer`]: ../../core/trait.Deserializer.html

use crate::core::{Deserializer, NewsDeskError};

/// Serde implementation for newsdesk [`Deserializer`] trait.
///
/// This struct implements the [`Deserializer`] trait for the [`serde`] crate.
/// It is used by [`TransportResponse::json`] to decode the JSON envelope
/// returned by the newsdesk API.
///
/// [`Deserializer`]: ../../core/trait.Deserializer.html
/// [`serde`]: https://crates.io/crates/serde
/// [`TransportResponse::json`]: ../../core/transport_response/struct.TransportResponse.html#method.json
#[derive(Debug, Clone, Copy, Default)]
pub struct DeserializerSerde;

impl<T> Deserializer<T> for DeserializerSerde
where
    T: serde::de::DeserializeOwned,
{
    fn deserialize(&self, bytes: &[u8]) -> Result<T, NewsDeskError> {
        serde_json::from_slice(bytes).map_err(|e| NewsDeskError::Deserialization {
            details: e.to_string(),
        })
    }
}
