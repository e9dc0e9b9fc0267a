//! Deserialization of Rust data structures.
//!
//! This module contains the `Deserializer` trait which is used to implement
//! deserialization of newsdesk API responses.

use super::NewsDeskError;

/// Trait for deserializing Rust data structures.
///
/// Nothing in the request pipeline calls it on its own. Callers opt in through
/// [`TransportResponse::deserialize_with`].
///
/// To implement this trait, you must provide a `deserialize` method that
/// takes a `&[u8]` and returns a `Result<T, NewsDeskError>`.
///
/// # Examples
/// ```
/// use newsdesk::core::{Deserializer, NewsDeskError};
///
/// struct LengthDeserializer;
///
/// impl Deserializer<usize> for LengthDeserializer {
///    fn deserialize(&self, bytes: &[u8]) -> Result<usize, NewsDeskError> {
///         Ok(bytes.len())
///    }
/// }
/// ```
///
/// [`TransportResponse::deserialize_with`]: ../transport_response/struct.TransportResponse.html#method.deserialize_with
pub trait Deserializer<T> {
    /// Deserialize a `&[u8]` into a `Result<T, NewsDeskError>`.
    fn deserialize(&self, bytes: &[u8]) -> Result<T, NewsDeskError>;
}
