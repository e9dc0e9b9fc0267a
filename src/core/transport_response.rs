//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response from a request to the
//! newsdesk API. It is used as the response type for the [`Transport`] trait.
//!
//! [`Transport`]: ../transport/trait.Transport.html

use std::collections::HashMap;

use crate::core::{Deserializer, NewsDeskError};

/// This struct is used to represent the response from a request to the
/// newsdesk API. It is used as the response type for the [`Transport`] trait.
///
/// Request builders hand it back exactly as the transport produced it.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// status code of the response
    pub status: u16,

    /// headers of the response
    pub headers: HashMap<String, String>,

    /// body of the response
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    /// Whether the status code is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body with the provided [`Deserializer`].
    ///
    /// # Errors
    /// Returns [`NewsDeskError::Deserialization`] when there is no body or the
    /// deserializer rejects it.
    pub fn deserialize_with<T, D>(&self, deserializer: &D) -> Result<T, NewsDeskError>
    where
        D: Deserializer<T>,
    {
        let body = self
            .body
            .as_deref()
            .ok_or_else(|| NewsDeskError::Deserialization {
                details: "Response has no body".into(),
            })?;

        deserializer.deserialize(body)
    }

    /// Decode the JSON body into `T`.
    ///
    /// # Example
    /// ```
    /// use newsdesk::{core::TransportResponse, ApiEnvelope, CrawlSummary};
    ///
    /// let response = TransportResponse {
    ///     status: 200,
    ///     body: Some(br#"{"code":0,"data":{"count":3}}"#.to_vec()),
    ///     ..Default::default()
    /// };
    /// let envelope: ApiEnvelope<CrawlSummary> = response.json().unwrap();
    /// assert_eq!(envelope.data.unwrap().count, 3);
    /// ```
    #[cfg(feature = "serde")]
    pub fn json<T>(&self) -> Result<T, NewsDeskError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.deserialize_with(&crate::providers::deserialization_serde::DeserializerSerde)
    }
}
