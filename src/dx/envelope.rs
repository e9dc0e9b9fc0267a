//! Response envelope of the newsdesk API.

/// Envelope wrapping every newsdesk API response body.
///
/// `code` is `0` on success. Failures carry a non-zero code and a `message`
/// describing the problem. The body is only decoded on demand, with
/// [`TransportResponse::json`].
///
/// # Example
/// ```
/// use newsdesk::{ApiEnvelope, ArticlePage};
///
/// let envelope: ApiEnvelope<ArticlePage> =
///     serde_json::from_str(r#"{"code":1,"message":"database is locked"}"#).unwrap();
///
/// assert!(!envelope.is_ok());
/// assert!(envelope.data.is_none());
/// ```
///
/// [`TransportResponse::json`]: ../../core/transport_response/struct.TransportResponse.html#method.json
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEnvelope<T> {
    /// Result code, `0` means success.
    pub code: i64,

    /// Human readable status message.
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,

    /// Payload of the response.
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the backend reported success.
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// Payload of a successful response.
    pub fn into_data(self) -> Option<T> {
        self.is_ok().then_some(self.data).flatten()
    }
}
