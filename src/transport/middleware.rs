//! # Newsdesk middleware
//!
//! Transport decorator which the client puts in front of the user-provided
//! transport.

use log::debug;

use crate::core::{NewsDeskError, Transport, TransportRequest, TransportResponse};

/// Transport decorator applied to every request issued by a client.
///
/// It prefixes request paths with the configured base path and stamps the
/// configured timeout on the request. With the `tokio` feature enabled and a
/// tokio runtime driving the call, it also bounds the whole `send` with that
/// timeout, so a transport which never resolves still fails. Outside a tokio
/// runtime the wrapped transport alone enforces the timeout.
///
/// The blocking flavour never adds a deadline of its own: blocking transports
/// must honour [`TransportRequest::timeout`].
///
/// Responses and errors of the wrapped transport are returned untouched.
#[derive(Debug)]
pub struct NewsDeskMiddleware<T> {
    /// Wrapped transport.
    pub transport: T,

    /// Prefix for every request path, without trailing slash.
    pub base_path: String,

    /// Request timeout in milliseconds.
    pub request_timeout: u64,
}

impl<T> NewsDeskMiddleware<T> {
    fn prepare(&self, mut req: TransportRequest) -> TransportRequest {
        req.path = format!("{}{}", self.base_path, req.path);
        req.timeout = self.request_timeout;
        debug!("{} {}", req.method, req.path);
        req
    }
}

#[async_trait::async_trait]
impl<T> Transport for NewsDeskMiddleware<T>
where
    T: Transport,
{
    async fn send(&self, req: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
        let req = self.prepare(req);

        #[cfg(feature = "tokio")]
        if tokio::runtime::Handle::try_current().is_ok() {
            let deadline = std::time::Duration::from_millis(self.request_timeout);
            return tokio::time::timeout(deadline, self.transport.send(req))
                .await
                .map_err(|_| {
                    NewsDeskError::transport_error(format!(
                        "Request timed out after {} ms",
                        self.request_timeout
                    ))
                })?;
        }

        self.transport.send(req).await
    }
}

#[cfg(feature = "blocking")]
impl<T> crate::core::blocking::Transport for NewsDeskMiddleware<T>
where
    T: crate::core::blocking::Transport,
{
    fn send(&self, req: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
        self.transport.send(self.prepare(req))
    }
}
