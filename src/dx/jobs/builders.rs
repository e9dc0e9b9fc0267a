//! # Job trigger request builder.
//!
//! The [`TriggerJobRequestBuilder`] lets you start a backend [`Job`].

use derive_builder::Builder;
use log::debug;

use crate::{
    core::{NewsDeskError, Transport, TransportMethod, TransportRequest, TransportResponse},
    dx::{jobs::Job, newsdesk_client::NewsDeskClientInstance},
};

/// The job trigger request builder.
///
/// Sends a `POST` without body or query parameters. The response is the
/// backend acknowledgement, the job itself is not awaited.
///
/// This struct is used by the [`crawl_news`], [`fetch_content`],
/// [`translate`], [`fetch_and_translate`] and [`polish`] methods of the
/// [`NewsDeskClient`].
///
/// [`crawl_news`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.crawl_news
/// [`fetch_content`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.fetch_content
/// [`translate`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.translate
/// [`fetch_and_translate`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.fetch_and_translate
/// [`polish`]: ../../newsdesk_client/struct.NewsDeskClientInstance.html#method.polish
/// [`NewsDeskClient`]: ../../newsdesk_client/type.NewsDeskClient.html
#[derive(Builder, Debug)]
#[builder(pattern = "owned", build_fn(vis = "pub(in crate::dx::jobs)"))]
pub struct TriggerJobRequest<T> {
    /// Current client which can provide transportation to perform the request.
    #[builder(field(vis = "pub(in crate::dx::jobs)"), setter(custom))]
    pub(in crate::dx::jobs) newsdesk_client: NewsDeskClientInstance<T>,

    /// Job to start.
    #[builder(field(vis = "pub(in crate::dx::jobs)"), setter(custom))]
    pub(in crate::dx::jobs) job: Job,
}

impl<T> TriggerJobRequestBuilder<T> {
    /// Job this request starts.
    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    fn request(self) -> Result<TriggerJobRequest<T>, NewsDeskError> {
        self.build()
            .map_err(|err| NewsDeskError::ClientInitialization {
                details: err.to_string(),
            })
    }
}

impl<T> TriggerJobRequest<T> {
    /// Create transport request from the request builder.
    pub(in crate::dx::jobs) fn transport_request(&self) -> TransportRequest {
        debug!("Trigger job: {}", self.job);

        TransportRequest {
            path: self.job.path(),
            method: TransportMethod::Post,
            body: None,
            ..Default::default()
        }
    }
}

impl<T> TriggerJobRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call asynchronous request.
    pub async fn execute(self) -> Result<TransportResponse, NewsDeskError> {
        let request = self.request()?;
        let transport_request = request.transport_request();
        request
            .newsdesk_client
            .transport
            .send(transport_request)
            .await
    }
}

#[cfg(feature = "blocking")]
impl<T> TriggerJobRequestBuilder<T>
where
    T: crate::core::blocking::Transport,
{
    /// Build and call synchronous request.
    ///
    /// No deadline is added on top of the transport: a blocking transport must
    /// honour [`TransportRequest::timeout`] or this call can block forever.
    pub fn execute_blocking(self) -> Result<TransportResponse, NewsDeskError> {
        let request = self.request()?;
        let transport_request = request.transport_request();
        request.newsdesk_client.transport.send(transport_request)
    }
}
