//! Newsdesk client module
//!
//! This module contains the [`NewsDeskClient`] struct.
//! It's used to send requests to the newsdesk API.
//! It's intended to be used by the [`newsdesk`] crate.
//!
//! [`newsdesk`]: ../index.html

use std::{ops::Deref, sync::Arc};

use derive_builder::Builder;
use log::info;

use crate::{core::NewsDeskError, transport::middleware::NewsDeskMiddleware};

#[cfg(feature = "reqwest")]
use crate::transport::TransportReqwest;

/// Default path prefix of every API resource.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Default request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 60_000;

/// Newsdesk client
///
/// Client for the newsdesk API. The client is transport-layer-agnostic, so you
/// can use any transport layer that implements the [`Transport`] trait.
///
/// You can create clients using the [`NewsDeskClientBuilder::with_transport`]
/// method.
///
/// To see available methods, please refer to the [`NewsDeskClientInstance`]
/// documentation.
///
/// # Examples
/// ```
/// use newsdesk::NewsDeskClientBuilder;
///
/// # use newsdesk::core::{Transport, TransportRequest, TransportResponse, NewsDeskError};
/// # struct MyTransport;
/// # #[async_trait::async_trait]
/// # impl Transport for MyTransport {
/// #     async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # fn main() -> Result<(), NewsDeskError> {
/// // note that MyTransport must implement the `Transport` trait
/// let client = NewsDeskClientBuilder::with_transport(MyTransport)
///    .with_base_path("/api")
///    .with_request_timeout(60_000)
///    .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # Synchronization
///
/// Client is thread-safe and can be shared between threads. You don't need to
/// wrap it in `Arc` or `Mutex` because it is already wrapped in `Arc` and its
/// configuration never changes after [`build`].
///
/// [`Transport`]: ../core/trait.Transport.html
/// [`build`]: struct.NewsDeskClientConfigBuilder.html#method.build
pub type NewsDeskGenericClient<T> = NewsDeskClientInstance<NewsDeskMiddleware<T>>;

/// Newsdesk client
///
/// Client for the newsdesk API which uses [`reqwest`] as a transport layer.
///
/// # Examples
/// ```
/// use newsdesk::NewsDeskClientBuilder;
///
/// // note that `with_reqwest_transport` requires `reqwest` feature
/// // to be enabled (default)
/// # fn main() -> Result<(), newsdesk::core::NewsDeskError> {
/// let client = NewsDeskClientBuilder::with_reqwest_transport().build()?;
/// # Ok(())
/// # }
/// ```
///
/// [`reqwest`]: https://crates.io/crates/reqwest
#[cfg(feature = "reqwest")]
pub type NewsDeskClient = NewsDeskGenericClient<TransportReqwest>;

/// Newsdesk client raw instance.
///
/// This struct contains the actual client state.
/// It shouldn't be used directly. Use [`NewsDeskGenericClient`] or
/// [`NewsDeskClient`] instead.
#[derive(Debug)]
pub struct NewsDeskClientInstance<T> {
    pub(crate) inner: Arc<NewsDeskClientRef<T>>,
}

impl<T> Deref for NewsDeskClientInstance<T> {
    type Target = NewsDeskClientRef<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> Clone for NewsDeskClientInstance<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> NewsDeskClientInstance<T> {
    /// Configuration the client has been built with.
    pub fn config(&self) -> &NewsDeskConfig {
        &self.config
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`NewsDeskClient`].
///
/// Not intended to be used directly. Use [`NewsDeskClient`] instead.
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "NewsDeskClientConfigBuilder",
    build_fn(private, name = "build_internal", validate = "Self::validate"),
    setter(prefix = "with")
)]
pub struct NewsDeskClientRef<T> {
    /// Transport layer
    #[builder(setter(custom))]
    pub(crate) transport: T,

    /// Configuration
    #[builder(setter(custom))]
    pub(crate) config: NewsDeskConfig,
}

impl<T> NewsDeskClientConfigBuilder<T> {
    /// Path prefix of every API resource.
    ///
    /// Defaults to [`DEFAULT_BASE_PATH`]. Must be empty or start with `/`.
    ///
    /// It returns [`NewsDeskClientConfigBuilder`] that you can use to set the
    /// configuration for the client.
    pub fn with_base_path<S>(mut self, base_path: S) -> Self
    where
        S: Into<String>,
    {
        if let Some(configuration) = self.config.as_mut() {
            configuration.base_path = base_path.into();
        }

        self
    }

    /// Time in milliseconds after which any request fails.
    ///
    /// Defaults to [`DEFAULT_REQUEST_TIMEOUT`]. Must be greater than zero.
    ///
    /// It returns [`NewsDeskClientConfigBuilder`] that you can use to set the
    /// configuration for the client.
    pub fn with_request_timeout(mut self, timeout: u64) -> Self {
        if let Some(configuration) = self.config.as_mut() {
            configuration.transport.request_timeout = timeout;
        }

        self
    }

    fn validate(&self) -> Result<(), String> {
        let Some(config) = &self.config else {
            return Ok(());
        };

        if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
            return Err(format!(
                "Base path must start with '/', got '{}'",
                config.base_path
            ));
        }

        if config.transport.request_timeout == 0 {
            return Err("Request timeout must be greater than zero".into());
        }

        Ok(())
    }

    /// Build a [`NewsDeskClient`] from the builder
    pub fn build(self) -> Result<NewsDeskClientInstance<NewsDeskMiddleware<T>>, NewsDeskError> {
        self.build_internal()
            .map_err(|err| NewsDeskError::ClientInitialization {
                details: err.to_string(),
            })
            .map(|pre_build| {
                info!(
                    "Client Configuration: \n base_path: {}\n request_timeout: {} ms",
                    pre_build.config.base_path, pre_build.config.transport.request_timeout
                );

                NewsDeskClientRef {
                    transport: NewsDeskMiddleware {
                        base_path: pre_build.config.base_path.trim_end_matches('/').into(),
                        request_timeout: pre_build.config.transport.request_timeout,
                        transport: pre_build.transport,
                    },
                    config: pre_build.config,
                }
            })
            .map(|client| NewsDeskClientInstance {
                inner: Arc::new(client),
            })
    }
}

/// Transport specific configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfiguration {
    /// Timeout in milliseconds after which any request will be cancelled.
    pub request_timeout: u64,
}

impl Default for TransportConfiguration {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Newsdesk configuration
///
/// Configuration for [`NewsDeskClient`].
/// This struct separates the configuration from the actual client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDeskConfig {
    /// Path prefix of every API resource.
    pub base_path: String,

    /// Transport configuration.
    pub transport: TransportConfiguration,
}

impl Default for NewsDeskConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.into(),
            transport: Default::default(),
        }
    }
}

/// Newsdesk builder for [`NewsDeskClient`]
///
/// Builder for [`NewsDeskClient`] that is a first step to create a client.
/// The client is transport-layer-agnostic, so you can use any transport layer
/// that implements the [`Transport`] trait.
///
/// The builder provides methods to set the transport layer and returns the next
/// step of the builder with the remaining parameters.
///
/// [`Transport`]: ../core/trait.Transport.html
#[derive(Debug, Clone)]
pub struct NewsDeskClientBuilder;

impl NewsDeskClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// Returns [`NewsDeskClientConfigBuilder`] with the default configuration.
    pub fn with_transport<T>(transport: T) -> NewsDeskClientConfigBuilder<T>
    where
        T: crate::core::Transport,
    {
        NewsDeskClientConfigBuilder {
            transport: Some(transport),
            config: Some(NewsDeskConfig::default()),
        }
    }

    /// Set the blocking transport layer for the client.
    ///
    /// Returns [`NewsDeskClientConfigBuilder`] with the default configuration.
    #[cfg(feature = "blocking")]
    pub fn with_blocking_transport<T>(transport: T) -> NewsDeskClientConfigBuilder<T>
    where
        T: crate::core::blocking::Transport,
    {
        NewsDeskClientConfigBuilder {
            transport: Some(transport),
            config: Some(NewsDeskConfig::default()),
        }
    }
}
