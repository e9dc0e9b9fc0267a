//! # Reqwest Transport Implementation
//!
//! This module contains the [`TransportReqwest`] struct.
//! It is used to send requests to the newsdesk API using the [`reqwest`] crate.
//!
//! It requires the [`reqwest` feature] to be enabled.
//!
//! [`TransportReqwest`]: ./struct.TransportReqwest.html
//! [`reqwest`]: https://docs.rs/reqwest
//! [`reqwest` feature]: ../index.html#features

use std::{collections::HashMap, time::Duration};

use bytes::Bytes;
use log::info;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    StatusCode,
};

use crate::{
    core::{
        utils::encoding::encode_query, NewsDeskError, Transport, TransportMethod,
        TransportRequest, TransportResponse,
    },
    dx::newsdesk_client::{NewsDeskClientBuilder, NewsDeskClientConfigBuilder},
};

/// Origin of a backend started with its defaults.
pub const DEFAULT_HOSTNAME: &str = "http://localhost:5001";

/// This struct is used to send requests to the newsdesk API using the
/// [`reqwest`] crate. It is used as the transport type for the
/// [`NewsDeskClient`].
///
/// [`reqwest`]: https://docs.rs/reqwest
/// [`NewsDeskClient`]: ../dx/newsdesk_client/type.NewsDeskClient.html
#[derive(Clone, Debug)]
pub struct TransportReqwest {
    reqwest_client: reqwest::Client,

    /// The hostname to use for requests.
    /// It is used as the base URL for all requests.
    ///
    /// It defaults to `http://localhost:5001`.
    /// # Examples
    /// ```
    /// use newsdesk::transport::TransportReqwest;
    ///
    /// let transport = {
    ///    let mut transport = TransportReqwest::default();
    ///    transport.hostname = "https://news.example.com".into();
    ///    transport
    /// };
    /// ```
    pub hostname: String,
}

#[async_trait::async_trait]
impl Transport for TransportReqwest {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
        let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
        info!("{} {}", request.method, request_url);
        let headers = prepare_headers(&request.headers)?;
        let builder = match request.method {
            TransportMethod::Get => self.reqwest_client.get(request_url),
            TransportMethod::Post => self.reqwest_client.post(request_url),
        };
        let builder = match request.body {
            Some(body) => builder.body(body),
            None => builder,
        };
        let builder = match request.timeout {
            0 => builder,
            timeout => builder.timeout(Duration::from_millis(timeout)),
        };

        let result = builder
            .headers(headers)
            .send()
            .await
            .map_err(|e| NewsDeskError::transport_error(e.to_string()))?;

        let status = result.status();
        let response_headers = collect_headers(result.headers());
        result
            .bytes()
            .await
            .map_err(|e| NewsDeskError::transport_error(e.to_string()))
            .and_then(|bytes| create_result(status, response_headers, bytes))
    }
}

impl Default for TransportReqwest {
    fn default() -> Self {
        Self {
            reqwest_client: reqwest::Client::default(),
            hostname: DEFAULT_HOSTNAME.into(),
        }
    }
}

impl TransportReqwest {
    /// Create a new [`TransportReqwest`] instance.
    ///
    /// It provides a default [`reqwest`] client using [`reqwest::Client::default()`]
    /// and a default hostname of `http://localhost:5001`.
    ///
    /// # Example
    /// ```
    /// use newsdesk::transport::TransportReqwest;
    ///
    /// let transport = TransportReqwest::new();
    /// ```
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    pub fn new() -> Self {
        Self::default()
    }

    /// set the custom hostname for request
    pub fn set_hostname<S>(&mut self, hostname: S)
    where
        S: Into<String>,
    {
        self.hostname = hostname.into();
    }
}

fn prepare_headers(request_headers: &HashMap<String, String>) -> Result<HeaderMap, NewsDeskError> {
    HeaderMap::try_from(request_headers)
        .map_err(|err| NewsDeskError::transport_error(err.to_string()))
}

fn collect_headers(headers: &HeaderMap<HeaderValue>) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect()
}

fn prepare_url(hostname: &str, path: &str, query_params: &HashMap<String, String>) -> String {
    let hostname = hostname.trim_end_matches('/');
    if query_params.is_empty() {
        return format!("{}{}", hostname, path);
    }

    format!("{}{}?{}", hostname, path, encode_query(query_params))
}

fn create_result(
    status: StatusCode,
    headers: HashMap<String, String>,
    body: Bytes,
) -> Result<TransportResponse, NewsDeskError> {
    let response = TransportResponse {
        status: status.as_u16(),
        headers,
        body: (!body.is_empty()).then(|| body.to_vec()),
    };

    if status.is_success() {
        Ok(response)
    } else {
        Err(NewsDeskError::Transport {
            details: format!("Request failed with status code {}", status.as_u16()),
            response: Some(Box::new(response)),
        })
    }
}

impl NewsDeskClientBuilder {
    /// Creates a new [`NewsDeskClientConfigBuilder`] with the default
    /// [`TransportReqwest`] transport.
    ///
    /// The default hostname is `http://localhost:5001`. Use
    /// [`NewsDeskClientBuilder::with_transport`] with a configured
    /// [`TransportReqwest`] to talk to another origin.
    ///
    /// # Examples
    /// ```
    /// use newsdesk::NewsDeskClientBuilder;
    ///
    /// let client = NewsDeskClientBuilder::with_reqwest_transport()
    ///     .with_request_timeout(30_000)
    ///     .build();
    /// ```
    pub fn with_reqwest_transport() -> NewsDeskClientConfigBuilder<TransportReqwest> {
        NewsDeskClientBuilder::with_transport(TransportReqwest::new())
    }
}

#[cfg(feature = "blocking")]
pub mod blocking {
    //! # Reqwest Transport Blocking Implementation
    //!
    //! This module contains the blocking [`TransportReqwest`] struct.
    //!
    //! It requires the [`reqwest` and `blocking` feature] to be enabled.
    //!
    //! [`TransportReqwest`]: ./struct.TransportReqwest.html

    use std::time::Duration;

    use log::info;

    use crate::{
        core::{NewsDeskError, TransportMethod, TransportRequest, TransportResponse},
        dx::newsdesk_client::{NewsDeskClientBuilder, NewsDeskClientConfigBuilder},
        transport::reqwest::{
            collect_headers, create_result, prepare_headers, prepare_url, DEFAULT_HOSTNAME,
        },
    };

    /// This struct is used to send blocking requests to the newsdesk API using
    /// the [`reqwest`] crate.
    ///
    /// [`reqwest`]: https://docs.rs/reqwest
    #[derive(Clone, Debug)]
    pub struct TransportReqwest {
        reqwest_client: reqwest::blocking::Client,

        /// The hostname to use for requests.
        /// It is used as the base URL for all requests.
        ///
        /// It defaults to `http://localhost:5001`.
        pub hostname: String,
    }

    impl crate::core::blocking::Transport for TransportReqwest {
        fn send(&self, request: TransportRequest) -> Result<TransportResponse, NewsDeskError> {
            let request_url = prepare_url(&self.hostname, &request.path, &request.query_parameters);
            info!("{} {}", request.method, request_url);
            let headers = prepare_headers(&request.headers)?;
            let builder = match request.method {
                TransportMethod::Get => self.reqwest_client.get(request_url),
                TransportMethod::Post => self.reqwest_client.post(request_url),
            };
            let builder = match request.body {
                Some(body) => builder.body(body),
                None => builder,
            };
            let builder = match request.timeout {
                0 => builder,
                timeout => builder.timeout(Duration::from_millis(timeout)),
            };

            let result = builder
                .headers(headers)
                .send()
                .map_err(|e| NewsDeskError::transport_error(e.to_string()))?;

            let status = result.status();
            let response_headers = collect_headers(result.headers());
            result
                .bytes()
                .map_err(|e| NewsDeskError::transport_error(e.to_string()))
                .and_then(|bytes| create_result(status, response_headers, bytes))
        }
    }

    impl Default for TransportReqwest {
        fn default() -> Self {
            Self {
                reqwest_client: reqwest::blocking::Client::default(),
                hostname: DEFAULT_HOSTNAME.into(),
            }
        }
    }

    impl TransportReqwest {
        /// Create a new blocking [`TransportReqwest`] instance.
        ///
        /// # Example
        /// ```
        /// use newsdesk::transport::reqwest::blocking::TransportReqwest;
        ///
        /// let transport = TransportReqwest::new();
        /// ```
        pub fn new() -> Self {
            Self::default()
        }

        /// set the custom hostname for request
        pub fn set_hostname<S>(&mut self, hostname: S)
        where
            S: Into<String>,
        {
            self.hostname = hostname.into();
        }
    }

    impl NewsDeskClientBuilder {
        /// Creates a new [`NewsDeskClientConfigBuilder`] with the default
        /// blocking [`TransportReqwest`] transport.
        ///
        /// # Examples
        /// ```
        /// use newsdesk::NewsDeskClientBuilder;
        ///
        /// let client = NewsDeskClientBuilder::with_reqwest_blocking_transport().build();
        /// ```
        pub fn with_reqwest_blocking_transport() -> NewsDeskClientConfigBuilder<TransportReqwest> {
            NewsDeskClientBuilder::with_blocking_transport(TransportReqwest::new())
        }
    }

}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;
    use wiremock::matchers::{header, method, path as path_matcher, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport(server: &MockServer) -> TransportReqwest {
        TransportReqwest {
            reqwest_client: reqwest::Client::default(),
            hostname: server.uri(),
        }
    }

    #[test_case("http://localhost:5001", "/api/crawl" => "http://localhost:5001/api/crawl" ; "plain origin")]
    #[test_case("http://localhost:5001/", "/api/crawl" => "http://localhost:5001/api/crawl" ; "origin with trailing slash")]
    fn join_hostname_and_path(hostname: &str, path: &str) -> String {
        prepare_url(hostname, path, &HashMap::new())
    }

    #[test]
    fn append_encoded_query() {
        let params = HashMap::from([("keyword".to_string(), "climate change".to_string())]);

        assert_eq!(
            prepare_url("http://localhost:5001", "/api/articles", &params),
            "http://localhost:5001/api/articles?keyword=climate%20change"
        );
    }

    #[tokio::test]
    async fn send_via_get_method() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher("/api/articles"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"code\":0}"))
            .expect(1)
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/api/articles".into(),
            query_parameters: [
                ("page".into(), "2".into()),
                ("page_size".into(), "10".into()),
            ]
            .into(),
            method: TransportMethod::Get,
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, Some(b"{\"code\":0}".to_vec()));
    }

    #[tokio::test]
    async fn send_via_post_method_without_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_matcher("/api/crawl"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"code\":0}"))
            .expect(1)
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/api/crawl".into(),
            method: TransportMethod::Post,
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn send_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path_matcher("/api/articles/1"))
            .and(header("k", "v"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/api/articles/1".into(),
            method: TransportMethod::Get,
            headers: HashMap::from([("k".into(), "v".into())]),
            ..Default::default()
        };

        let response = transport(&server).send(request).await.unwrap();

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn return_err_with_response_on_error_status() {
        let server = MockServer::start().await;
        let body = "{\"code\":1,\"message\":\"not found\"}";

        Mock::given(method("GET"))
            .and(path_matcher("/api/articles/404"))
            .respond_with(ResponseTemplate::new(404).set_body_string(body))
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/api/articles/404".into(),
            method: TransportMethod::Get,
            ..Default::default()
        };

        let error = transport(&server).send(request).await.unwrap_err();

        assert_eq!(error.status(), Some(404));
        match error {
            NewsDeskError::Transport {
                response: Some(response),
                ..
            } => assert_eq!(response.body, Some(body.as_bytes().to_vec())),
            other => panic!("Unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn return_err_on_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path_matcher("/api/articles/3/translate"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let request = TransportRequest {
            path: "/api/articles/3/translate".into(),
            method: TransportMethod::Post,
            timeout: 50,
            ..Default::default()
        };

        let error = transport(&server).send(request).await.unwrap_err();

        assert!(matches!(
            error,
            NewsDeskError::Transport { response: None, .. }
        ));
    }
}
