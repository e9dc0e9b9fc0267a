use cucumber::{given, then, World};
use newsdesk::{
    core::{NewsDeskError, TransportResponse},
    transport::TransportReqwest,
    NewsDeskClient, NewsDeskClientBuilder,
};
use wiremock::{matchers::any, Mock, MockServer, Request, ResponseTemplate};

#[derive(World)]
pub struct NewsDeskWorld {
    pub server: Option<MockServer>,
    pub response_status: u16,
    pub response_body: String,
    pub last_result: Option<Result<TransportResponse, NewsDeskError>>,
}

impl Default for NewsDeskWorld {
    fn default() -> Self {
        NewsDeskWorld {
            server: None,
            response_status: 200,
            response_body: "{\"code\":0,\"message\":\"ok\"}".into(),
            last_result: None,
        }
    }
}

impl std::fmt::Debug for NewsDeskWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsDeskWorld")
            .field("server", &self.server.as_ref().map(MockServer::uri))
            .field("response_status", &self.response_status)
            .field("response_body", &self.response_body)
            .field("last_result", &self.last_result)
            .finish()
    }
}

impl NewsDeskWorld {
    fn server(&self) -> &MockServer {
        self.server
            .as_ref()
            .expect("Mock server should be started before the scenario")
    }

    /// Mount the configured response and build a client pointing at the
    /// mock server.
    pub async fn get_client(&self) -> NewsDeskClient {
        Mock::given(any())
            .respond_with(
                ResponseTemplate::new(self.response_status)
                    .set_body_string(self.response_body.clone()),
            )
            .mount(self.server())
            .await;

        let transport = {
            let mut transport = TransportReqwest::default();
            transport.set_hostname(self.server().uri());
            transport
        };
        NewsDeskClientBuilder::with_transport(transport)
            .build()
            .unwrap()
    }

    pub async fn last_request(&self) -> Request {
        let mut requests = self
            .server()
            .received_requests()
            .await
            .expect("Request recording should be enabled");
        assert_eq!(requests.len(), 1, "Expected exactly one request");
        requests.remove(0)
    }

    pub fn last_result(&self) -> &Result<TransportResponse, NewsDeskError> {
        self.last_result
            .as_ref()
            .expect("Operation should be executed before checking its result")
    }
}

#[given(expr = "the backend responds with status {int}")]
fn backend_responds_with_status(world: &mut NewsDeskWorld, status: u16) {
    world.response_status = status;
}

#[given(expr = "the backend responds with body {string}")]
fn backend_responds_with_body(world: &mut NewsDeskWorld, body: String) {
    world.response_body = body;
}

#[then(expr = "a {word} request is sent to {string}")]
async fn request_is_sent_to(world: &mut NewsDeskWorld, method: String, path: String) {
    let request = world.last_request().await;

    assert_eq!(request.method.to_string(), method);
    assert_eq!(request.url.path(), path);
}

#[then("the request has no query")]
async fn request_has_no_query(world: &mut NewsDeskWorld) {
    let request = world.last_request().await;

    assert_eq!(request.url.query(), None);
}

#[then(expr = "the request query has {word} set to {string}")]
async fn request_query_has(world: &mut NewsDeskWorld, key: String, value: String) {
    let request = world.last_request().await;

    assert!(
        request
            .url
            .query_pairs()
            .any(|(k, v)| k == key.as_str() && v == value.as_str()),
        "Query '{:?}' has no {key}={value}",
        request.url.query()
    );
}

#[then("the request has no body")]
async fn request_has_no_body(world: &mut NewsDeskWorld) {
    let request = world.last_request().await;

    assert!(request.body.is_empty());
}

#[then("I receive successful response")]
fn i_receive_successful_response(world: &mut NewsDeskWorld) {
    assert!(world.last_result().is_ok());
}

#[then(expr = "the response body is {string}")]
fn response_body_is(world: &mut NewsDeskWorld, body: String) {
    let response = world.last_result().as_ref().unwrap();

    assert_eq!(response.body.as_deref(), Some(body.as_bytes()));
}

#[then(expr = "I receive an error with status {int}")]
fn i_receive_error_with_status(world: &mut NewsDeskWorld, status: u16) {
    let error = world.last_result().as_ref().unwrap_err();

    assert!(matches!(error, NewsDeskError::Transport { .. }));
    assert_eq!(error.status(), Some(status));
}
