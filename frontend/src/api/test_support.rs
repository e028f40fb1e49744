pub mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use reqwest::Method;
    use serde_json::Value;

    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::types::ApiError;

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    /// In-process stand-in for the backend: stubbed routes plus a recording
    /// of every request the client actually issued, so tests can assert both
    /// payloads and the *absence* of calls.
    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    #[derive(Default)]
    struct Inner {
        routes: Vec<Route>,
        requests: Vec<RecordedRequest>,
    }

    struct Route {
        method: Method,
        path: String,
        status: u16,
        body: Value,
    }

    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub query: Option<String>,
        pub authorization: Option<String>,
        pub body: Option<Vec<u8>>,
    }

    impl RecordedRequest {
        pub fn body_text(&self) -> String {
            self.body
                .as_ref()
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default()
        }
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            let server = Self {
                inner: Arc::new(Mutex::new(Inner::default())),
                base: format!("http://mock-{}", id),
            };
            register_mock(server.base.clone(), Arc::new(server.clone()));
            server
        }

        /// Base URL to hand to `ApiClient::new_with_base_url`.
        pub fn base_url(&self) -> String {
            self.base.clone()
        }

        /// Later stubs shadow earlier ones for the same method + path.
        pub fn stub(&self, method: Method, path: &str, status: u16, body: Value) {
            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path: path.to_string(),
                status,
                body,
            });
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").requests.clone()
        }

        pub fn request_count(&self) -> usize {
            self.inner.lock().expect("mock lock").requests.len()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let mut inner = self.inner.lock().map_err(|_| ApiError::parse("mock lock"))?;

            inner.requests.push(RecordedRequest {
                method: request.method().clone(),
                path: request.url().path().to_string(),
                query: request.url().query().map(|q| q.to_string()),
                authorization: request
                    .headers()
                    .get(reqwest::header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .map(|value| value.to_string()),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .map(|bytes| bytes.to_vec()),
            });

            inner
                .routes
                .iter()
                .rev()
                .find(|route| {
                    route.method == *request.method() && route.path == request.url().path()
                })
                .map(|route| MockResponse::json(route.status, route.body.clone()))
                .ok_or_else(|| {
                    ApiError::parse(format!(
                        "No mock for {} {}",
                        request.method(),
                        request.url().path()
                    ))
                })
        }
    }
}
