use std::cell::RefCell;
use std::rc::Rc;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

type UnauthorizedHook = Rc<dyn Fn()>;

/// Thin wrapper over `reqwest::Client` carrying the default bearer
/// credential and the authorization-expiry hook. Clones share both cells, so
/// the interceptors composed at construction time apply to every call site.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    bearer: Rc<RefCell<Option<String>>>,
    on_unauthorized: Rc<RefCell<Option<UnauthorizedHook>>>,
}

pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            bearer: Rc::new(RefCell::new(None)),
            on_unauthorized: Rc::new(RefCell::new(None)),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            bearer: Rc::new(RefCell::new(None)),
            on_unauthorized: Rc::new(RefCell::new(None)),
        }
    }

    /// Default outgoing credential; attached to every request while set.
    pub fn set_bearer(&self, token: Option<String>) {
        *self.bearer.borrow_mut() = token;
    }

    pub fn bearer(&self) -> Option<String> {
        self.bearer.borrow().clone()
    }

    /// Composed once at construction time; fires for any 401 observed
    /// anywhere in the application, regardless of the call site.
    pub fn set_unauthorized_hook(&self, hook: impl Fn() + 'static) {
        *self.on_unauthorized.borrow_mut() = Some(Rc::new(hook));
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let base_url = self.resolved_base_url().await;
        self.client.request(method, format!("{}{}", base_url, path))
    }

    pub(crate) async fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path).await
    }

    pub(crate) async fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path).await
    }

    pub(crate) async fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path).await
    }

    pub(crate) async fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path).await
    }

    fn attach_bearer(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self.bearer.borrow().clone();
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn notify_unauthorized(&self) {
        let hook = self.on_unauthorized.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    async fn dispatch(&self, request: reqwest::Request) -> Result<RawResponse, ApiError> {
        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = test_routes::lookup(request.url()) {
            return RawResponse::from_mock(responder.respond(&request)?);
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("Failed to read response: {}", e)))?
            .to_vec();
        Ok(RawResponse { status, body })
    }

    /// Single chokepoint for every request: attaches the default bearer on
    /// the way out and runs the authorization-expiry hook on the way in.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<RawResponse, ApiError> {
        let request = self
            .attach_bearer(builder)
            .build()
            .map_err(|e| ApiError::network(format!("Invalid request: {}", e)))?;
        let raw = self.dispatch(request).await?;
        if raw.status == StatusCode::UNAUTHORIZED {
            self.notify_unauthorized();
        }
        Ok(raw)
    }

    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let raw = self.send(builder).await?;
        if raw.status.is_success() {
            serde_json::from_slice(&raw.body)
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            Err(ApiError::from_response(raw.status.as_u16(), &raw.body))
        }
    }

    pub(crate) async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let raw = self.send(builder).await?;
        if raw.status.is_success() {
            Ok(())
        } else {
            Err(ApiError::from_response(raw.status.as_u16(), &raw.body))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_routes::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
impl RawResponse {
    fn from_mock(mock: MockResponse) -> Result<Self, ApiError> {
        let status = StatusCode::from_u16(mock.status)
            .map_err(|_| ApiError::parse("invalid mock status"))?;
        let body = serde_json::to_vec(&mock.body).map_err(|e| ApiError::parse(e.to_string()))?;
        Ok(Self { status, body })
    }
}

/// In-process responder registry keyed by request origin; `send` consults it
/// before touching the network so host tests stay hermetic.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_routes {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex, OnceLock};

    use crate::api::types::ApiError;

    pub trait TestResponder: Send + Sync {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError>;
    }

    #[derive(Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: serde_json::Value,
    }

    impl MockResponse {
        pub fn json(status: u16, body: serde_json::Value) -> Self {
            Self { status, body }
        }
    }

    fn registry() -> &'static Mutex<HashMap<String, Arc<dyn TestResponder>>> {
        static REGISTRY: OnceLock<Mutex<HashMap<String, Arc<dyn TestResponder>>>> =
            OnceLock::new();
        REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
    }

    pub fn register_mock(url: String, responder: Arc<dyn TestResponder>) {
        if let Ok(parsed) = reqwest::Url::parse(&url) {
            if let Ok(mut map) = registry().lock() {
                map.insert(origin_of(&parsed), responder);
            }
        }
    }

    pub(super) fn lookup(url: &reqwest::Url) -> Option<Arc<dyn TestResponder>> {
        registry().lock().ok()?.get(&origin_of(url)).cloned()
    }

    fn origin_of(url: &reqwest::Url) -> String {
        format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default())
    }
}
