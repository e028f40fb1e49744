use std::rc::Rc;

use leptos::*;

use crate::{
    api::{ApiClient, ApiError, RegisterRequest, TokenResponse, UserRecord},
    router,
    state::notifications::{provide_notifications, use_notifications, Notifications},
    utils::navigation,
    utils::storage::CredentialStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Persisted token (if any) is still being validated.
    #[default]
    Initializing,
    Guest,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<UserRecord>,
}

impl SessionState {
    pub fn guest() -> Self {
        Self {
            status: SessionStatus::Guest,
            user: None,
        }
    }

    pub fn authenticated(user: UserRecord) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// False only while the bootstrap round-trip is outstanding.
    pub fn is_resolved(&self) -> bool {
        self.status != SessionStatus::Initializing
    }
}

/// Single source of truth for "who is the current viewer". The signal is
/// private: every mutation goes through the operations below or the 401 hook
/// installed at construction time — no other writer exists.
#[derive(Clone)]
pub struct SessionStore {
    api: Rc<ApiClient>,
    credentials: Rc<dyn CredentialStore>,
    state: RwSignal<SessionState>,
    notifications: Notifications,
}

impl SessionStore {
    pub fn new(
        api: Rc<ApiClient>,
        credentials: Rc<dyn CredentialStore>,
        notifications: Notifications,
    ) -> Self {
        let store = Self {
            api: api.clone(),
            credentials,
            state: create_rw_signal(SessionState::default()),
            notifications,
        };
        let expired = store.clone();
        api.set_unauthorized_hook(move || {
            expired.expire();
            redirect_to_login_if_needed();
        });
        store
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state.into()
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn api(&self) -> Rc<ApiClient> {
        self.api.clone()
    }

    /// Startup validation of the persisted token. Must resolve before any
    /// role-gated rendering decision; guards hold on `Initializing`.
    pub async fn bootstrap(&self) {
        let Some(token) = self.credentials.load() else {
            self.state.set(SessionState::guest());
            return;
        };
        self.api.set_bearer(Some(token));
        match self.api.current_user().await {
            Ok(user) => self.state.set(SessionState::authenticated(user)),
            Err(_) => {
                // Stale or rejected token: drop it everywhere.
                self.credentials.clear();
                self.api.set_bearer(None);
                self.state.set(SessionState::guest());
            }
        }
    }

    /// Failures come back as values, never panics: the login form renders
    /// them inline.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("Введите имя пользователя и пароль"));
        }
        match self.api.login(username, password).await {
            Ok(TokenResponse {
                access_token, user, ..
            }) => {
                self.credentials.store(&access_token);
                self.api.set_bearer(Some(access_token));
                self.notifications
                    .success(format!("Добро пожаловать, {}!", user.username));
                self.state.set(SessionState::authenticated(user));
                Ok(())
            }
            Err(error) => {
                self.notifications.error(error.message.clone());
                Err(error)
            }
        }
    }

    /// Registration does not imply login; the session stays untouched.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("Заполните все поля"));
        }
        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.api.register(&request).await {
            Ok(user) => {
                self.notifications
                    .success("Регистрация успешна! Теперь войдите в систему.");
                Ok(user)
            }
            Err(error) => {
                self.notifications.error(error.message.clone());
                Err(error)
            }
        }
    }

    /// Synchronous with respect to local state and safe to call when already
    /// logged out; the notification fires either way.
    pub fn logout(&self) {
        self.expire();
        self.notifications.success("Вы вышли из системы");
    }

    /// Shared tail of `logout()` and the centralized 401 handler: persisted
    /// token, default bearer and in-memory state drop together, with the
    /// signal written once so observers never see a half-cleared session.
    fn expire(&self) {
        self.credentials.clear();
        self.api.set_bearer(None);
        self.state.set(SessionState::guest());
    }

    #[cfg(test)]
    pub(crate) fn force_state_for_test(&self, state: SessionState) {
        self.state.set(state);
    }
}

fn redirect_to_login_if_needed() {
    if let Some(path) = navigation::current_path() {
        if !router::is_public_path(&path) {
            navigation::redirect_to(router::LOGIN_PATH);
        }
    }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let notifications = provide_notifications();
    let api = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let session = SessionStore::new(api, default_credentials(), notifications);
    provide_context(session.clone());

    // Kick off the startup validation; guards hold rendering until it lands.
    #[cfg(target_arch = "wasm32")]
    {
        let session = session.clone();
        spawn_local(async move {
            session.bootstrap().await;
        });
    }

    view! { <>{children()}</> }
}

fn default_credentials() -> Rc<dyn CredentialStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(crate::utils::storage::BrowserCredentials)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(crate::utils::storage::MemoryCredentials::default())
    }
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().unwrap_or_else(|| {
        SessionStore::new(
            Rc::new(ApiClient::new()),
            default_credentials(),
            use_notifications(),
        )
    })
}

pub fn use_login_action() -> Action<(String, String), Result<(), ApiError>> {
    let session = use_session();
    create_action(move |(username, password): &(String, String)| {
        let session = session.clone();
        let username = username.clone();
        let password = password.clone();
        async move { session.login(&username, &password).await }
    })
}

pub fn use_register_action() -> Action<(String, String, String), Result<UserRecord, ApiError>> {
    let session = use_session();
    create_action(move |(username, email, password): &(String, String, String)| {
        let session = session.clone();
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        async move { session.register(&username, &email, &password).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::{MockServer, GET, POST};
    use crate::api::Role;
    use crate::utils::storage::MemoryCredentials;
    use serde_json::json;

    fn user_json(role: &str) -> serde_json::Value {
        json!({
            "id": 1,
            "username": "alice",
            "email": "alice@example.com",
            "role": role,
            "created_at": "2025-05-01T10:00:00",
            "is_active": true
        })
    }

    fn store_with(server: &MockServer, credentials: MemoryCredentials) -> SessionStore {
        SessionStore::new(
            Rc::new(ApiClient::new_with_base_url(server.base_url())),
            Rc::new(credentials),
            Notifications::new(),
        )
    }

    #[tokio::test]
    async fn bootstrap_without_token_resolves_guest() {
        let runtime = create_runtime();
        let server = MockServer::start();
        let session = store_with(&server, MemoryCredentials::default());

        assert_eq!(session.snapshot().status, SessionStatus::Initializing);
        session.bootstrap().await;

        let state = session.snapshot();
        assert_eq!(state.status, SessionStatus::Guest);
        assert!(state.user.is_none());
        // No token means no identity round-trip at all.
        assert_eq!(server.request_count(), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn bootstrap_with_rejected_token_discards_it() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(GET, "/api/auth/me", 401, json!({ "detail": "Not authenticated" }));

        let credentials = MemoryCredentials::with_token("stale-token");
        let session = store_with(&server, credentials.clone());
        session.bootstrap().await;

        let state = session.snapshot();
        assert_eq!(state.status, SessionStatus::Guest);
        assert!(state.user.is_none());
        use crate::utils::storage::CredentialStore as _;
        assert!(credentials.load().is_none());
        assert!(session.api().bearer().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn bootstrap_with_accepted_token_authenticates() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(GET, "/api/auth/me", 200, user_json("manager"));

        let session = store_with(&server, MemoryCredentials::with_token("good-token"));
        session.bootstrap().await;

        let state = session.snapshot();
        assert_eq!(state.status, SessionStatus::Authenticated);
        assert_eq!(state.user.as_ref().unwrap().role, Role::Manager);
        // Token was attached as the default bearer before the check.
        assert_eq!(
            server.requests()[0].authorization.as_deref(),
            Some("Bearer good-token")
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_success_persists_token_and_authenticates() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(
            POST,
            "/api/auth/login",
            200,
            json!({
                "access_token": "fresh-token",
                "token_type": "bearer",
                "user": user_json("user")
            }),
        );

        let credentials = MemoryCredentials::default();
        let session = store_with(&server, credentials.clone());
        session.login("alice", "correct").await.unwrap();

        let state = session.snapshot();
        assert!(state.is_authenticated());
        use crate::utils::storage::CredentialStore as _;
        assert_eq!(credentials.load().as_deref(), Some("fresh-token"));
        assert_eq!(session.api().bearer().as_deref(), Some("fresh-token"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_failure_keeps_state_and_returns_server_message() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(
            POST,
            "/api/auth/login",
            400,
            json!({ "detail": "Неверное имя пользователя или пароль" }),
        );

        let session = store_with(&server, MemoryCredentials::default());
        session.bootstrap().await;
        let before = session.snapshot();

        let error = session.login("alice", "wrong").await.unwrap_err();
        assert_eq!(error.message, "Неверное имя пользователя или пароль");
        assert_eq!(session.snapshot(), before);
        runtime.dispose();
    }

    #[tokio::test]
    async fn login_rejects_empty_credentials_without_a_request() {
        let runtime = create_runtime();
        let server = MockServer::start();
        let session = store_with(&server, MemoryCredentials::default());

        let error = session.login("", "").await.unwrap_err();
        assert_eq!(error.code, "VALIDATION");
        assert_eq!(server.request_count(), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn register_success_leaves_session_untouched() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(POST, "/api/auth/register", 200, user_json("user"));

        let session = store_with(&server, MemoryCredentials::default());
        session.bootstrap().await;

        let user = session
            .register("alice", "alice@example.com", "secret")
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(session.snapshot().status, SessionStatus::Guest);
        assert!(session.api().bearer().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn logout_is_idempotent() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(
            POST,
            "/api/auth/login",
            200,
            json!({
                "access_token": "fresh-token",
                "token_type": "bearer",
                "user": user_json("user")
            }),
        );

        let credentials = MemoryCredentials::default();
        let session = store_with(&server, credentials.clone());
        session.login("alice", "correct").await.unwrap();

        session.logout();
        let once = session.snapshot();
        session.logout();
        let twice = session.snapshot();

        assert_eq!(once, twice);
        assert_eq!(once.status, SessionStatus::Guest);
        use crate::utils::storage::CredentialStore as _;
        assert!(credentials.load().is_none());
        assert!(session.api().bearer().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn ambient_unauthorized_expires_the_session() {
        let runtime = create_runtime();
        let server = MockServer::start();
        server.stub(
            POST,
            "/api/auth/login",
            200,
            json!({
                "access_token": "fresh-token",
                "token_type": "bearer",
                "user": user_json("user")
            }),
        );

        let credentials = MemoryCredentials::default();
        let session = store_with(&server, credentials.clone());
        session.login("alice", "correct").await.unwrap();
        assert!(session.snapshot().is_authenticated());

        // Any later call observing a 401 forces the logout centrally.
        server.stub(GET, "/api/tricks", 401, json!({ "detail": "Not authenticated" }));
        let error = session.api().tricks(None).await.unwrap_err();
        assert!(error.is_unauthorized());

        let state = session.snapshot();
        assert_eq!(state.status, SessionStatus::Guest);
        assert!(state.user.is_none());
        use crate::utils::storage::CredentialStore as _;
        assert!(credentials.load().is_none());
        assert!(session.api().bearer().is_none());
        runtime.dispose();
    }
}
