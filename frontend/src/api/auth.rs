use super::{
    client::ApiClient,
    types::{ApiError, ChangePasswordRequest, MessageResponse, RegisterRequest, TokenResponse, UserRecord},
};

impl ApiClient {
    /// Credential exchange. The backend expects an OAuth2 password form, not
    /// JSON.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let builder = self
            .post("/api/auth/login")
            .await
            .form(&[("username", username), ("password", password)]);
        self.execute_json(builder).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<UserRecord, ApiError> {
        let builder = self.post("/api/auth/register").await.json(request);
        self.execute_json(builder).await
    }

    /// "Who am I" check used to validate a persisted token at startup.
    pub async fn current_user(&self) -> Result<UserRecord, ApiError> {
        let builder = self.get("/api/auth/me").await;
        self.execute_json(builder).await
    }

    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let builder = self.post("/api/auth/change-password").await.json(request);
        self.execute_json(builder).await
    }
}
