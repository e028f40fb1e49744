use super::{
    client::ApiClient,
    types::{ApiError, CreateTrick, Trick, UserRecord, UserUpdate},
};

impl ApiClient {
    pub async fn admin_tricks(&self) -> Result<Vec<Trick>, ApiError> {
        let builder = self.get("/api/admin/tricks").await;
        self.execute_json(builder).await
    }

    pub async fn admin_create_trick(&self, request: &CreateTrick) -> Result<Trick, ApiError> {
        let builder = self.post("/api/admin/tricks").await.json(request);
        self.execute_json(builder).await
    }

    pub async fn admin_update_trick(
        &self,
        trick_id: i64,
        request: &CreateTrick,
    ) -> Result<Trick, ApiError> {
        let builder = self
            .put(&format!("/api/admin/tricks/{}", trick_id))
            .await
            .json(request);
        self.execute_json(builder).await
    }

    pub async fn admin_delete_trick(&self, trick_id: i64) -> Result<(), ApiError> {
        let builder = self.delete(&format!("/api/admin/tricks/{}", trick_id)).await;
        self.execute_empty(builder).await
    }

    pub async fn admin_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        let builder = self.get("/api/admin/users").await;
        self.execute_json(builder).await
    }

    pub async fn admin_update_user(
        &self,
        user_id: i64,
        request: &UserUpdate,
    ) -> Result<UserRecord, ApiError> {
        let builder = self
            .put(&format!("/api/admin/users/{}", user_id))
            .await
            .json(request);
        self.execute_json(builder).await
    }

    pub async fn admin_delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        let builder = self.delete(&format!("/api/admin/users/{}", user_id)).await;
        self.execute_empty(builder).await
    }
}
