use super::{
    client::ApiClient,
    types::{ApiError, CreateSuggestion, ModerationRequest, SuggestionWithUsers, TrickSuggestion},
};

impl ApiClient {
    pub async fn suggest_trick(
        &self,
        request: &CreateSuggestion,
    ) -> Result<TrickSuggestion, ApiError> {
        let builder = self.post("/api/suggestions/tricks").await.json(request);
        self.execute_json(builder).await
    }

    pub async fn my_suggestions(&self, user_id: i64) -> Result<Vec<TrickSuggestion>, ApiError> {
        let builder = self
            .get(&format!("/api/users/{}/suggestions", user_id))
            .await;
        self.execute_json(builder).await
    }

    /// Moderation queue; manager/admin only on the server side.
    pub async fn suggestions(&self) -> Result<Vec<SuggestionWithUsers>, ApiError> {
        let builder = self.get("/api/suggestions/tricks").await;
        self.execute_json(builder).await
    }

    pub async fn moderate_suggestion(
        &self,
        suggestion_id: i64,
        request: &ModerationRequest,
    ) -> Result<serde_json::Value, ApiError> {
        let builder = self
            .put(&format!("/api/suggestions/tricks/{}/moderate", suggestion_id))
            .await
            .json(request);
        self.execute_json(builder).await
    }

    pub async fn delete_suggestion(&self, suggestion_id: i64) -> Result<(), ApiError> {
        let builder = self
            .delete(&format!("/api/suggestions/tricks/{}", suggestion_id))
            .await;
        self.execute_empty(builder).await
    }
}
