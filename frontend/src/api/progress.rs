use super::{
    client::ApiClient,
    types::{ApiError, LearnedTrick, MarkLearnedResponse, UserStats},
};

impl ApiClient {
    pub async fn mark_trick_learned(
        &self,
        user_id: i64,
        trick_id: i64,
    ) -> Result<MarkLearnedResponse, ApiError> {
        let builder = self
            .post(&format!("/api/users/{}/progress/{}", user_id, trick_id))
            .await;
        self.execute_json(builder).await
    }

    pub async fn user_stats(&self, user_id: i64) -> Result<UserStats, ApiError> {
        let builder = self.get(&format!("/api/users/{}/stats", user_id)).await;
        self.execute_json(builder).await
    }

    pub async fn learned_tricks(&self, user_id: i64) -> Result<Vec<LearnedTrick>, ApiError> {
        let builder = self
            .get(&format!("/api/users/{}/learned-tricks", user_id))
            .await;
        self.execute_json(builder).await
    }
}
