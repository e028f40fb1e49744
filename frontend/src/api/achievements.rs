use super::{
    client::ApiClient,
    types::{Achievement, ApiError, LeaderboardEntry, UserAchievements},
};

impl ApiClient {
    pub async fn achievements(&self) -> Result<Vec<Achievement>, ApiError> {
        let builder = self.get("/api/achievements").await;
        self.execute_json(builder).await
    }

    pub async fn user_achievements(&self, user_id: i64) -> Result<UserAchievements, ApiError> {
        let builder = self
            .get(&format!("/api/users/{}/achievements", user_id))
            .await;
        self.execute_json(builder).await
    }

    pub async fn leaderboard(&self, limit: u32) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let builder = self.get(&format!("/api/leaderboard?limit={}", limit)).await;
        self.execute_json(builder).await
    }
}
