use std::rc::Rc;

use crate::api::{ApiClient, ApiError, LearnedTrick, UserStats};

#[derive(Clone)]
pub struct ProgressRepository {
    api: Rc<ApiClient>,
}

impl ProgressRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch_stats(&self, user_id: i64) -> Result<UserStats, ApiError> {
        self.api.user_stats(user_id).await
    }

    pub async fn fetch_learned(&self, user_id: i64) -> Result<Vec<LearnedTrick>, ApiError> {
        self.api.learned_tricks(user_id).await
    }
}
