use std::rc::Rc;

use crate::api::{ApiClient, ApiError, MarkLearnedResponse, Trick};

#[derive(Clone)]
pub struct TricksRepository {
    api: Rc<ApiClient>,
}

impl TricksRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch_tricks(&self, category: Option<String>) -> Result<Vec<Trick>, ApiError> {
        self.api.tricks(category.as_deref()).await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<String>, ApiError> {
        self.api.categories().await
    }

    pub async fn mark_learned(
        &self,
        user_id: i64,
        trick_id: i64,
    ) -> Result<MarkLearnedResponse, ApiError> {
        self.api.mark_trick_learned(user_id, trick_id).await
    }
}
