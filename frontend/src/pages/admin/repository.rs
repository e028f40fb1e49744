use std::rc::Rc;

use crate::api::{
    ApiClient, ApiError, CreateTrick, ModerationRequest, Role, SuggestionStatus,
    SuggestionWithUsers, Trick, UserRecord, UserUpdate,
};

#[derive(Clone)]
pub struct AdminRepository {
    api: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(api: Rc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn fetch_tricks(&self) -> Result<Vec<Trick>, ApiError> {
        self.api.admin_tricks().await
    }

    pub async fn save_trick(
        &self,
        trick_id: Option<i64>,
        payload: &CreateTrick,
    ) -> Result<Trick, ApiError> {
        match trick_id {
            Some(trick_id) => self.api.admin_update_trick(trick_id, payload).await,
            None => self.api.admin_create_trick(payload).await,
        }
    }

    pub async fn delete_trick(&self, trick_id: i64) -> Result<(), ApiError> {
        self.api.admin_delete_trick(trick_id).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        self.api.admin_users().await
    }

    pub async fn change_role(&self, user_id: i64, role: Role) -> Result<UserRecord, ApiError> {
        let update = UserUpdate {
            role: Some(role),
            ..Default::default()
        };
        self.api.admin_update_user(user_id, &update).await
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.api.admin_delete_user(user_id).await
    }

    pub async fn fetch_suggestions(&self) -> Result<Vec<SuggestionWithUsers>, ApiError> {
        self.api.suggestions().await
    }

    pub async fn moderate(
        &self,
        suggestion_id: i64,
        approve: bool,
        comment: Option<String>,
    ) -> Result<serde_json::Value, ApiError> {
        let request = ModerationRequest {
            status: if approve {
                SuggestionStatus::Approved
            } else {
                SuggestionStatus::Rejected
            },
            comment,
        };
        self.api.moderate_suggestion(suggestion_id, &request).await
    }

    pub async fn delete_suggestion(&self, suggestion_id: i64) -> Result<(), ApiError> {
        self.api.delete_suggestion(suggestion_id).await
    }
}
