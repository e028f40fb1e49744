use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Manager,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: NaiveDateTime,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// `/api/auth/login` payload: bearer credential plus the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    pub user: UserRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    // Absent in nested payloads such as the learned-tricks listing.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrick {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category: String,
    pub options: Vec<QuizOption>,
    pub correct_answer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementSummary {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub points: i64,
}

/// Marking a trick learned may unlock achievements as a side effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkLearnedResponse {
    pub message: String,
    #[serde(default)]
    pub new_achievements: Vec<AchievementSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: i64,
    pub learned: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_tricks: i64,
    pub learned_tricks: i64,
    pub progress_percentage: f64,
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedTrick {
    pub learned_at: NaiveDateTime,
    pub trick: Trick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub condition_type: Option<String>,
    #[serde(default)]
    pub condition_value: Option<i64>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub badge_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedAchievement {
    pub id: i64,
    pub achievement_id: i64,
    pub earned_at: NaiveDateTime,
    #[serde(default)]
    pub achievement: Option<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserAchievements {
    pub total_points: i64,
    pub achievements_count: i64,
    #[serde(default)]
    pub achievements: Vec<EarnedAchievement>,
    #[serde(default)]
    pub recent_achievements: Vec<EarnedAchievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: i64,
    pub username: String,
    pub total_points: i64,
    pub achievements_count: i64,
    pub rank: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionStatus::Pending => "На рассмотрении",
            SuggestionStatus::Approved => "Одобрено",
            SuggestionStatus::Rejected => "Отклонено",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSuggestion {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrickSuggestion {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    pub suggested_by: i64,
    pub status: SuggestionStatus,
    #[serde(default)]
    pub moderated_by: Option<i64>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub moderated_at: Option<NaiveDateTime>,
}

/// Moderation listing joins the suggester (and moderator, once decided).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionWithUsers {
    #[serde(flatten)]
    pub suggestion: TrickSuggestion,
    pub suggester: UserRecord,
    #[serde(default)]
    pub moderator: Option<UserRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModerationRequest {
    pub status: SuggestionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "VALIDATION".to_string(),
            status: None,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "NETWORK".to_string(),
            status: None,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "PARSE".to_string(),
            status: None,
        }
    }

    /// Non-success response: surface the backend's `detail` message when the
    /// body carries one, fall back to a generic message otherwise.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let detail = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").cloned())
            .and_then(|detail| detail.as_str().map(|s| s.to_string()));
        Self {
            message: detail.unwrap_or_else(|| format!("Запрос завершился ошибкой ({})", status)),
            code: "SERVER".to_string(),
            status: Some(status),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn deserialize_token_response_with_user_role() {
        let raw = r#"{
            "access_token": "abc",
            "token_type": "bearer",
            "user": {
                "id": 1,
                "username": "alice",
                "email": "alice@example.com",
                "role": "manager",
                "created_at": "2025-05-01T10:00:00",
                "is_active": true
            }
        }"#;
        let token: TokenResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.user.role, Role::Manager);
    }

    #[wasm_bindgen_test]
    fn serialize_moderation_request_lowercase_status() {
        let request = ModerationRequest {
            status: SuggestionStatus::Approved,
            comment: Some("Хороший трюк".into()),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["status"], serde_json::json!("approved"));
        assert_eq!(value["comment"], serde_json::json!("Хороший трюк"));
    }
}
