use leptos::*;

use crate::api::{ApiError, CreateTrick, Trick};

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Shared form state for creating and editing tricks; `editing_id` decides
/// which of the two the save turns into.
#[derive(Clone, Copy)]
pub struct TrickFormState {
    pub editing_id: RwSignal<Option<i64>>,
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub description: RwSignal<String>,
    pub image_url: RwSignal<String>,
    pub technique: RwSignal<String>,
    pub video_url: RwSignal<String>,
}

impl TrickFormState {
    pub fn new() -> Self {
        Self {
            editing_id: create_rw_signal(None),
            name: create_rw_signal(String::new()),
            category: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
            image_url: create_rw_signal(String::new()),
            technique: create_rw_signal(String::new()),
            video_url: create_rw_signal(String::new()),
        }
    }

    pub fn load(&self, trick: &Trick) {
        self.editing_id.set(Some(trick.id));
        self.name.set(trick.name.clone());
        self.category.set(trick.category.clone());
        self.description.set(trick.description.clone());
        self.image_url.set(trick.image_url.clone().unwrap_or_default());
        self.technique.set(trick.technique.clone().unwrap_or_default());
        self.video_url.set(trick.video_url.clone().unwrap_or_default());
    }

    pub fn clear(&self) {
        self.editing_id.set(None);
        self.name.set(String::new());
        self.category.set(String::new());
        self.description.set(String::new());
        self.image_url.set(String::new());
        self.technique.set(String::new());
        self.video_url.set(String::new());
    }

    pub fn to_payload(&self) -> Result<CreateTrick, ApiError> {
        let name = self.name.get_untracked();
        let category = self.category.get_untracked();
        let description = self.description.get_untracked();
        if name.trim().is_empty() || category.trim().is_empty() || description.trim().is_empty() {
            return Err(ApiError::validation(
                "Название, категория и описание обязательны",
            ));
        }
        Ok(CreateTrick {
            name,
            category,
            description,
            image_url: optional(self.image_url.get_untracked()),
            technique: optional(self.technique.get_untracked()),
            video_url: optional(self.video_url.get_untracked()),
        })
    }
}

impl Default for TrickFormState {
    fn default() -> Self {
        Self::new()
    }
}
