#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use std::rc::Rc;

    use chrono::NaiveDate;
    use leptos::*;

    use crate::api::{ApiClient, Role, Trick, UserRecord};
    use crate::state::notifications::Notifications;
    use crate::state::session::{SessionState, SessionStore};
    use crate::utils::storage::MemoryCredentials;

    pub fn user_with_role(role: Role) -> UserRecord {
        UserRecord {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            role,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            is_active: true,
        }
    }

    pub fn regular_user() -> UserRecord {
        user_with_role(Role::User)
    }

    pub fn manager_user() -> UserRecord {
        UserRecord {
            id: 2,
            username: "manager".into(),
            ..user_with_role(Role::Manager)
        }
    }

    pub fn admin_user() -> UserRecord {
        UserRecord {
            id: 3,
            username: "admin".into(),
            ..user_with_role(Role::Admin)
        }
    }

    pub fn trick_fixture(id: i64, name: &str) -> Trick {
        Trick {
            id,
            name: name.into(),
            category: "Вращения".into(),
            description: "Описание трюка".into(),
            image_url: None,
            technique: Some("Техника исполнения".into()),
            video_url: None,
            created_at: None,
        }
    }

    fn session_store() -> SessionStore {
        SessionStore::new(
            Rc::new(ApiClient::new()),
            Rc::new(MemoryCredentials::default()),
            Notifications::new(),
        )
    }

    /// Builds a resolved session (guest or authenticated) and provides it as
    /// context for component tests.
    pub fn provide_session(user: Option<UserRecord>) -> SessionStore {
        let store = session_store();
        let state = match user {
            Some(user) => SessionState::authenticated(user),
            None => SessionState::guest(),
        };
        store.force_state_for_test(state);
        provide_context(store.clone());
        store
    }

    /// Session still waiting on the bootstrap round-trip.
    pub fn provide_initializing_session() -> SessionStore {
        let store = session_store();
        provide_context(store.clone());
        store
    }
}
