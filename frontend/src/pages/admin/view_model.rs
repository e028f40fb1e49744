use leptos::*;

use super::{repository::AdminRepository, utils::TrickFormState};
use crate::{
    api::{ApiError, CreateTrick, Role, SuggestionWithUsers, Trick, UserRecord},
    state::{notifications::use_notifications, policy, session::use_session},
};

#[derive(Clone)]
pub struct SaveTrick {
    pub trick_id: Option<i64>,
    pub payload: CreateTrick,
}

#[derive(Clone)]
pub struct ModerationPayload {
    pub suggestion_id: i64,
    pub approve: bool,
    pub comment: String,
}

#[derive(Clone)]
pub struct RoleChange {
    pub user_id: i64,
    pub role: Role,
}

#[derive(Clone, Copy)]
pub struct AdminViewModel {
    pub requested_section: RwSignal<policy::AdminSection>,
    /// What actually renders; managers are forced back to Tricks here.
    pub section: Memo<policy::AdminSection>,
    pub is_admin_viewer: Memo<bool>,
    pub tricks_resource: Resource<(bool, u32), Result<Vec<Trick>, ApiError>>,
    pub users_resource: Resource<(bool, u32), Result<Vec<UserRecord>, ApiError>>,
    pub suggestions_resource: Resource<(bool, u32), Result<Vec<SuggestionWithUsers>, ApiError>>,
    pub reload_tricks: RwSignal<u32>,
    pub reload_users: RwSignal<u32>,
    pub reload_suggestions: RwSignal<u32>,
    pub trick_form: TrickFormState,
    pub save_trick_action: Action<SaveTrick, Result<Trick, ApiError>>,
    pub delete_trick_action: Action<i64, Result<(), ApiError>>,
    pub moderate_action: Action<ModerationPayload, Result<serde_json::Value, ApiError>>,
    pub delete_suggestion_action: Action<i64, Result<(), ApiError>>,
    pub change_role_action: Action<RoleChange, Result<UserRecord, ApiError>>,
    pub delete_user_action: Action<i64, Result<(), ApiError>>,
}

pub fn use_admin_view_model() -> AdminViewModel {
    let session = use_session();
    let notifications = use_notifications();
    let repo = AdminRepository::new_with_client(session.api());
    let state = session.state();

    // The route guard already bounced unauthorized viewers; these memos gate
    // the fetches themselves so no admin data is requested even transiently.
    let allowed = create_memo(move |_| policy::can_view_admin(state.get().user.as_ref()));
    let users_allowed = create_memo(move |_| policy::is_admin(state.get().user.as_ref()));
    let is_admin_viewer = users_allowed;

    let requested_section = create_rw_signal(policy::AdminSection::default());
    let section = create_memo(move |_| {
        policy::effective_admin_section(state.get().user.as_ref(), requested_section.get())
    });

    let reload_tricks = create_rw_signal(0u32);
    let reload_users = create_rw_signal(0u32);
    let reload_suggestions = create_rw_signal(0u32);

    let repo_tricks = repo.clone();
    let tricks_resource = create_resource(
        move || (allowed.get(), reload_tricks.get()),
        move |(allowed, _)| {
            let repo = repo_tricks.clone();
            async move {
                if allowed {
                    repo.fetch_tricks().await
                } else {
                    Ok(Vec::new())
                }
            }
        },
    );

    let repo_users = repo.clone();
    let users_resource = create_resource(
        move || (users_allowed.get(), reload_users.get()),
        move |(allowed, _)| {
            let repo = repo_users.clone();
            async move {
                if allowed {
                    repo.fetch_users().await
                } else {
                    // Managers never see the user section, so never fetch it.
                    Ok(Vec::new())
                }
            }
        },
    );

    let repo_suggestions = repo.clone();
    let suggestions_resource = create_resource(
        move || (allowed.get(), reload_suggestions.get()),
        move |(allowed, _)| {
            let repo = repo_suggestions.clone();
            async move {
                if allowed {
                    repo.fetch_suggestions().await
                } else {
                    Ok(Vec::new())
                }
            }
        },
    );

    let trick_form = TrickFormState::new();

    let repo_save = repo.clone();
    let save_trick_action = create_action(move |save: &SaveTrick| {
        let repo = repo_save.clone();
        let save = save.clone();
        async move { repo.save_trick(save.trick_id, &save.payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_trick_action.value().get() {
            match result {
                Ok(_) => {
                    notifications.success("Трюк сохранён");
                    trick_form.clear();
                    reload_tricks.update(|count| *count += 1);
                }
                Err(error) => notifications.error(error.message),
            }
        }
    });

    let repo_delete_trick = repo.clone();
    let delete_trick_action = create_action(move |trick_id: &i64| {
        let repo = repo_delete_trick.clone();
        let trick_id = *trick_id;
        async move { repo.delete_trick(trick_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_trick_action.value().get() {
            match result {
                Ok(()) => {
                    notifications.success("Трюк удален");
                    reload_tricks.update(|count| *count += 1);
                }
                Err(error) => notifications.error(error.message),
            }
        }
    });

    let repo_moderate = repo.clone();
    let moderate_action = create_action(move |payload: &ModerationPayload| {
        let repo = repo_moderate.clone();
        let payload = payload.clone();
        async move {
            let comment = if payload.comment.trim().is_empty() {
                None
            } else {
                Some(payload.comment.clone())
            };
            let result = repo
                .moderate(payload.suggestion_id, payload.approve, comment)
                .await;
            if result.is_ok() {
                notifications.success(if payload.approve {
                    "Предложение одобрено"
                } else {
                    "Предложение отклонено"
                });
                reload_suggestions.update(|count| *count += 1);
            }
            result
        }
    });

    create_effect(move |_| {
        if let Some(Err(error)) = moderate_action.value().get() {
            notifications.error(error.message);
        }
    });

    let repo_delete_suggestion = repo.clone();
    let delete_suggestion_action = create_action(move |suggestion_id: &i64| {
        let repo = repo_delete_suggestion.clone();
        let suggestion_id = *suggestion_id;
        async move { repo.delete_suggestion(suggestion_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_suggestion_action.value().get() {
            match result {
                Ok(()) => {
                    notifications.success("Предложение удалено");
                    reload_suggestions.update(|count| *count += 1);
                }
                Err(error) => notifications.error(error.message),
            }
        }
    });

    let repo_role = repo.clone();
    let change_role_action = create_action(move |change: &RoleChange| {
        let repo = repo_role.clone();
        let change = change.clone();
        async move { repo.change_role(change.user_id, change.role).await }
    });

    create_effect(move |_| {
        if let Some(result) = change_role_action.value().get() {
            match result {
                Ok(_) => {
                    notifications.success("Пользователь обновлен");
                    reload_users.update(|count| *count += 1);
                }
                Err(error) => notifications.error(error.message),
            }
        }
    });

    let delete_user_action = create_action(move |user_id: &i64| {
        let repo = repo.clone();
        let user_id = *user_id;
        async move { repo.delete_user(user_id).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_user_action.value().get() {
            match result {
                Ok(()) => {
                    notifications.success("Пользователь удален");
                    reload_users.update(|count| *count += 1);
                }
                Err(error) => notifications.error(error.message),
            }
        }
    });

    AdminViewModel {
        requested_section,
        section,
        is_admin_viewer,
        tricks_resource,
        users_resource,
        suggestions_resource,
        reload_tricks,
        reload_users,
        reload_suggestions,
        trick_form,
        save_trick_action,
        delete_trick_action,
        moderate_action,
        delete_suggestion_action,
        change_role_action,
        delete_user_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::policy::AdminSection;
    use crate::test_support::helpers::{admin_user, manager_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn manager_is_pinned_to_the_tricks_section() {
        let html = render_to_string(move || {
            provide_session(Some(manager_user()));
            let vm = use_admin_view_model();

            vm.requested_section.set(AdminSection::Users);
            assert_eq!(vm.section.get_untracked(), AdminSection::Tricks);
            vm.requested_section.set(AdminSection::Suggestions);
            assert_eq!(vm.section.get_untracked(), AdminSection::Tricks);
            assert!(!vm.is_admin_viewer.get_untracked());

            view! { <div>"manager"</div> }
        });
        assert!(html.contains("manager"));
    }

    #[test]
    fn admin_reaches_every_section() {
        let html = render_to_string(move || {
            provide_session(Some(admin_user()));
            let vm = use_admin_view_model();

            vm.requested_section.set(AdminSection::Users);
            assert_eq!(vm.section.get_untracked(), AdminSection::Users);
            assert!(vm.is_admin_viewer.get_untracked());

            view! { <div>"admin"</div> }
        });
        assert!(html.contains("admin"));
    }
}
