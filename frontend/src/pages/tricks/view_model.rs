use leptos::*;

use super::repository::TricksRepository;
use crate::{
    api::{ApiError, MarkLearnedResponse, Trick},
    state::notifications::use_notifications,
    state::session::use_session,
};

#[derive(Clone, Copy)]
pub struct TricksViewModel {
    pub category: RwSignal<String>,
    pub search: RwSignal<String>,
    pub tricks_resource: Resource<String, Result<Vec<Trick>, ApiError>>,
    pub categories_resource: Resource<(), Result<Vec<String>, ApiError>>,
    pub mark_learned_action: Action<i64, Result<MarkLearnedResponse, ApiError>>,
}

pub fn use_tricks_view_model() -> TricksViewModel {
    let session = use_session();
    let notifications = use_notifications();
    let repo = TricksRepository::new_with_client(session.api());

    let category = create_rw_signal(String::new());
    let search = create_rw_signal(String::new());

    let repo_tricks = repo.clone();
    let tricks_resource = create_resource(
        move || category.get(),
        move |category| {
            let repo = repo_tricks.clone();
            async move {
                let filter = if category.is_empty() {
                    None
                } else {
                    Some(category)
                };
                repo.fetch_tricks(filter).await
            }
        },
    );

    let repo_categories = repo.clone();
    let categories_resource = create_resource(
        || (),
        move |_| {
            let repo = repo_categories.clone();
            async move { repo.fetch_categories().await }
        },
    );

    let state = session.state();
    let mark_learned_action = create_action(move |trick_id: &i64| {
        let repo = repo.clone();
        let trick_id = *trick_id;
        let user = state.get_untracked().user;
        async move {
            let Some(user) = user else {
                return Err(ApiError::validation("Необходимо войти в систему"));
            };
            repo.mark_learned(user.id, trick_id).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = mark_learned_action.value().get() {
            match result {
                Ok(response) => {
                    notifications.success("Трюк отмечен как изученный!");
                    for achievement in &response.new_achievements {
                        notifications.success(format!("Новое достижение: {}", achievement.name));
                    }
                }
                Err(error) => notifications.error(error.message),
            }
        }
    });

    TricksViewModel {
        category,
        search,
        tricks_resource,
        categories_resource,
        mark_learned_action,
    }
}

/// Client-side search over the already-fetched list, matching name or
/// description case-insensitively.
pub fn filter_tricks(tricks: &[Trick], search: &str) -> Vec<Trick> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return tricks.to_vec();
    }
    tricks
        .iter()
        .filter(|trick| {
            trick.name.to_lowercase().contains(&needle)
                || trick.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::trick_fixture;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn filter_matches_name_and_description() {
        let tricks = vec![
            trick_fixture(1, "Frontside 360"),
            trick_fixture(2, "Backside 180"),
        ];
        assert_eq!(filter_tricks(&tricks, "front").len(), 1);
        assert_eq!(filter_tricks(&tricks, "описание").len(), 2);
        assert_eq!(filter_tricks(&tricks, "nose press").len(), 0);
        assert_eq!(filter_tricks(&tricks, "  ").len(), 2);
    }

    #[test]
    fn view_model_starts_with_empty_filters() {
        let html = render_to_string(move || {
            let vm = use_tricks_view_model();
            assert!(vm.category.get_untracked().is_empty());
            assert!(vm.search.get_untracked().is_empty());
            view! { <div>"vm-ready"</div> }
        });
        assert!(html.contains("vm-ready"));
    }
}
