use leptos::*;

use super::repository::ProgressRepository;
use crate::{
    api::{ApiError, LearnedTrick, UserStats},
    state::session::use_session,
};

#[derive(Clone, Copy)]
pub struct ProgressViewModel {
    pub stats_resource: Resource<Option<i64>, Result<Option<UserStats>, ApiError>>,
    pub learned_resource: Resource<Option<i64>, Result<Vec<LearnedTrick>, ApiError>>,
}

pub fn use_progress_view_model() -> ProgressViewModel {
    let session = use_session();
    let repo = ProgressRepository::new_with_client(session.api());
    let state = session.state();

    // Keyed on the viewer id: nothing is fetched until the session resolves
    // to an authenticated user.
    let user_id = create_memo(move |_| state.get().user.as_ref().map(|user| user.id));

    let repo_stats = repo.clone();
    let stats_resource = create_resource(
        move || user_id.get(),
        move |user_id| {
            let repo = repo_stats.clone();
            async move {
                match user_id {
                    Some(user_id) => repo.fetch_stats(user_id).await.map(Some),
                    None => Ok(None),
                }
            }
        },
    );

    let learned_resource = create_resource(
        move || user_id.get(),
        move |user_id| {
            let repo = repo.clone();
            async move {
                match user_id {
                    Some(user_id) => repo.fetch_learned(user_id).await,
                    None => Ok(Vec::new()),
                }
            }
        },
    );

    ProgressViewModel {
        stats_resource,
        learned_resource,
    }
}
