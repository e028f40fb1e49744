use std::collections::HashSet;

use leptos::*;

use crate::{
    api::{Achievement, ApiError, UserAchievements},
    components::layout::{ErrorMessage, LoadingSpinner},
    state::session::use_session,
};

pub fn earned_ids(mine: &UserAchievements) -> HashSet<i64> {
    mine.achievements
        .iter()
        .map(|earned| earned.achievement_id)
        .collect()
}

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let session = use_session();
    let api = session.api();
    let state = session.state();

    let api_all = api.clone();
    let all_resource: Resource<(), Result<Vec<Achievement>, ApiError>> = create_resource(
        || (),
        move |_| {
            let api = api_all.clone();
            async move { api.achievements().await }
        },
    );

    let user_id = create_memo(move |_| state.get().user.as_ref().map(|user| user.id));
    let mine_resource: Resource<Option<i64>, Result<Option<UserAchievements>, ApiError>> =
        create_resource(
            move || user_id.get(),
            move |user_id| {
                let api = api.clone();
                async move {
                    match user_id {
                        Some(user_id) => api.user_achievements(user_id).await.map(Some),
                        None => Ok(None),
                    }
                }
            },
        );

    let earned = create_memo(move |_| {
        mine_resource
            .get()
            .and_then(Result::ok)
            .flatten()
            .map(|mine| earned_ids(&mine))
            .unwrap_or_default()
    });

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex items-end justify-between">
                <h1 class="text-3xl font-bold text-fg">"Достижения"</h1>
                {move || {
                    mine_resource
                        .get()
                        .and_then(Result::ok)
                        .flatten()
                        .map(|mine| {
                            view! {
                                <p class="text-fg-muted">
                                    {format!("Очки: {} · Получено: {}", mine.total_points, mine.achievements_count)}
                                </p>
                            }
                        })
                }}
            </div>

            {move || match all_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                Some(Ok(achievements)) => {
                    view! {
                        <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                            <For each=move || achievements.clone() key=|a| a.id let:achievement>
                                {
                                    let id = achievement.id;
                                    let card_class = move || {
                                        if earned.get().contains(&id) {
                                            "bg-surface-elevated rounded-lg shadow p-4 border-2 border-status-success-border"
                                        } else {
                                            "bg-surface-elevated rounded-lg shadow p-4 opacity-70"
                                        }
                                    };
                                    view! {
                                        <div class=card_class>
                                            <div class="flex items-center gap-3">
                                                <span class="text-3xl">
                                                    {achievement.icon.clone().unwrap_or_else(|| "🏆".to_string())}
                                                </span>
                                                <div>
                                                    <h3 class="font-semibold text-fg">{achievement.name.clone()}</h3>
                                                    <p class="text-sm text-fg-muted">{achievement.description.clone()}</p>
                                                </div>
                                            </div>
                                            <p class="mt-2 text-xs text-fg-muted text-right">
                                                {format!("{} очков", achievement.points)}
                                            </p>
                                        </div>
                                    }
                                }
                            </For>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EarnedAchievement;
    use crate::test_support::helpers::{provide_session, regular_user};
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    #[test]
    fn earned_ids_collects_achievement_ids() {
        let earned_at = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mine = UserAchievements {
            total_points: 30,
            achievements_count: 2,
            achievements: vec![
                EarnedAchievement { id: 1, achievement_id: 10, earned_at, achievement: None },
                EarnedAchievement { id: 2, achievement_id: 20, earned_at, achievement: None },
            ],
            recent_achievements: Vec::new(),
        };
        let ids = earned_ids(&mine);
        assert!(ids.contains(&10));
        assert!(ids.contains(&20));
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn renders_achievements_header() {
        let html = render_to_string(move || {
            provide_session(Some(regular_user()));
            view! { <AchievementsPage /> }
        });
        assert!(html.contains("Достижения"));
    }
}
