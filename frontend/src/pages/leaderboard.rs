use leptos::*;

use crate::{
    api::{ApiError, LeaderboardEntry},
    components::layout::{ErrorMessage, LoadingSpinner},
    state::session::use_session,
};

const LEADERBOARD_LIMIT: u32 = 50;

pub fn medal(rank: i64) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let session = use_session();
    let api = session.api();
    let state = session.state();
    let my_id = create_memo(move |_| state.get().user.as_ref().map(|user| user.id));

    let board_resource: Resource<(), Result<Vec<LeaderboardEntry>, ApiError>> = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.leaderboard(LEADERBOARD_LIMIT).await }
        },
    );

    view! {
        <div class="max-w-3xl mx-auto flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Рейтинг"</h1>
            {move || match board_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                Some(Ok(entries)) => {
                    if entries.is_empty() {
                        view! { <p class="text-fg-muted">"Рейтинг пока пуст"</p> }.into_view()
                    } else {
                        view! {
                            <div class="bg-surface-elevated rounded-lg shadow overflow-hidden">
                                <table class="w-full text-left">
                                    <thead class="bg-action-ghost-bg-hover text-fg-muted text-sm">
                                        <tr>
                                            <th class="px-4 py-3">"Место"</th>
                                            <th class="px-4 py-3">"Райдер"</th>
                                            <th class="px-4 py-3 text-right">"Очки"</th>
                                            <th class="px-4 py-3 text-right">"Достижения"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        <For each=move || entries.clone() key=|entry| entry.user_id let:entry>
                                            {
                                                let entry_id = entry.user_id;
                                                let row_class = move || {
                                                    if my_id.get() == Some(entry_id) {
                                                        "bg-action-ghost-bg-hover font-semibold"
                                                    } else {
                                                        ""
                                                    }
                                                };
                                                view! {
                                                    <tr class=row_class>
                                                        <td class="px-4 py-3 text-fg">
                                                            {medal(entry.rank).unwrap_or_default()}
                                                            {format!(" {}", entry.rank)}
                                                        </td>
                                                        <td class="px-4 py-3 text-fg">{entry.username.clone()}</td>
                                                        <td class="px-4 py-3 text-right text-fg">{entry.total_points}</td>
                                                        <td class="px-4 py-3 text-right text-fg-muted">
                                                            {entry.achievements_count}
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        </For>
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::provide_session;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn medals_only_for_top_three() {
        assert_eq!(medal(1), Some("🥇"));
        assert_eq!(medal(2), Some("🥈"));
        assert_eq!(medal(3), Some("🥉"));
        assert_eq!(medal(4), None);
    }

    #[test]
    fn renders_leaderboard_shell_for_guests() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <LeaderboardPage /> }
        });
        assert!(html.contains("Рейтинг"));
    }
}
