use leptos::*;

use super::view_model::use_progress_view_model;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn ProgressPage() -> impl IntoView {
    let vm = use_progress_view_model();
    let stats_resource = vm.stats_resource;
    let learned_resource = vm.learned_resource;

    view! {
        <div class="flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Мой прогресс"</h1>

            {move || match stats_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                Some(Ok(None)) => ().into_view(),
                Some(Ok(Some(stats))) => {
                    let categories: Vec<_> = stats.categories.clone().into_iter().collect();
                    view! {
                        <div class="grid gap-4 sm:grid-cols-3">
                            <div class="bg-surface-elevated rounded-lg shadow p-4 text-center">
                                <p class="text-3xl font-bold text-fg">{stats.learned_tricks}</p>
                                <p class="text-sm text-fg-muted">"Выучено трюков"</p>
                            </div>
                            <div class="bg-surface-elevated rounded-lg shadow p-4 text-center">
                                <p class="text-3xl font-bold text-fg">{stats.total_tricks}</p>
                                <p class="text-sm text-fg-muted">"Всего трюков"</p>
                            </div>
                            <div class="bg-surface-elevated rounded-lg shadow p-4 text-center">
                                <p class="text-3xl font-bold text-fg">
                                    {format!("{:.0}%", stats.progress_percentage)}
                                </p>
                                <p class="text-sm text-fg-muted">"Общий прогресс"</p>
                            </div>
                        </div>
                        <div class="bg-surface-elevated rounded-lg shadow p-4 flex flex-col gap-3">
                            <h2 class="text-lg font-semibold text-fg">"По категориям"</h2>
                            <For
                                each=move || categories.clone()
                                key=|(name, _)| name.clone()
                                let:entry
                            >
                                {
                                    let (name, category) = entry;
                                    let width = format!("width: {}%", category.percentage);
                                    view! {
                                        <div class="flex flex-col gap-1">
                                            <div class="flex justify-between text-sm text-fg">
                                                <span>{name.clone()}</span>
                                                <span class="text-fg-muted">
                                                    {format!("{} / {}", category.learned, category.total)}
                                                </span>
                                            </div>
                                            <div class="h-2 rounded-full bg-action-ghost-bg-hover overflow-hidden">
                                                <div class="h-full bg-action-primary-bg rounded-full" style=width></div>
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                        </div>
                    }
                    .into_view()
                }
            }}

            <div class="bg-surface-elevated rounded-lg shadow p-4 flex flex-col gap-3">
                <h2 class="text-lg font-semibold text-fg">"Изученные трюки"</h2>
                {move || match learned_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                    Some(Ok(learned)) => {
                        if learned.is_empty() {
                            view! { <p class="text-fg-muted">"Пока ни одного — вперёд на склон!"</p> }
                                .into_view()
                        } else {
                            view! {
                                <ul class="divide-y divide-border">
                                    <For
                                        each=move || learned.clone()
                                        key=|item| item.trick.id
                                        let:item
                                    >
                                        <li class="py-2 flex justify-between items-center">
                                            <div>
                                                <p class="text-fg font-medium">{item.trick.name.clone()}</p>
                                                <p class="text-xs text-fg-muted">{item.trick.category.clone()}</p>
                                            </div>
                                            <span class="text-xs text-fg-muted">
                                                {item.learned_at.format("%d.%m.%Y").to_string()}
                                            </span>
                                        </li>
                                    </For>
                                </ul>
                            }
                            .into_view()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, regular_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_progress_sections() {
        let html = render_to_string(move || {
            provide_session(Some(regular_user()));
            view! { <ProgressPage /> }
        });
        assert!(html.contains("Мой прогресс"));
        assert!(html.contains("Изученные трюки"));
    }
}
