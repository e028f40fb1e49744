use leptos::*;

use super::view_model::{filter_tricks, use_tricks_view_model};
use crate::{
    components::{
        layout::{ErrorMessage, LoadingSpinner},
        trick_card::TrickCard,
    },
    state::session::use_session,
};

#[component]
pub fn TricksPage() -> impl IntoView {
    let vm = use_tricks_view_model();
    let session = use_session();
    let state = session.state();
    let authenticated = create_memo(move |_| state.get().is_authenticated());

    let category = vm.category;
    let search = vm.search;
    let tricks_resource = vm.tricks_resource;
    let categories_resource = vm.categories_resource;
    let mark_learned = vm.mark_learned_action;

    view! {
        <div class="flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Трюки"</h1>
            <div class="flex flex-wrap gap-3">
                <select
                    class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"Все категории"</option>
                    {move || {
                        categories_resource
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                let current = name.clone();
                                view! {
                                    <option value=value selected=move || category.get() == current>
                                        {name.clone()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <input
                    type="search"
                    placeholder="Поиск по названию или описанию"
                    class="flex-1 min-w-60 border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            {move || match tricks_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                Some(Ok(tricks)) => {
                    let visible = filter_tricks(&tricks, &search.get());
                    if visible.is_empty() {
                        view! { <p class="text-fg-muted">"Ничего не найдено"</p> }.into_view()
                    } else {
                        view! {
                            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                <For each=move || visible.clone() key=|trick| trick.id let:trick>
                                    {
                                        let trick_id = trick.id;
                                        view! {
                                            <TrickCard trick=trick.clone()>
                                                <Show when=move || authenticated.get()>
                                                    <button
                                                        type="button"
                                                        class="mt-2 px-3 py-2 rounded-md text-sm text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                                                        on:click=move |_| mark_learned.dispatch(trick_id)
                                                    >
                                                        "Выучил!"
                                                    </button>
                                                </Show>
                                            </TrickCard>
                                        }
                                    }
                                </For>
                            </div>
                        }
                        .into_view()
                    }
                }
            }}
        </div>
    }
}
