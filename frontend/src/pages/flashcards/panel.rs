use leptos::*;

use super::view_model::use_flashcards_view_model;
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn FlashcardsPage() -> impl IntoView {
    let vm = use_flashcards_view_model();

    let category = vm.category;
    let deck = vm.deck;
    let index = vm.index;
    let flipped = vm.flipped;
    let deck_resource = vm.deck_resource;
    let categories_resource = vm.categories_resource;

    let flip_vm = vm.clone();
    let prev_vm = vm.clone();
    let next_vm = vm.clone();
    let reshuffle_vm = vm.clone();

    let current = create_memo(move |_| deck.with(|deck| deck.get(index.get()).cloned()));
    let counter = create_memo(move |_| {
        let total = deck.with(|deck| deck.len());
        if total == 0 {
            String::new()
        } else {
            format!("{} из {}", index.get() + 1, total)
        }
    });

    view! {
        <div class="max-w-2xl mx-auto flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Карточки"</h1>
            <select
                class="border border-border rounded-md px-3 py-2 bg-surface text-fg self-start"
                on:change=move |ev| category.set(event_target_value(&ev))
            >
                <option value="">"Все категории"</option>
                {move || {
                    categories_resource
                        .get()
                        .and_then(Result::ok)
                        .unwrap_or_default()
                        .into_iter()
                        .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                        .collect_view()
                }}
            </select>

            {move || match deck_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                Some(Ok(_)) => ().into_view(),
            }}

            {move || {
                current
                    .get()
                    .map(|trick| {
                        let front_name = trick.name.clone();
                        let front_category = trick.category.clone();
                        let description = trick.description.clone();
                        let technique = trick.technique.clone();
                        view! {
                            <div
                                class="bg-surface-elevated rounded-xl shadow-lg p-8 min-h-56 cursor-pointer select-none flex flex-col justify-center items-center text-center gap-3"
                                on:click={
                                    let vm = flip_vm.clone();
                                    move |_| vm.flip()
                                }
                            >
                                <Show
                                    when=move || flipped.get()
                                    fallback=move || {
                                        view! {
                                            <h2 class="text-2xl font-semibold text-fg">{front_name.clone()}</h2>
                                            <span class="text-sm text-fg-muted">{front_category.clone()}</span>
                                            <p class="text-xs text-fg-muted">"Нажми, чтобы увидеть описание"</p>
                                        }
                                    }
                                >
                                    <p class="text-fg">{description.clone()}</p>
                                    {technique
                                        .clone()
                                        .map(|technique| view! { <p class="text-sm text-fg-muted">"Техника: " {technique}</p> })}
                                </Show>
                            </div>
                        }
                    })
            }}

            <div class="flex items-center justify-between">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || index.get() == 0
                    on:click={
                        let vm = prev_vm.clone();
                        move |_| vm.prev()
                    }
                >
                    "Назад"
                </button>
                <span class="text-sm text-fg-muted">{move || counter.get()}</span>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || {
                        deck.with(|deck| deck.is_empty() || index.get() + 1 >= deck.len())
                    }
                    on:click={
                        let vm = next_vm.clone();
                        move |_| vm.next()
                    }
                >
                    "Вперёд"
                </button>
            </div>
            <button
                type="button"
                class="self-center px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                on:click={
                    let vm = reshuffle_vm.clone();
                    move |_| vm.reshuffle()
                }
            >
                "Перемешать заново"
            </button>
        </div>
    }
}
