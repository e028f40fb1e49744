use leptos::*;

use super::view_model::{use_admin_view_model, ModerationPayload, RoleChange, SaveTrick};
use crate::{
    api::Role,
    components::layout::{ErrorMessage, LoadingSpinner},
    state::{notifications::use_notifications, policy::AdminSection},
};

const TAB_ACTIVE: &str =
    "px-4 py-2 rounded-full bg-action-primary-bg text-action-primary-text text-sm font-medium";
const TAB_IDLE: &str =
    "px-4 py-2 rounded-full border border-border text-fg-muted hover:text-fg text-sm font-medium";
const INPUT: &str = "border border-border rounded-md px-3 py-2 bg-surface text-fg";

fn role_from_value(value: &str) -> Role {
    match value {
        "admin" => Role::Admin,
        "manager" => Role::Manager,
        _ => Role::User,
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let vm = use_admin_view_model();
    let notifications = use_notifications();

    let requested_section = vm.requested_section;
    let section = vm.section;
    let is_admin_viewer = vm.is_admin_viewer;
    let tricks_resource = vm.tricks_resource;
    let users_resource = vm.users_resource;
    let suggestions_resource = vm.suggestions_resource;
    let trick_form = vm.trick_form;
    let save_trick_action = vm.save_trick_action;
    let delete_trick_action = vm.delete_trick_action;
    let moderate_action = vm.moderate_action;
    let delete_suggestion_action = vm.delete_suggestion_action;
    let change_role_action = vm.change_role_action;
    let delete_user_action = vm.delete_user_action;

    let moderation_comment = create_rw_signal(String::new());

    let tab_class = move |target: AdminSection| {
        if section.get() == target {
            TAB_ACTIVE
        } else {
            TAB_IDLE
        }
    };

    let on_save_trick = move |_| {
        match trick_form.to_payload() {
            Ok(payload) => save_trick_action.dispatch(SaveTrick {
                trick_id: trick_form.editing_id.get_untracked(),
                payload,
            }),
            Err(error) => notifications.error(error.message),
        }
    };

    view! {
        <div class="flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">
                {move || if is_admin_viewer.get() { "Админ панель" } else { "Панель менеджера" }}
            </h1>

            <div class="flex gap-2 flex-wrap">
                <button
                    type="button"
                    class=move || tab_class(AdminSection::Tricks)
                    on:click=move |_| requested_section.set(AdminSection::Tricks)
                >
                    "Трюки"
                </button>
                <button
                    type="button"
                    class=move || tab_class(AdminSection::Suggestions)
                    on:click=move |_| requested_section.set(AdminSection::Suggestions)
                >
                    "Предложения"
                </button>
                <Show when=move || is_admin_viewer.get()>
                    <button
                        type="button"
                        class=move || tab_class(AdminSection::Users)
                        on:click=move |_| requested_section.set(AdminSection::Users)
                    >
                        "Пользователи"
                    </button>
                </Show>
            </div>

            // Tricks section
            <Show when=move || section.get() == AdminSection::Tricks>
                <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-4">
                    <h2 class="text-lg font-semibold text-fg">
                        {move || {
                            if trick_form.editing_id.get().is_some() {
                                "Редактировать трюк"
                            } else {
                                "Новый трюк"
                            }
                        }}
                    </h2>
                    <div class="grid gap-3 sm:grid-cols-2">
                        <input
                            type="text"
                            placeholder="Название"
                            class=INPUT
                            prop:value=move || trick_form.name.get()
                            on:input=move |ev| trick_form.name.set(event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Категория"
                            class=INPUT
                            prop:value=move || trick_form.category.get()
                            on:input=move |ev| trick_form.category.set(event_target_value(&ev))
                        />
                        <input
                            type="url"
                            placeholder="Ссылка на изображение"
                            class=INPUT
                            prop:value=move || trick_form.image_url.get()
                            on:input=move |ev| trick_form.image_url.set(event_target_value(&ev))
                        />
                        <input
                            type="url"
                            placeholder="Ссылка на видео"
                            class=INPUT
                            prop:value=move || trick_form.video_url.get()
                            on:input=move |ev| trick_form.video_url.set(event_target_value(&ev))
                        />
                    </div>
                    <textarea
                        placeholder="Описание"
                        rows=3
                        class=INPUT
                        prop:value=move || trick_form.description.get()
                        on:input=move |ev| trick_form.description.set(event_target_value(&ev))
                    ></textarea>
                    <textarea
                        placeholder="Техника исполнения"
                        rows=2
                        class=INPUT
                        prop:value=move || trick_form.technique.get()
                        on:input=move |ev| trick_form.technique.set(event_target_value(&ev))
                    ></textarea>
                    <div class="flex gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium disabled:opacity-50"
                            disabled=move || save_trick_action.pending().get()
                            on:click=on_save_trick
                        >
                            "Сохранить"
                        </button>
                        <Show when=move || trick_form.editing_id.get().is_some()>
                            <button
                                type="button"
                                class="px-4 py-2 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover"
                                on:click=move |_| trick_form.clear()
                            >
                                "Отмена"
                            </button>
                        </Show>
                    </div>

                    {move || match tricks_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                        Some(Ok(tricks)) => {
                            view! {
                                <table class="w-full text-left text-sm">
                                    <thead class="text-fg-muted border-b border-border">
                                        <tr>
                                            <th class="py-2">"Название"</th>
                                            <th class="py-2">"Категория"</th>
                                            <th class="py-2 text-right">"Действия"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        <For each=move || tricks.clone() key=|trick| trick.id let:trick>
                                            {
                                                let trick_id = trick.id;
                                                let edit_trick = trick.clone();
                                                view! {
                                                    <tr>
                                                        <td class="py-2 text-fg">{trick.name.clone()}</td>
                                                        <td class="py-2 text-fg-muted">{trick.category.clone()}</td>
                                                        <td class="py-2 text-right">
                                                            <button
                                                                type="button"
                                                                class="px-3 py-1 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover mr-2"
                                                                on:click=move |_| trick_form.load(&edit_trick)
                                                            >
                                                                "Изменить"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="px-3 py-1 rounded-md bg-status-error-bg border border-status-error-border text-status-error-text"
                                                                on:click=move |_| delete_trick_action.dispatch(trick_id)
                                                            >
                                                                "Удалить"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        </For>
                                    </tbody>
                                </table>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </Show>

            // Suggestions section
            <Show when=move || section.get() == AdminSection::Suggestions>
                <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-4">
                    <h2 class="text-lg font-semibold text-fg">"Предложенные трюки"</h2>
                    <input
                        type="text"
                        placeholder="Комментарий модератора (необязательно)"
                        class=INPUT
                        prop:value=move || moderation_comment.get()
                        on:input=move |ev| moderation_comment.set(event_target_value(&ev))
                    />
                    {move || match suggestions_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                        Some(Ok(suggestions)) => {
                            if suggestions.is_empty() {
                                view! { <p class="text-fg-muted">"Новых предложений нет"</p> }
                                    .into_view()
                            } else {
                                view! {
                                    <ul class="divide-y divide-border">
                                        <For
                                            each=move || suggestions.clone()
                                            key=|item| item.suggestion.id
                                            let:item
                                        >
                                            {
                                                let suggestion_id = item.suggestion.id;
                                                view! {
                                                    <li class="py-3 flex flex-wrap justify-between items-center gap-3">
                                                        <div>
                                                            <p class="text-fg font-medium">{item.suggestion.name.clone()}</p>
                                                            <p class="text-sm text-fg-muted">
                                                                {format!(
                                                                    "{} · от {}",
                                                                    item.suggestion.category,
                                                                    item.suggester.username,
                                                                )}
                                                            </p>
                                                            <p class="text-xs text-fg-muted">
                                                                {item.suggestion.status.label()}
                                                            </p>
                                                        </div>
                                                        <div class="flex gap-2">
                                                            <button
                                                                type="button"
                                                                class="px-3 py-1 rounded-md bg-status-success-bg border border-status-success-border text-status-success-text"
                                                                on:click=move |_| {
                                                                    moderate_action
                                                                        .dispatch(ModerationPayload {
                                                                            suggestion_id,
                                                                            approve: true,
                                                                            comment: moderation_comment.get_untracked(),
                                                                        })
                                                                }
                                                            >
                                                                "Одобрить"
                                                            </button>
                                                            <button
                                                                type="button"
                                                                class="px-3 py-1 rounded-md bg-status-error-bg border border-status-error-border text-status-error-text"
                                                                on:click=move |_| {
                                                                    moderate_action
                                                                        .dispatch(ModerationPayload {
                                                                            suggestion_id,
                                                                            approve: false,
                                                                            comment: moderation_comment.get_untracked(),
                                                                        })
                                                                }
                                                            >
                                                                "Отклонить"
                                                            </button>
                                                            <Show when=move || is_admin_viewer.get()>
                                                                <button
                                                                    type="button"
                                                                    class="px-3 py-1 rounded-md border border-border text-fg-muted hover:text-fg"
                                                                    on:click=move |_| {
                                                                        delete_suggestion_action.dispatch(suggestion_id)
                                                                    }
                                                                >
                                                                    "Удалить"
                                                                </button>
                                                            </Show>
                                                        </div>
                                                    </li>
                                                }
                                            }
                                        </For>
                                    </ul>
                                }
                                .into_view()
                            }
                        }
                    }}
                </div>
            </Show>

            // Users section (admin only; managers never reach it)
            <Show when=move || section.get() == AdminSection::Users>
                <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-4">
                    <h2 class="text-lg font-semibold text-fg">"Пользователи"</h2>
                    {move || match users_resource.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                        Some(Ok(users)) => {
                            view! {
                                <table class="w-full text-left text-sm">
                                    <thead class="text-fg-muted border-b border-border">
                                        <tr>
                                            <th class="py-2">"Пользователь"</th>
                                            <th class="py-2">"Email"</th>
                                            <th class="py-2">"Роль"</th>
                                            <th class="py-2 text-right">"Действия"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-border">
                                        <For each=move || users.clone() key=|user| user.id let:user>
                                            {
                                                let user_id = user.id;
                                                let role = user.role;
                                                view! {
                                                    <tr>
                                                        <td class="py-2 text-fg">{user.username.clone()}</td>
                                                        <td class="py-2 text-fg-muted">{user.email.clone()}</td>
                                                        <td class="py-2">
                                                            <select
                                                                class="border border-border rounded-md px-2 py-1 bg-surface text-fg"
                                                                on:change=move |ev| {
                                                                    change_role_action
                                                                        .dispatch(RoleChange {
                                                                            user_id,
                                                                            role: role_from_value(&event_target_value(&ev)),
                                                                        })
                                                                }
                                                            >
                                                                <option value="user" selected=move || role == Role::User>
                                                                    "user"
                                                                </option>
                                                                <option value="manager" selected=move || role == Role::Manager>
                                                                    "manager"
                                                                </option>
                                                                <option value="admin" selected=move || role == Role::Admin>
                                                                    "admin"
                                                                </option>
                                                            </select>
                                                        </td>
                                                        <td class="py-2 text-right">
                                                            <button
                                                                type="button"
                                                                class="px-3 py-1 rounded-md bg-status-error-bg border border-status-error-border text-status-error-text"
                                                                on:click=move |_| delete_user_action.dispatch(user_id)
                                                            >
                                                                "Удалить"
                                                            </button>
                                                        </td>
                                                    </tr>
                                                }
                                            }
                                        </For>
                                    </tbody>
                                </table>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
