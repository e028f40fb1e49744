use leptos::{ev::SubmitEvent, *};

use crate::{
    api::{ApiError, CreateSuggestion, TrickSuggestion},
    components::layout::{ErrorMessage, LoadingSpinner},
    state::{notifications::use_notifications, session::use_session},
};

pub fn validate_suggestion(name: &str, category: &str, description: &str) -> Result<(), String> {
    if name.trim().is_empty() || category.trim().is_empty() || description.trim().is_empty() {
        return Err("Название, категория и описание обязательны".to_string());
    }
    Ok(())
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn SuggestTrickPage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let api = session.api();
    let state = session.state();

    let name = create_rw_signal(String::new());
    let category = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let technique = create_rw_signal(String::new());
    let video_url = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let reload = create_rw_signal(0u32);

    let submit_api = api.clone();
    let submit_action = create_action(move |request: &CreateSuggestion| {
        let api = submit_api.clone();
        let request = request.clone();
        async move { api.suggest_trick(&request).await }
    });
    let pending = submit_action.pending();

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    notifications.success("Предложение отправлено на модерацию");
                    name.set(String::new());
                    category.set(String::new());
                    description.set(String::new());
                    technique.set(String::new());
                    video_url.set(String::new());
                    reload.update(|count| *count += 1);
                }
                Err(err) => notifications.error(err.message),
            }
        }
    });

    let user_id = create_memo(move |_| state.get().user.as_ref().map(|user| user.id));
    let mine_resource: Resource<(Option<i64>, u32), Result<Vec<TrickSuggestion>, ApiError>> =
        create_resource(
            move || (user_id.get(), reload.get()),
            move |(user_id, _)| {
                let api = api.clone();
                async move {
                    match user_id {
                        Some(user_id) => api.my_suggestions(user_id).await,
                        None => Ok(Vec::new()),
                    }
                }
            },
        );

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name_value = name.get_untracked();
        let category_value = category.get_untracked();
        let description_value = description.get_untracked();
        if let Err(message) =
            validate_suggestion(&name_value, &category_value, &description_value)
        {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        submit_action.dispatch(CreateSuggestion {
            name: name_value,
            category: category_value,
            description: description_value,
            image_url: None,
            technique: optional(technique.get_untracked()),
            video_url: optional(video_url.get_untracked()),
        });
    };

    view! {
        <div class="max-w-2xl mx-auto flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Предложить трюк"</h1>
            <div class="bg-surface-elevated rounded-lg shadow p-6">
                {move || error.get().map(|message| view! { <ErrorMessage message/> })}
                <form on:submit=handle_submit class="flex flex-col gap-4">
                    <input
                        type="text"
                        placeholder="Название"
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Категория"
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Описание"
                        rows=4
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <textarea
                        placeholder="Техника исполнения (необязательно)"
                        rows=2
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || technique.get()
                        on:input=move |ev| technique.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        type="url"
                        placeholder="Ссылка на видео (необязательно)"
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || video_url.get()
                        on:input=move |ev| video_url.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Отправляем..." } else { "Отправить" }}
                    </button>
                </form>
            </div>

            <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-3">
                <h2 class="text-lg font-semibold text-fg">"Мои предложения"</h2>
                {move || match mine_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(error)) => view! { <ErrorMessage message=error.message/> }.into_view(),
                    Some(Ok(suggestions)) => {
                        if suggestions.is_empty() {
                            view! { <p class="text-fg-muted">"Вы ещё ничего не предлагали"</p> }
                                .into_view()
                        } else {
                            view! {
                                <ul class="divide-y divide-border">
                                    <For each=move || suggestions.clone() key=|s| s.id let:suggestion>
                                        <li class="py-3 flex justify-between items-start gap-3">
                                            <div>
                                                <p class="text-fg font-medium">{suggestion.name.clone()}</p>
                                                <p class="text-sm text-fg-muted">{suggestion.category.clone()}</p>
                                                {suggestion
                                                    .moderation_comment
                                                    .clone()
                                                    .map(|comment| {
                                                        view! {
                                                            <p class="text-xs text-fg-muted mt-1">
                                                                "Комментарий модератора: " {comment}
                                                            </p>
                                                        }
                                                    })}
                                            </div>
                                            <span class="text-xs rounded-full px-2 py-1 bg-action-ghost-bg-hover text-fg-muted">
                                                {suggestion.status.label()}
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
    fn validation_requires_core_fields() {
        assert!(validate_suggestion("", "Вращения", "Описание").is_err());
        assert!(validate_suggestion("Trick", "", "Описание").is_err());
        assert!(validate_suggestion("Trick", "Вращения", "  ").is_err());
        assert!(validate_suggestion("Trick", "Вращения", "Описание").is_ok());
    }

    #[test]
    fn optional_fields_drop_blank_values() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(optional(" url ".into()), Some("url".to_string()));
    }

    #[test]
    fn renders_form_and_own_suggestions() {
        let html = render_to_string(move || {
            provide_session(Some(regular_user()));
            view! { <SuggestTrickPage /> }
        });
        assert!(html.contains("Предложить трюк"));
        assert!(html.contains("Мои предложения"));
    }
}
