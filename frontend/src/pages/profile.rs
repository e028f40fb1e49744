use leptos::{ev::SubmitEvent, *};

use crate::{
    api::ChangePasswordRequest,
    components::layout::ErrorMessage,
    state::{notifications::use_notifications, session::use_session},
};

pub fn validate_password_change(
    current: &str,
    new_password: &str,
    confirm: &str,
) -> Result<(), String> {
    if current.is_empty() || new_password.is_empty() {
        return Err("Заполните все поля".to_string());
    }
    if new_password.len() < 6 {
        return Err("Новый пароль должен быть не короче 6 символов".to_string());
    }
    if new_password != confirm {
        return Err("Пароли не совпадают".to_string());
    }
    Ok(())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let api = session.api();
    let state = session.state();

    let current = create_rw_signal(String::new());
    let new_password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let change_action = create_action(move |request: &ChangePasswordRequest| {
        let api = api.clone();
        let request = request.clone();
        async move { api.change_password(&request).await }
    });
    let pending = change_action.pending();

    create_effect(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(_) => {
                    notifications.success("Пароль изменён");
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => set_error.set(Some(err.message)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let current_value = current.get_untracked();
        let new_value = new_password.get_untracked();
        if let Err(message) =
            validate_password_change(&current_value, &new_value, &confirm.get_untracked())
        {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        change_action.dispatch(ChangePasswordRequest {
            current_password: current_value,
            new_password: new_value,
        });
    };

    view! {
        <div class="max-w-md mx-auto flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Профиль"</h1>

            {move || {
                state
                    .get()
                    .user
                    .map(|user| {
                        view! {
                            <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-1">
                                <p class="text-xl font-semibold text-fg">{user.username.clone()}</p>
                                <p class="text-sm text-fg-muted">{user.email.clone()}</p>
                                <p class="text-xs text-fg-muted">
                                    {format!("Роль: {}", user.role.as_str())}
                                </p>
                                <p class="text-xs text-fg-muted">
                                    {format!("С нами с {}", user.created_at.format("%d.%m.%Y"))}
                                </p>
                            </div>
                        }
                    })
            }}

            <div class="bg-surface-elevated rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-fg mb-4">"Смена пароля"</h2>
                {move || error.get().map(|message| view! { <ErrorMessage message/> })}
                <form on:submit=handle_submit class="flex flex-col gap-4">
                    <input
                        type="password"
                        placeholder="Текущий пароль"
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || current.get()
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Новый пароль"
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Повторите новый пароль"
                        class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Сохраняем..." } else { "Сменить пароль" }}
                    </button>
                </form>
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
    fn password_change_validation() {
        assert!(validate_password_change("", "", "").is_err());
        assert_eq!(
            validate_password_change("old", "short", "short").unwrap_err(),
            "Новый пароль должен быть не короче 6 символов"
        );
        assert_eq!(
            validate_password_change("old", "secret1", "secret2").unwrap_err(),
            "Пароли не совпадают"
        );
        assert!(validate_password_change("old", "secret1", "secret1").is_ok());
    }

    #[test]
    fn renders_user_info_and_password_form() {
        let html = render_to_string(move || {
            provide_session(Some(regular_user()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("alice"));
        assert!(html.contains("Смена пароля"));
    }
}
