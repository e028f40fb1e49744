use leptos::{ev::SubmitEvent, *};

use crate::{components::layout::ErrorMessage, state::session, utils::navigation};

pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err("Заполните все поля".to_string());
    }
    if !email.contains('@') {
        return Err("Некорректный email".to_string());
    }
    if password.len() < 6 {
        return Err("Пароль должен быть не короче 6 символов".to_string());
    }
    if password != confirm {
        return Err("Пароли не совпадают".to_string());
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let register_action = session::use_register_action();
    let pending = register_action.pending();

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                // Registration never logs the viewer in; send them to login.
                Ok(_) => navigation::redirect_to("/login"),
                Err(err) => set_error.set(Some(err.message)),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let uname = username.get_untracked();
        let mail = email.get_untracked();
        let pword = password.get_untracked();
        if let Err(message) =
            validate_registration(&uname, &mail, &pword, &confirm.get_untracked())
        {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        register_action.dispatch((uname, mail, pword));
    };

    view! {
        <div class="max-w-md mx-auto bg-surface-elevated rounded-lg shadow p-6 mt-10">
            <h1 class="text-2xl font-semibold text-fg mb-4">"Регистрация"</h1>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            <form on:submit=handle_submit class="flex flex-col gap-4">
                <input
                    type="text"
                    placeholder="Имя пользователя"
                    class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || username.get()
                    on:input=move |ev| set_username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Повторите пароль"
                    class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Регистрируем..." } else { "Зарегистрироваться" }}
                </button>
            </form>
            <p class="text-sm text-fg-muted mt-4">
                "Уже есть аккаунт? "
                <a href="/login" class="text-action-primary-bg hover:underline">"Войдите"</a>
            </p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn validation_covers_each_field() {
        assert!(validate_registration("", "", "", "").is_err());
        assert_eq!(
            validate_registration("alice", "not-an-email", "secret1", "secret1").unwrap_err(),
            "Некорректный email"
        );
        assert_eq!(
            validate_registration("alice", "a@b.com", "short", "short").unwrap_err(),
            "Пароль должен быть не короче 6 символов"
        );
        assert_eq!(
            validate_registration("alice", "a@b.com", "secret1", "secret2").unwrap_err(),
            "Пароли не совпадают"
        );
        assert!(validate_registration("alice", "a@b.com", "secret1", "secret1").is_ok());
    }
}
