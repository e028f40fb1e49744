use leptos::{ev::SubmitEvent, *};

use crate::{
    components::layout::ErrorMessage,
    pages::login::utils,
    state::session,
    utils::navigation,
};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let login_action = session::use_login_action();
    let pending = login_action.pending();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    navigation::redirect_to("/");
                }
                // Returned as a value, rendered inline.
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
        let pword = password.get_untracked();
        if let Err(message) = utils::validate_credentials(&uname, &pword) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        login_action.dispatch((uname, pword));
    };

    view! {
        <div class="max-w-md mx-auto bg-surface-elevated rounded-lg shadow p-6 mt-10">
            <h1 class="text-2xl font-semibold text-fg mb-4">"Вход"</h1>
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
                    type="password"
                    placeholder="Пароль"
                    class="border border-border rounded-md px-3 py-2 bg-surface text-fg"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Входим..." } else { "Войти" }}
                </button>
            </form>
            <p class="text-sm text-fg-muted mt-4">
                "Нет аккаунта? "
                <a href="/register" class="text-action-primary-bg hover:underline">"Зарегистрируйтесь"</a>
            </p>
        </div>
    }
}
