use leptos::*;

use crate::state::{
    notifications::{use_notifications, NotificationLevel},
    policy,
    session::use_session,
};

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let (open_group, set_open_group) = create_signal(None::<&'static str>);

    let menu = create_memo(move |_| policy::nav_menu(state.get().user.as_ref()));
    let resolved = create_memo(move |_| state.get().is_resolved());
    let is_admin = create_memo(move |_| policy::is_admin(state.get().user.as_ref()));
    let is_manager = create_memo(move |_| policy::is_manager(state.get().user.as_ref()));
    let username = create_memo(move |_| {
        state
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    });

    // StoredValue keeps the handler Copy, so nested closures can share it.
    let stored_session = store_value(session);
    let on_logout = move |_| {
        set_open_group.set(None);
        stored_session.with_value(|session| session.logout());
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"🏂 Уже лучше"</a>
                    // Neither nav variant renders until bootstrap resolves.
                    <Show when=move || resolved.get()>
                        <nav class="flex items-center space-x-1">
                            <For each=move || menu.get().flat key=|item| item.path let:item>
                                <a
                                    href=item.path
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                >
                                    {item.label}
                                </a>
                            </For>
                            <For each=move || menu.get().groups key=|group| group.key let:group>
                                {
                                    let key = group.key;
                                    let label = group.label;
                                    let items = group.items;
                                    let is_open = move || open_group.get() == Some(key);
                                    view! {
                                        <div class="relative">
                                            <button
                                                type="button"
                                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                                on:click=move |_| {
                                                    set_open_group
                                                        .update(|open| {
                                                            *open = if *open == Some(key) { None } else { Some(key) };
                                                        })
                                                }
                                            >
                                                {label}
                                                <span class="ml-1 text-xs">"▾"</span>
                                            </button>
                                            <div
                                                class="absolute left-0 mt-2 min-w-44 rounded-md bg-surface-elevated shadow-lg border border-border py-1 z-40"
                                                class:hidden=move || !is_open()
                                            >
                                                <For each=move || items.clone() key=|item| item.path let:item>
                                                    <a
                                                        href=item.path
                                                        class="block px-4 py-2 text-sm text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                                                        on:click=move |_| set_open_group.set(None)
                                                    >
                                                        {item.label}
                                                    </a>
                                                </For>
                                            </div>
                                        </div>
                                    }
                                }
                            </For>
                            <Show
                                when=move || state.get().is_authenticated()
                                fallback=move || {
                                    view! {
                                        <a href="/login" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                            "Вход"
                                        </a>
                                        <a href="/register" class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                            "Регистрация"
                                        </a>
                                    }
                                }
                            >
                                <a href="/profile" class="text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    {move || username.get()}
                                    <Show when=move || is_admin.get()>
                                        <span class="ml-1 text-xs text-action-primary-bg">"(Админ)"</span>
                                    </Show>
                                    <Show when=move || is_manager.get()>
                                        <span class="ml-1 text-xs text-status-success-text">"(Менеджер)"</span>
                                    </Show>
                                </a>
                                <button
                                    type="button"
                                    class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    on:click=on_logout
                                >
                                    "Выйти"
                                </button>
                            </Show>
                        </nav>
                    </Show>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn NotificationArea() -> impl IntoView {
    let notifications = use_notifications();
    view! {
        <div class="fixed top-20 right-4 z-50 w-80 space-y-2">
            <For each=move || notifications.items().get() key=|n| n.id let:notification>
                {
                    let id = notification.id;
                    let tone = match notification.level {
                        NotificationLevel::Success => {
                            "bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded flex justify-between items-center"
                        }
                        NotificationLevel::Error => {
                            "bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded flex justify-between items-center"
                        }
                    };
                    view! {
                        <div class=tone>
                            <span class="text-sm">{notification.message.clone()}</span>
                            <button
                                type="button"
                                class="ml-3 text-xs opacity-70 hover:opacity-100"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <NotificationArea/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
