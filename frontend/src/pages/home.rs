use leptos::*;

use crate::state::session::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let authenticated = create_memo(move |_| state.get().is_authenticated());

    view! {
        <div class="max-w-3xl mx-auto text-center py-16">
            <h1 class="text-4xl font-extrabold text-fg sm:text-5xl">"🏂 Уже лучше"</h1>
            <p class="mt-4 text-lg text-fg-muted">
                "Каталог сноубордических трюков: учись по карточкам, проверяй себя в викторине и отслеживай прогресс."
            </p>
            <div class="mt-8 flex justify-center gap-4">
                <a
                    href="/tricks"
                    class="px-6 py-3 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium"
                >
                    "Смотреть трюки"
                </a>
                <Show
                    when=move || authenticated.get()
                    fallback=|| {
                        view! {
                            <a
                                href="/register"
                                class="px-6 py-3 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover font-medium"
                            >
                                "Присоединиться"
                            </a>
                        }
                    }
                >
                    <a
                        href="/progress"
                        class="px-6 py-3 rounded-md border border-border text-fg hover:bg-action-ghost-bg-hover font-medium"
                    >
                        "Мой прогресс"
                    </a>
                </Show>
            </div>
        </div>
    }
}
