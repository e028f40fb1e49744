use leptos::*;

use super::{
    utils::{percentage, result_message, QUESTIONS_PER_RUN},
    view_model::use_quiz_view_model,
};
use crate::components::layout::{ErrorMessage, LoadingSpinner};

#[component]
pub fn QuizPage() -> impl IntoView {
    let vm = use_quiz_view_model();

    let category = vm.category;
    let started = vm.started;
    let finished = vm.finished;
    let question_number = vm.question_number;
    let score = vm.score;
    let current_question = vm.current_question;
    let selected_answer = vm.selected_answer;
    let show_answer = vm.show_answer;
    let error = vm.error;
    let categories_resource = vm.categories_resource;
    let loading = vm.load_action.pending();

    view! {
        <div class="max-w-2xl mx-auto flex flex-col gap-6">
            <h1 class="text-3xl font-bold text-fg">"Викторина"</h1>
            {move || error.get().map(|err| view! { <ErrorMessage message=err.message/> })}

            // Setup screen
            <Show when=move || !started.get()>
                <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-4">
                    <p class="text-fg-muted">
                        {format!("Ответь на {} вопросов и проверь, как хорошо ты знаешь трюки.", QUESTIONS_PER_RUN)}
                    </p>
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
                                .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium"
                        on:click=move |_| vm.start()
                    >
                        "Начать викторину"
                    </button>
                </div>
            </Show>

            // Question screen
            <Show when=move || started.get() && !finished.get()>
                <div class="bg-surface-elevated rounded-lg shadow p-6 flex flex-col gap-4">
                    <div class="flex justify-between text-sm text-fg-muted">
                        <span>{move || format!("Вопрос {} из {}", question_number.get(), QUESTIONS_PER_RUN)}</span>
                        <span>{move || format!("Счёт: {}", score.get())}</span>
                    </div>
                    {move || match current_question.get() {
                        None => {
                            if loading.get() {
                                view! { <LoadingSpinner /> }.into_view()
                            } else {
                                ().into_view()
                            }
                        }
                        Some(question) => {
                            let options = question.options.clone();
                            let correct_id = question.correct_answer_id;
                            view! {
                                <div class="flex flex-col gap-3">
                                    <h2 class="text-xl font-semibold text-fg">{question.question.clone()}</h2>
                                    {question
                                        .image_url
                                        .clone()
                                        .map(|url| view! { <img src=url class="rounded-md max-h-64 object-contain"/> })}
                                    <For each=move || options.clone() key=|option| option.id let:option>
                                        {
                                            let option_id = option.id;
                                            let classes = move || {
                                                if !show_answer.get() {
                                                    return "text-left px-4 py-3 rounded-md border border-border hover:bg-action-ghost-bg-hover text-fg";
                                                }
                                                if option_id == correct_id {
                                                    "text-left px-4 py-3 rounded-md border border-status-success-border bg-status-success-bg text-status-success-text"
                                                } else if selected_answer.get() == Some(option_id) {
                                                    "text-left px-4 py-3 rounded-md border border-status-error-border bg-status-error-bg text-status-error-text"
                                                } else {
                                                    "text-left px-4 py-3 rounded-md border border-border text-fg-muted"
                                                }
                                            };
                                            view! {
                                                <button type="button" class=classes on:click=move |_| vm.answer(option_id)>
                                                    {option.name.clone()}
                                                </button>
                                            }
                                        }
                                    </For>
                                    <Show when=move || show_answer.get()>
                                        <button
                                            type="button"
                                            class="self-end px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover"
                                            on:click=move |_| vm.next()
                                        >
                                            {move || {
                                                if question_number.get() >= QUESTIONS_PER_RUN {
                                                    "Результаты"
                                                } else {
                                                    "Следующий вопрос"
                                                }
                                            }}
                                        </button>
                                    </Show>
                                </div>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </Show>

            // Results screen
            <Show when=move || finished.get()>
                <div class="bg-surface-elevated rounded-lg shadow p-6 text-center flex flex-col gap-4">
                    <h2 class="text-2xl font-semibold text-fg">"Викторина завершена!"</h2>
                    <p class="text-4xl font-bold text-fg">
                        {move || format!("{} / {}", score.get(), QUESTIONS_PER_RUN)}
                    </p>
                    <p class="text-fg-muted">
                        {move || result_message(percentage(score.get(), QUESTIONS_PER_RUN))}
                    </p>
                    <button
                        type="button"
                        class="px-4 py-2 rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover font-medium"
                        on:click=move |_| vm.restart()
                    >
                        "Пройти ещё раз"
                    </button>
                </div>
            </Show>
        </div>
    }
}
