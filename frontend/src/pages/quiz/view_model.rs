use leptos::*;

use super::utils::QUESTIONS_PER_RUN;
use crate::{
    api::{ApiError, QuizQuestion},
    state::session::use_session,
};

/// One quiz run: ten questions fetched one at a time, scored locally.
#[derive(Clone, Copy)]
pub struct QuizViewModel {
    pub category: RwSignal<String>,
    pub started: RwSignal<bool>,
    pub finished: RwSignal<bool>,
    pub question_number: RwSignal<u32>,
    pub score: RwSignal<u32>,
    pub current_question: RwSignal<Option<QuizQuestion>>,
    pub selected_answer: RwSignal<Option<i64>>,
    pub show_answer: RwSignal<bool>,
    pub error: RwSignal<Option<ApiError>>,
    pub categories_resource: Resource<(), Result<Vec<String>, ApiError>>,
    pub load_action: Action<(), Result<QuizQuestion, ApiError>>,
}

pub fn use_quiz_view_model() -> QuizViewModel {
    let session = use_session();
    let api = session.api();

    let category = create_rw_signal(String::new());
    let started = create_rw_signal(false);
    let finished = create_rw_signal(false);
    let question_number = create_rw_signal(1u32);
    let score = create_rw_signal(0u32);
    let current_question = create_rw_signal(None::<QuizQuestion>);
    let selected_answer = create_rw_signal(None::<i64>);
    let show_answer = create_rw_signal(false);
    let error = create_rw_signal(None::<ApiError>);

    let api_categories = api.clone();
    let categories_resource = create_resource(
        || (),
        move |_| {
            let api = api_categories.clone();
            async move { api.categories().await }
        },
    );

    let load_action = create_action(move |(): &()| {
        let api = api.clone();
        let category = category.get_untracked();
        async move {
            let filter = if category.is_empty() {
                None
            } else {
                Some(category.as_str())
            };
            api.random_quiz_question(filter).await
        }
    });

    create_effect(move |_| {
        if let Some(result) = load_action.value().get() {
            match result {
                Ok(question) => {
                    current_question.set(Some(question));
                    selected_answer.set(None);
                    show_answer.set(false);
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    QuizViewModel {
        category,
        started,
        finished,
        question_number,
        score,
        current_question,
        selected_answer,
        show_answer,
        error,
        categories_resource,
        load_action,
    }
}

impl QuizViewModel {
    pub fn start(&self) {
        self.started.set(true);
        self.finished.set(false);
        self.question_number.set(1);
        self.score.set(0);
        self.current_question.set(None);
        self.selected_answer.set(None);
        self.show_answer.set(false);
        self.error.set(None);
        self.load_action.dispatch(());
    }

    /// First pick wins; later clicks on other options are ignored.
    pub fn answer(&self, option_id: i64) {
        if self.show_answer.get_untracked() {
            return;
        }
        let Some(question) = self.current_question.get_untracked() else {
            return;
        };
        self.selected_answer.set(Some(option_id));
        self.show_answer.set(true);
        if option_id == question.correct_answer_id {
            self.score.update(|score| *score += 1);
        }
    }

    pub fn next(&self) {
        if !self.show_answer.get_untracked() {
            return;
        }
        if self.question_number.get_untracked() >= QUESTIONS_PER_RUN {
            self.finished.set(true);
            return;
        }
        self.question_number.update(|number| *number += 1);
        self.load_action.dispatch(());
    }

    pub fn restart(&self) {
        self.started.set(false);
        self.finished.set(false);
        self.current_question.set(None);
    }
}
