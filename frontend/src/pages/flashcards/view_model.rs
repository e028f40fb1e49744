use leptos::*;

use crate::{
    api::{ApiError, Trick},
    state::session::use_session,
    utils::shuffle::{random_index, shuffle},
};

/// Deck is shuffled client-side once fetched; navigation walks the shuffled
/// order.
#[derive(Clone, Copy)]
pub struct FlashcardsViewModel {
    pub category: RwSignal<String>,
    pub deck: RwSignal<Vec<Trick>>,
    pub index: RwSignal<usize>,
    pub flipped: RwSignal<bool>,
    pub deck_resource: Resource<String, Result<Vec<Trick>, ApiError>>,
    pub categories_resource: Resource<(), Result<Vec<String>, ApiError>>,
}

pub fn shuffled_deck(mut tricks: Vec<Trick>) -> Vec<Trick> {
    shuffle(&mut tricks, random_index);
    tricks
}

pub fn use_flashcards_view_model() -> FlashcardsViewModel {
    let session = use_session();
    let api = session.api();

    let category = create_rw_signal(String::new());
    let deck = create_rw_signal(Vec::<Trick>::new());
    let index = create_rw_signal(0usize);
    let flipped = create_rw_signal(false);

    let api_deck = api.clone();
    let deck_resource = create_resource(
        move || category.get(),
        move |category| {
            let api = api_deck.clone();
            async move {
                let filter = if category.is_empty() {
                    None
                } else {
                    Some(category)
                };
                api.tricks(filter.as_deref()).await
            }
        },
    );

    let categories_resource = create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.categories().await }
        },
    );

    create_effect(move |_| {
        if let Some(Ok(tricks)) = deck_resource.get() {
            deck.set(shuffled_deck(tricks));
            index.set(0);
            flipped.set(false);
        }
    });

    FlashcardsViewModel {
        category,
        deck,
        index,
        flipped,
        deck_resource,
        categories_resource,
    }
}

impl FlashcardsViewModel {
    pub fn flip(&self) {
        self.flipped.update(|flipped| *flipped = !*flipped);
    }

    pub fn next(&self) {
        let last = self.deck.with_untracked(|deck| deck.len().saturating_sub(1));
        if self.index.get_untracked() < last {
            self.index.update(|index| *index += 1);
            self.flipped.set(false);
        }
    }

    pub fn prev(&self) {
        if self.index.get_untracked() > 0 {
            self.index.update(|index| *index -= 1);
            self.flipped.set(false);
        }
    }

    pub fn reshuffle(&self) {
        self.deck.update(|deck| shuffle(deck, random_index));
        self.index.set(0);
        self.flipped.set(false);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::trick_fixture;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shuffled_deck_keeps_every_card() {
        let deck = shuffled_deck(vec![
            trick_fixture(1, "Ollie"),
            trick_fixture(2, "Nollie"),
            trick_fixture(3, "Indy"),
        ]);
        let mut ids: Vec<i64> = deck.iter().map(|trick| trick.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn navigation_clamps_at_deck_edges() {
        let html = render_to_string(move || {
            let vm = use_flashcards_view_model();
            vm.deck
                .set(vec![trick_fixture(1, "Ollie"), trick_fixture(2, "Nollie")]);

            vm.prev();
            assert_eq!(vm.index.get_untracked(), 0);

            vm.next();
            assert_eq!(vm.index.get_untracked(), 1);
            vm.next();
            assert_eq!(vm.index.get_untracked(), 1);

            view! { <div>"nav"</div> }
        });
        assert!(html.contains("nav"));
    }

    #[test]
    fn flip_resets_on_navigation() {
        let html = render_to_string(move || {
            let vm = use_flashcards_view_model();
            vm.deck
                .set(vec![trick_fixture(1, "Ollie"), trick_fixture(2, "Nollie")]);

            vm.flip();
            assert!(vm.flipped.get_untracked());
            vm.next();
            assert!(!vm.flipped.get_untracked());

            vm.flip();
            vm.reshuffle();
            assert!(!vm.flipped.get_untracked());
            assert_eq!(vm.index.get_untracked(), 0);

            view! { <div>"flip"</div> }
        });
        assert!(html.contains("flip"));
    }
}
