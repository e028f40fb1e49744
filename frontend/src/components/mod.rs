pub mod guard;
pub mod layout;
pub mod trick_card;
