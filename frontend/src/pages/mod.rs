pub mod achievements;
pub mod admin;
pub mod flashcards;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod register;
pub mod suggest;
pub mod tricks;

pub use achievements::*;
pub use admin::*;
pub use flashcards::*;
pub use home::*;
pub use leaderboard::*;
pub use login::*;
pub use profile::*;
pub use progress::*;
pub use quiz::*;
pub use register::*;
pub use suggest::*;
pub use tricks::*;
