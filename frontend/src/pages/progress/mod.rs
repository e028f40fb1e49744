mod panel;
mod repository;
mod view_model;

pub use panel::ProgressPage;
