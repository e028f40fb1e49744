use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{
        guard::{RequireAuth, RequireStaff},
        layout::Layout,
    },
    pages::{
        achievements::AchievementsPage, admin::AdminPage, flashcards::FlashcardsPage,
        home::HomePage, leaderboard::LeaderboardPage, login::LoginPage, profile::ProfilePage,
        progress::ProgressPage, quiz::QuizPage, register::RegisterPage, suggest::SuggestTrickPage,
        tricks::TricksPage,
    },
    state::session::SessionProvider,
};

pub const LOGIN_PATH: &str = "/login";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/tricks",
    "/flashcards",
    "/quiz",
    "/progress",
    "/login",
    "/register",
    "/profile",
    "/admin",
    "/suggest",
    "/achievements",
    "/leaderboard",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/progress",
    "/profile",
    "/suggest",
    "/achievements",
    "/admin",
];

/// Views a signed-out visitor may stay on when a session expires; everywhere
/// else the centralized 401 handler forces the login view.
pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/tricks", "/leaderboard", "/login", "/register"];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_ROUTE_PATHS.contains(&path)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="Уже лучше — трюки на сноуборде"/>
        <SessionProvider>
            <Layout>
                <Router>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/tricks" view=TricksPage/>
                        <Route path="/flashcards" view=FlashcardsPage/>
                        <Route path="/quiz" view=QuizPage/>
                        <Route path="/progress" view=ProtectedProgress/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/profile" view=ProtectedProfile/>
                        <Route path="/admin" view=ProtectedAdmin/>
                        <Route path="/suggest" view=ProtectedSuggest/>
                        <Route path="/achievements" view=ProtectedAchievements/>
                        <Route path="/leaderboard" view=LeaderboardPage/>
                    </Routes>
                </Router>
            </Layout>
        </SessionProvider>
    }
}

#[component]
fn ProtectedProgress() -> impl IntoView {
    view! { <RequireAuth><ProgressPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedSuggest() -> impl IntoView {
    view! { <RequireAuth><SuggestTrickPage/></RequireAuth> }
}

#[component]
fn ProtectedAchievements() -> impl IntoView {
    view! { <RequireAuth><AchievementsPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireStaff><AdminPage/></RequireStaff> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_routes_are_subset_of_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        for path in PROTECTED_ROUTE_PATHS {
            assert!(
                all.contains(path),
                "protected path missing from ROUTE_PATHS: {}",
                path
            );
        }
    }

    #[test]
    fn public_routes_are_subset_of_all_and_disjoint_from_protected() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        for path in PUBLIC_ROUTE_PATHS {
            assert!(all.contains(path));
            assert!(!protected.contains(path), "path both public and protected: {}", path);
        }
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn expiry_redirect_skips_public_views_only() {
        assert!(is_public_path("/"));
        assert!(is_public_path("/tricks"));
        assert!(is_public_path("/leaderboard"));
        assert!(is_public_path(LOGIN_PATH));
        assert!(!is_public_path("/progress"));
        assert!(!is_public_path("/admin"));
    }
}
