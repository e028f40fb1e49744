//! Pure derivations of "what may this viewer see and do" from the current
//! user record. No I/O, no signals: everything here is a function of its
//! arguments, which keeps the role matrix trivially testable.

use crate::api::{Role, UserRecord};

pub fn is_authenticated(user: Option<&UserRecord>) -> bool {
    user.is_some()
}

pub fn is_guest(user: Option<&UserRecord>) -> bool {
    user.is_none()
}

pub fn is_admin(user: Option<&UserRecord>) -> bool {
    matches!(user, Some(user) if user.role == Role::Admin)
}

pub fn is_manager(user: Option<&UserRecord>) -> bool {
    matches!(user, Some(user) if user.role == Role::Manager)
}

pub fn is_manager_or_admin(user: Option<&UserRecord>) -> bool {
    is_manager(user) || is_admin(user)
}

pub fn is_plain_user(user: Option<&UserRecord>) -> bool {
    matches!(user, Some(user) if user.role == Role::User)
}

pub fn can_view_admin(user: Option<&UserRecord>) -> bool {
    is_manager_or_admin(user)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

/// Flat links and dropdown groups stay separate lists: the header renders
/// them differently and their relative order is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavMenu {
    pub flat: Vec<NavItem>,
    pub groups: Vec<NavGroup>,
}

pub fn nav_menu(user: Option<&UserRecord>) -> NavMenu {
    let mut flat = vec![
        NavItem { path: "/", label: "Главная" },
        NavItem { path: "/tricks", label: "Трюки" },
        NavItem { path: "/leaderboard", label: "Рейтинг" },
    ];

    if is_guest(user) {
        return NavMenu {
            flat,
            groups: Vec::new(),
        };
    }

    flat.push(NavItem { path: "/suggest", label: "Предложить трюк" });
    if is_manager_or_admin(user) {
        flat.push(NavItem { path: "/admin", label: "Админ панель" });
    }

    let groups = vec![
        NavGroup {
            key: "learning",
            label: "Обучение",
            items: vec![
                NavItem { path: "/flashcards", label: "Карточки" },
                NavItem { path: "/quiz", label: "Викторина" },
            ],
        },
        NavGroup {
            key: "progress",
            label: "Прогресс",
            items: vec![
                NavItem { path: "/progress", label: "Мой прогресс" },
                NavItem { path: "/achievements", label: "Достижения" },
            ],
        },
    ];

    NavMenu { flat, groups }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminSection {
    #[default]
    Tricks,
    Suggestions,
    Users,
}

impl AdminSection {
    pub fn label(&self) -> &'static str {
        match self {
            AdminSection::Tricks => "Трюки",
            AdminSection::Suggestions => "Предложения",
            AdminSection::Users => "Пользователи",
        }
    }
}

/// Managers only ever reach trick management, whatever section was
/// requested; the user section is additionally admin-only.
pub fn effective_admin_section(user: Option<&UserRecord>, requested: AdminSection) -> AdminSection {
    if is_manager(user) {
        return AdminSection::Tricks;
    }
    if requested == AdminSection::Users && !is_admin(user) {
        return AdminSection::Tricks;
    }
    requested
}
