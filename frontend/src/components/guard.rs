use leptos::*;

use crate::{
    components::layout::LoadingSpinner,
    state::{notifications::use_notifications, policy, session::use_session},
    utils::navigation,
};

fn should_render(resolved: bool, allowed: bool) -> bool {
    resolved && allowed
}

/// Holds children back until bootstrap resolves, then either renders them or
/// sends the guest to the login view.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let resolved = create_memo(move |_| state.get().is_resolved());
    let allowed = create_memo(move |_| state.get().is_authenticated());

    create_effect(move |_| {
        let snapshot = state.get();
        if snapshot.is_resolved() && !snapshot.is_authenticated() {
            navigation::redirect_to("/login");
        }
    });

    view! {
        <Show
            when=move || should_render(resolved.get(), allowed.get())
            fallback=move || {
                if !resolved.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Admin-area gate: manager or admin only. Runs before any admin data is
/// requested — unauthorized viewers are bounced home with a notification and
/// the panel (with its fetches) never mounts.
#[component]
pub fn RequireStaff(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let notifications = use_notifications();
    let state = session.state();
    let resolved = create_memo(move |_| state.get().is_resolved());
    let allowed = create_memo(move |_| policy::can_view_admin(state.get().user.as_ref()));

    create_effect(move |_| {
        let snapshot = state.get();
        if !snapshot.is_resolved() {
            return;
        }
        if !snapshot.is_authenticated() {
            navigation::redirect_to("/login");
        } else if !policy::can_view_admin(snapshot.user.as_ref()) {
            notifications.error("Доступ запрещен");
            navigation::redirect_to("/");
        }
    });

    view! {
        <Show
            when=move || should_render(resolved.get(), allowed.get())
            fallback=move || {
                if !resolved.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::should_render;

    #[test]
    fn guard_blocks_until_resolved_and_allowed() {
        assert!(!should_render(false, false));
        assert!(!should_render(false, true));
        assert!(!should_render(true, false));
        assert!(should_render(true, true));
    }
}
