use leptos::*;

#[cfg(target_arch = "wasm32")]
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub level: NotificationLevel,
    pub message: String,
}

/// Transient notification queue; the layout renders it, everything else only
/// pushes. Presentation stays minimal on purpose.
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u32>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            next_id: create_rw_signal(0),
        }
    }

    pub fn items(&self) -> Signal<Vec<Notification>> {
        self.items.into()
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    fn push(&self, level: NotificationLevel, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.update(|next| *next += 1);
        self.items.update(|items| {
            items.push(Notification { id, level, message });
        });

        #[cfg(target_arch = "wasm32")]
        {
            let queue = *self;
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
                queue.dismiss(id);
            });
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> Notifications {
    if let Some(existing) = use_context::<Notifications>() {
        return existing;
    }
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(provide_notifications)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn push_and_dismiss_round_trip() {
        with_runtime(|| {
            let queue = Notifications::new();
            queue.success("готово");
            queue.error("ошибка");

            let items = queue.items().get_untracked();
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].level, NotificationLevel::Success);
            assert_eq!(items[1].level, NotificationLevel::Error);
            assert_ne!(items[0].id, items[1].id);

            queue.dismiss(items[0].id);
            let remaining = queue.items().get_untracked();
            assert_eq!(remaining.len(), 1);
            assert_eq!(remaining[0].message, "ошибка");
        });
    }

    #[test]
    fn use_notifications_shares_one_queue_per_context() {
        with_runtime(|| {
            let first = use_notifications();
            first.success("раз");
            let second = use_notifications();
            assert_eq!(second.items().get_untracked().len(), 1);
        });
    }
}
