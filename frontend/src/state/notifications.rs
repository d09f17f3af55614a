use leptos::*;

pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Non-blocking toast queue shared through context.
#[derive(Clone, Copy)]
pub struct Notifications {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            notices: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| notices.retain(|notice| notice.id != id));
    }

    fn push(&self, kind: NoticeKind, message: String) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|notices| notices.push(Notice { id, kind, message }));
        schedule_dismiss(*self, id);
        id
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(notifications: Notifications, id: u64) {
    gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || notifications.dismiss(id))
        .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_notifications: Notifications, _id: u64) {}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(provide_notifications)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn notices_queue_in_order_and_dismiss_by_id() {
        with_runtime(|| {
            let notifications = Notifications::new();
            let first = notifications.success("Saved");
            let second = notifications.error("Failed to delete");
            assert_ne!(first, second);

            let queued = notifications.notices().get();
            assert_eq!(queued.len(), 2);
            assert_eq!(queued[0].kind, NoticeKind::Success);
            assert_eq!(queued[1].message, "Failed to delete");

            notifications.dismiss(first);
            let queued = notifications.notices().get();
            assert_eq!(queued.len(), 1);
            assert_eq!(queued[0].id, second);
        });
    }

    #[test]
    fn use_notifications_shares_context() {
        with_runtime(|| {
            let provided = provide_notifications();
            provided.success("hello");
            assert_eq!(use_notifications().notices().get().len(), 1);
        });
    }
}
