use leptos::*;

pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub description: String,
}

/// Transient app-wide notification slot. Only the latest notification is
/// shown; each one clears itself after [`TOAST_DURATION_MS`].
#[derive(Clone, Copy)]
pub struct Notifications {
    current: RwSignal<Option<Notification>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        }
    }

    pub fn current(&self) -> Signal<Option<Notification>> {
        self.current.into()
    }

    pub fn notify(&self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.current.set(Some(Notification {
            id,
            title: title.into(),
            description: description.into(),
        }));
        self.schedule_dismiss(id);
        id
    }

    /// Clears the slot if it still holds notification `id`.
    pub fn dismiss(&self, id: u64) {
        self.current.update(|current| {
            if current.as_ref().is_some_and(|n| n.id == id) {
                *current = None;
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
            this.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().unwrap_or_else(provide_notifications)
}
