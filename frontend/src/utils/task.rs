use futures::future::{abortable, AbortHandle, Aborted};
use leptos::*;
use std::{cell::RefCell, future::Future, rc::Rc};

fn spawn_abortable<F>(task: F) -> AbortHandle
where
    F: Future<Output = ()> + 'static,
{
    let (task, handle) = abortable(task);
    spawn_local(async move {
        if let Err(Aborted) = task.await {
            log::debug!("scoped task aborted");
        }
    });
    handle
}

/// Spawns `task` on the local executor, tied to the current reactive owner:
/// when the owner is cleaned up the task is aborted at its next await point.
pub fn spawn_scoped<F>(task: F) -> AbortHandle
where
    F: Future<Output = ()> + 'static,
{
    let handle = spawn_abortable(task);
    let on_dispose = handle.clone();
    on_cleanup(move || on_dispose.abort());
    handle
}

/// Holds at most one running task. Starting another aborts the previous
/// one, and the owner that created the slot aborts whatever is left on
/// cleanup, so repeated starts register nothing new with the owner.
#[derive(Clone, Default)]
pub struct TaskSlot {
    current: Rc<RefCell<Option<AbortHandle>>>,
}

impl TaskSlot {
    pub fn scoped() -> Self {
        let slot = Self::default();
        let on_dispose = slot.clone();
        on_cleanup(move || on_dispose.abort());
        slot
    }

    pub fn replace<F>(&self, task: F) -> AbortHandle
    where
        F: Future<Output = ()> + 'static,
    {
        self.abort();
        let handle = spawn_abortable(task);
        *self.current.borrow_mut() = Some(handle.clone());
        handle
    }

    pub fn abort(&self) {
        if let Some(handle) = self.current.borrow_mut().take() {
            handle.abort();
        }
    }
}
