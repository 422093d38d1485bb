//! Request-scoped caller identity.
//!
//! Each gated request runs inside its own `scope`, so a value stored by one
//! request is never visible to another, even when tokio reuses the worker.
//! `set_current_username` hands back a guard that clears the slot when dropped,
//! which covers the rejection path as well as the dispatch path.
use std::cell::RefCell;
use std::future::Future;

tokio::task_local! {
    static CURRENT_USERNAME: RefCell<Option<String>>;
}

/// Run `fut` with a fresh, empty identity slot.
pub async fn scope<F: Future>(fut: F) -> F::Output {
    CURRENT_USERNAME.scope(RefCell::new(None), fut).await
}

/// Store `name` for the current request, overwriting any previous value.
///
/// Outside a `scope` nothing is stored.
#[must_use = "the username is cleared as soon as the guard is dropped"]
pub fn set_current_username(name: impl Into<String>) -> UsernameGuard {
    let name = name.into();
    if CURRENT_USERNAME
        .try_with(|slot| *slot.borrow_mut() = Some(name))
        .is_err()
    {
        tracing::warn!("no request scope; username not propagated");
    }
    UsernameGuard { _priv: () }
}

pub fn clear_current_username() {
    let _ = CURRENT_USERNAME.try_with(|slot| slot.borrow_mut().take());
}

pub fn current_username() -> Option<String> {
    CURRENT_USERNAME
        .try_with(|slot| slot.borrow().clone())
        .ok()
        .flatten()
}

#[derive(Debug)]
pub struct UsernameGuard {
    _priv: (),
}

impl Drop for UsernameGuard {
    fn drop(&mut self) {
        clear_current_username();
    }
}
