use tokio::sync::watch;

/// Whether the wallet's sensitive data and operations are accessible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Process-wide store for the [`LockState`].
///
/// Not `Clone`: the owner (the unlock gate) is the single writer. Every
/// other component observes transitions through [`LockStore::subscribe`]
/// instead of polling.
#[derive(Debug)]
pub struct LockStore {
    tx: watch::Sender<LockState>,
}

impl LockStore {
    /// Create a store in the `Locked` state.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(LockState::Locked);
        Self { tx }
    }

    pub fn state(&self) -> LockState {
        *self.tx.borrow()
    }

    /// Transition to `Unlocked`.
    ///
    /// Idempotent: returns `true` only for the call that actually changed
    /// the state, and subscribers are notified exactly once.
    pub fn unlock(&self) -> bool {
        self.tx.send_if_modified(|state| {
            if *state == LockState::Unlocked {
                false
            } else {
                *state = LockState::Unlocked;
                true
            }
        })
    }

    /// Subscribe to lock-state transitions.
    pub fn subscribe(&self) -> watch::Receiver<LockState> {
        self.tx.subscribe()
    }
}

impl Default for LockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_locked() {
        let store = LockStore::new();
        assert_eq!(store.state(), LockState::Locked);
    }

    #[test]
    fn unlock_transitions_once() {
        let store = LockStore::new();
        assert!(store.unlock());
        assert_eq!(store.state(), LockState::Unlocked);
    }

    #[test]
    fn unlock_is_idempotent() {
        let store = LockStore::new();
        assert!(store.unlock());
        assert!(!store.unlock());
        assert!(!store.unlock());
        assert_eq!(store.state(), LockState::Unlocked);
    }

    #[tokio::test]
    async fn subscriber_observes_transition() {
        let store = LockStore::new();
        let mut rx = store.subscribe();
        assert_eq!(*rx.borrow(), LockState::Locked);

        store.unlock();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), LockState::Unlocked);
    }

    #[tokio::test]
    async fn duplicate_unlock_does_not_renotify() {
        let store = LockStore::new();
        let mut rx = store.subscribe();

        store.unlock();
        rx.changed().await.unwrap();

        store.unlock();
        assert!(!rx.has_changed().unwrap());
    }
}
