//! Per-user session slots.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Conversation state kept between messages of one user.
pub trait Session: Default + Send + Sync + 'static {
    /// Idle sessions carry nothing worth keeping and may be dropped.
    fn is_idle(&self) -> bool;

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One async mutex per user id. Holding the guard serializes that user's messages;
/// different users never wait on each other.
pub struct SessionStore<S> {
    slots: DashMap<i64, Arc<Mutex<S>>>,
}

impl<S: Session> Default for SessionStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Session> SessionStore<S> {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Waits for the user's slot, creating an idle session if none exists.
    pub async fn acquire(&self, user_id: i64) -> OwnedMutexGuard<S> {
        let slot = self.slots.entry(user_id).or_default().clone();
        slot.lock_owned().await
    }

    /// Releases the slot; idle sessions with no waiters are dropped.
    pub fn release(&self, user_id: i64, guard: OwnedMutexGuard<S>) {
        let idle = guard.is_idle();
        drop(guard);
        if idle {
            self.slots.remove_if(&user_id, |_, slot| {
                Arc::strong_count(slot) == 1
                    && slot.try_lock().map(|s| s.is_idle()).unwrap_or(false)
            });
        }
    }

    /// Copy of the user's current session; default when none is stored.
    pub async fn snapshot(&self, user_id: i64) -> S
    where
        S: Clone,
    {
        let slot = self.slots.get(&user_id).map(|s| s.value().clone());
        match slot {
            Some(slot) => slot.lock().await.clone(),
            None => S::default(),
        }
    }

    /// Number of users with a stored session.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
