use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

struct Entry<T> {
    value: T,
    touched: Instant,
}

impl<T> Entry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            touched: Instant::now(),
        }
    }
}

/// In-memory session map shared across handlers. Nothing is persisted.
///
/// Every read or write marks the session as touched; `sweep_idle` drops the
/// ones left alone for longer than the idle TTL.
#[derive(Clone)]
pub struct SessionStore<T> {
    inner: Arc<RwLock<HashMap<Uuid, Entry<T>>>>,
}

impl<T> Default for SessionStore<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Clone> SessionStore<T> {
    pub async fn insert(&self, value: T) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, Entry::new(value));
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<T> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.touched = Instant::now();
        Some(entry.value.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Option<T> {
        self.inner.write().await.remove(&id).map(|entry| entry.value)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Runs `f` on a copy of the session and commits the copy only if `f`
    /// succeeds. Returns `None` when the session does not exist.
    pub async fn update<R, E>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut T) -> Result<R, E>,
    ) -> Option<Result<R, E>> {
        let mut sessions = self.inner.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.touched = Instant::now();
        let mut draft = entry.value.clone();
        let result = f(&mut draft);
        if result.is_ok() {
            entry.value = draft;
        }
        Some(result)
    }

    /// Drops sessions untouched for longer than `ttl`. Returns how many went.
    pub async fn sweep_idle(&self, ttl: Duration) -> usize {
        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| entry.touched.elapsed() <= ttl);
        before - sessions.len()
    }
}
