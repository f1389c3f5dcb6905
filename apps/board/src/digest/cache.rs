use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tokio::sync::OnceCell;

use crate::models::topic::TopicDigest;

type Slot = Arc<OnceCell<Arc<TopicDigest>>>;

/// Process-local memo of digests keyed by team-files folder.
///
/// Concurrent first requests for one folder share a single build. No eviction
/// and no invalidation: edits to the folder are not picked up until the process
/// restarts. A failed build leaves the slot empty so the next request retries.
#[derive(Clone, Default)]
pub struct TopicCache {
    entries: Arc<Mutex<HashMap<PathBuf, Slot>>>,
}

impl TopicCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, folder: &Path) -> Option<Arc<TopicDigest>> {
        self.lock().get(folder).and_then(|slot| slot.get().cloned())
    }

    /// Returns the cached digest for `folder`, running `build` only if no other
    /// caller has produced (or is producing) one.
    pub async fn get_or_try_build<F, Fut>(
        &self,
        folder: &Path,
        build: F,
    ) -> anyhow::Result<Arc<TopicDigest>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<TopicDigest>>,
    {
        let slot = self
            .lock()
            .entry(folder.to_path_buf())
            .or_default()
            .clone();

        let digest = slot
            .get_or_try_init(|| async move { build().await.map(Arc::new) })
            .await?
            .clone();
        Ok(digest)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Slot>> {
        // The map only holds slot handles; a poisoned lock leaves them intact.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
