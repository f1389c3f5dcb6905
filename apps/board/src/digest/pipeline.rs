use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::digest::cache::TopicCache;
use crate::digest::extractor::PointExtractor;
use crate::ingest::load_topic_texts;
use crate::models::topic::TopicDigest;

/// Loader → Extractor, one completion call per topic, strictly in topic order.
///
/// Only a failure to run the blocking loader task is an error; unreadable
/// folders and failed completions degrade inside the loader and extractor.
pub async fn build_digest(
    dir: &Path,
    extractor: &PointExtractor,
    max_points: usize,
) -> Result<TopicDigest> {
    let folder = dir.to_path_buf();
    let texts = tokio::task::spawn_blocking(move || load_topic_texts(&folder))
        .await
        .context("document loader task failed")?;

    let mut topics = BTreeMap::new();
    for (topic, text) in texts {
        info!(topic, chars = text.len(), "Extracting discussion points");
        let points = extractor.extract(&text, max_points).await;
        topics.insert(topic, points);
    }

    Ok(TopicDigest::new(topics))
}

/// Like `build_digest`, but reuses an earlier result for the same folder when a
/// cache is supplied. Concurrent callers for one folder share a single build.
pub async fn cached_digest(
    cache: Option<&TopicCache>,
    dir: &Path,
    extractor: &PointExtractor,
    max_points: usize,
) -> Result<Arc<TopicDigest>> {
    match cache {
        Some(cache) => {
            cache
                .get_or_try_build(dir, || build_digest(dir, extractor, max_points))
                .await
        }
        None => Ok(Arc::new(build_digest(dir, extractor, max_points).await?)),
    }
}
