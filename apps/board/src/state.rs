use std::path::PathBuf;
use std::sync::Arc;

use crate::config::BoardSettings;
use crate::digest::{PointExtractor, TopicCache};
use crate::render::{BackgroundImage, Pacer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub team_files_dir: PathBuf,
    pub board: BoardSettings,
    pub extractor: PointExtractor,
    /// `None` when CACHE_RESULTS is off: every request rebuilds the digest.
    pub cache: Option<TopicCache>,
    /// Pause between streamed list items in the tab layout.
    pub pacer: Arc<dyn Pacer>,
    /// Loaded once at startup; a configured but missing image never gets this far.
    pub background: Option<Arc<BackgroundImage>>,
}
