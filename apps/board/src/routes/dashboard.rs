//! Route handlers for the dashboard page and its JSON twin.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde::Deserialize;

use crate::config::BoardSettings;
use crate::digest::cached_digest;
use crate::errors::AppError;
use crate::models::topic::TopicDigest;
use crate::render::{render_page, Layout, Pacer, RenderedPage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub layout: Option<String>,
}

/// GET /
///
/// Streams the rendered dashboard. In the tab layout the stream pauses after
/// each list item so points appear one at a time.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, AppError> {
    let settings = settings_for(&state.board, query.layout.as_deref())?;
    let digest = load_digest(&state).await?;

    let page = render_page(&digest, &settings, state.background.as_deref());
    let body = Body::from_stream(paced_stream(page, state.pacer.clone()));

    Ok(([(CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response())
}

/// GET /api/v1/topics
///
/// The same digest the page is rendered from, as JSON.
pub async fn handle_topics(State(state): State<AppState>) -> Result<Json<TopicDigest>, AppError> {
    let digest = load_digest(&state).await?;
    Ok(Json(digest.as_ref().clone()))
}

async fn load_digest(state: &AppState) -> Result<Arc<TopicDigest>, AppError> {
    Ok(cached_digest(
        state.cache.as_ref(),
        &state.team_files_dir,
        &state.extractor,
        state.board.max_points,
    )
    .await?)
}

/// Applies a `?layout=` override. The point cap stays as configured so cached
/// digests remain valid for either layout.
fn settings_for(base: &BoardSettings, layout: Option<&str>) -> Result<BoardSettings, AppError> {
    let mut settings = base.clone();
    if let Some(raw) = layout {
        settings.layout = raw
            .parse::<Layout>()
            .map_err(|e| AppError::Validation(e.to_string()))?;
    }
    Ok(settings)
}

/// Sends fragments in order, pausing after every paced fragment.
fn paced_stream(
    page: RenderedPage,
    pacer: Arc<dyn Pacer>,
) -> impl Stream<Item = Result<Bytes, Infallible>> {
    let mut pause_before = false;
    let chunks: Vec<(bool, String)> = page
        .into_fragments()
        .into_iter()
        .map(|fragment| {
            let chunk = (pause_before, fragment.html);
            pause_before = fragment.pace_after;
            chunk
        })
        .collect();

    futures::stream::iter(chunks).then(move |(pause, html)| {
        let pacer = pacer.clone();
        async move {
            if pause {
                pacer.pause().await;
            }
            Ok::<_, Infallible>(Bytes::from(html))
        }
    })
}
