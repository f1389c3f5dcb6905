// Presenter: maps each topic's points onto a fixed display slot and renders the
// dashboard as an HTML document. Pages are built as fragments so the tab layout
// can be streamed with per-item pacing.

pub mod assets;
pub mod escape;
pub mod grid;
pub mod pacing;
pub mod page;
pub mod slots;
pub mod styles;
pub mod tabs;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use tracing::debug;

use crate::config::BoardSettings;
use crate::models::topic::TopicDigest;

pub use assets::BackgroundImage;
pub use pacing::{NoPacing, Pacer, SleepPacer};
pub use page::RenderedPage;

use self::escape::html_escape;
use self::slots::{display_slots, SLOT_TOPICS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Grid,
    Tabs,
}

impl Layout {
    /// The grid shows everything at once and keeps lists short; tabs have room for more.
    pub fn default_max_points(self) -> usize {
        match self {
            Layout::Grid => 5,
            Layout::Tabs => 7,
        }
    }
}

impl FromStr for Layout {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Layout::Grid),
            "tabs" => Ok(Layout::Tabs),
            other => bail!("unknown layout '{other}' (expected 'grid' or 'tabs')"),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Layout::Grid => "grid",
            Layout::Tabs => "tabs",
        })
    }
}

/// Renders the full dashboard document for a digest.
pub fn render_page(
    digest: &TopicDigest,
    settings: &BoardSettings,
    background: Option<&BackgroundImage>,
) -> RenderedPage {
    let slots = display_slots(&settings.topic_titles, settings.layout);

    for topic in digest.topics.keys().filter(|t| !SLOT_TOPICS.contains(*t)) {
        debug!(topic, "Topic has no display slot; not rendered");
    }

    let mut css = String::from(styles::BASE_CSS);
    match settings.layout {
        Layout::Grid => {
            css.push_str(styles::GRID_CSS);
            css.push_str(&styles::grid_animation_css(settings.pacing));
        }
        Layout::Tabs => {
            css.push_str(styles::TABS_CSS);
            css.push_str(&styles::tab_selection_css(&slots));
        }
    }
    if let Some(image) = background {
        css.push_str(&styles::background_css(&image.data_url()));
    }

    let mut page = RenderedPage::new();
    page.push(format!(
        "<!DOCTYPE html>\n<html lang='en'>\n<head>\n<meta charset='utf-8'>\n\
         <meta name='viewport' content='width=device-width, initial-scale=1'>\n\
         <title>Discussion Board</title>\n<style>{css}</style>\n</head>\n<body>\n"
    ));
    if background.is_some() {
        page.push("<div class='bg-container'></div>\n");
    }
    page.push(format!("<main class='board board-{}'>", settings.layout));

    match settings.layout {
        Layout::Grid => grid::render_grid(&mut page, &slots, digest),
        Layout::Tabs => tabs::render_tabs(&mut page, &slots, digest),
    }

    page.push(format!(
        "</main>\n<footer class='board-footer'>Generated {}</footer>\n</body>\n</html>\n",
        html_escape(&digest.generated_at.format("%Y-%m-%d %H:%M UTC").to_string())
    ));
    page
}
