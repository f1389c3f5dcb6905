use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::render::Layout;

pub const DEFAULT_TOPIC_TITLES: [&str; 4] = [
    "Forecasting & Early Warning",
    "Disaster Preparedness & Resilience",
    "Response & Coordination",
    "Recovery & Reconstruction",
];

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// How the dashboard is laid out and paced.
/// Replaces the separate grid and tab scripts with one parameterized pipeline.
#[derive(Debug, Clone)]
pub struct BoardSettings {
    pub max_points: usize,
    pub layout: Layout,
    pub topic_titles: [String; 4],
    /// Grid: fade-in stagger step. Tabs: pause between streamed list items.
    pub pacing: Duration,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            max_points: Layout::Grid.default_max_points(),
            layout: Layout::Grid,
            topic_titles: DEFAULT_TOPIC_TITLES.map(String::from),
            pacing: Duration::from_millis(400),
        }
    }
}

/// Application configuration loaded from environment variables.
/// The API key is read but not validated; a missing key fails at call time.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub team_files_dir: PathBuf,
    pub board: BoardSettings,
    pub background_image: Option<PathBuf>,
    pub cache_results: bool,
    pub render_output: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let layout = match optional_env("BOARD_LAYOUT") {
            Some(raw) => raw.parse::<Layout>()?,
            None => Layout::Grid,
        };

        let max_points = match optional_env("MAX_POINTS") {
            Some(raw) => parse_max_points(&raw)?,
            None => layout.default_max_points(),
        };

        let topic_titles = match optional_env("TOPIC_TITLES") {
            Some(raw) => parse_topic_titles(&raw)?,
            None => DEFAULT_TOPIC_TITLES.map(String::from),
        };

        let pacing_ms = std::env::var("PACING_MS")
            .unwrap_or_else(|_| "400".to_string())
            .parse::<u64>()
            .context("PACING_MS must be a whole number of milliseconds")?;

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            team_files_dir: PathBuf::from(
                std::env::var("TEAM_FILES_DIR").unwrap_or_else(|_| "team_files".to_string()),
            ),
            board: BoardSettings {
                max_points,
                layout,
                topic_titles,
                pacing: Duration::from_millis(pacing_ms),
            },
            background_image: optional_env("BACKGROUND_IMAGE").map(PathBuf::from),
            cache_results: match optional_env("CACHE_RESULTS") {
                Some(raw) => parse_flag(&raw).context("CACHE_RESULTS must be true or false")?,
                None => true,
            },
            render_output: optional_env("RENDER_OUTPUT").map(PathBuf::from),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8501".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Unset and blank variables are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_max_points(raw: &str) -> Result<usize> {
    let value = raw
        .parse::<usize>()
        .context("MAX_POINTS must be a positive integer")?;
    if value == 0 {
        bail!("MAX_POINTS must be a positive integer");
    }
    Ok(value)
}

fn parse_topic_titles(raw: &str) -> Result<[String; 4]> {
    let titles: Vec<String> = raw.split('|').map(|t| t.trim().to_string()).collect();
    if titles.iter().any(String::is_empty) {
        bail!("TOPIC_TITLES must not contain empty titles");
    }
    let count = titles.len();
    titles
        .try_into()
        .map_err(|_| anyhow::anyhow!("TOPIC_TITLES must list exactly 4 titles separated by '|', got {count}"))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{other}'"),
    }
}
