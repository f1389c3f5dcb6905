use std::sync::OnceLock;

use regex::Regex;

use crate::models::topic::TopicId;

/// A parsed `Topic_<N>_Team_<M>.docx` file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicFileName {
    pub topic: TopicId,
    pub team: u32,
}

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^Topic_(\d+)_Team_(\d+)\.docx$").expect("topic file pattern is valid")
    })
}

impl TopicFileName {
    /// Returns `None` for anything that is not exactly `Topic_<N>_Team_<M>.docx`,
    /// including numbers too large for a `u32`.
    pub fn parse(name: &str) -> Option<Self> {
        let caps = pattern().captures(name)?;
        let topic = caps[1].parse().ok()?;
        let team = caps[2].parse().ok()?;
        Some(Self { topic, team })
    }
}
