use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic number taken from a `Topic_<N>_Team_<M>.docx` file name.
pub type TopicId = u32;

/// All team documents submitted for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicGroup {
    pub topic: TopicId,
    pub files: Vec<PathBuf>,
}

/// Discussion points produced for every topic found in a folder.
///
/// Topics are keyed in ascending order. Each point list is already capped at the
/// configured maximum and never contains empty strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicDigest {
    pub topics: BTreeMap<TopicId, Vec<String>>,
    pub generated_at: DateTime<Utc>,
}

impl TopicDigest {
    pub fn new(topics: BTreeMap<TopicId, Vec<String>>) -> Self {
        Self {
            topics,
            generated_at: Utc::now(),
        }
    }

    /// Points for a topic; an absent topic yields an empty slice.
    pub fn points(&self, topic: TopicId) -> &[String] {
        self.topics.get(&topic).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_absent_topic_is_empty() {
        let mut topics = BTreeMap::new();
        topics.insert(2, vec!["Shared data gaps".to_string()]);
        let digest = TopicDigest::new(topics);

        assert_eq!(digest.points(2), ["Shared data gaps".to_string()]);
        assert!(digest.points(1).is_empty());
    }
}
