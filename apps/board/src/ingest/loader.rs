use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::ingest::docx::read_paragraphs;
use crate::ingest::filename::TopicFileName;
use crate::models::topic::{TopicGroup, TopicId};

/// Groups every `Topic_<N>_Team_<M>.docx` in `dir` by topic number.
///
/// Non-matching names and subdirectories are ignored. A missing or unreadable
/// directory yields an empty map. Files within a group are ordered by name.
pub fn discover_topics(dir: &Path) -> BTreeMap<TopicId, TopicGroup> {
    let mut groups: BTreeMap<TopicId, TopicGroup> = BTreeMap::new();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Cannot read team files directory '{}': {e}", dir.display());
            return groups;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(parsed) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(TopicFileName::parse)
        else {
            debug!("Ignoring '{}'", path.display());
            continue;
        };

        groups
            .entry(parsed.topic)
            .or_insert_with(|| TopicGroup {
                topic: parsed.topic,
                files: Vec::new(),
            })
            .files
            .push(path);
    }

    for group in groups.values_mut() {
        group.files.sort();
    }

    groups
}

/// Concatenated note text per topic.
///
/// Each document contributes its paragraphs joined by `\n`; documents of the
/// same topic are joined by `\n`. Documents that fail to parse are skipped.
pub fn load_topic_texts(dir: &Path) -> BTreeMap<TopicId, String> {
    let groups = discover_topics(dir);
    let mut texts = BTreeMap::new();

    for group in groups.into_values() {
        let mut documents = Vec::with_capacity(group.files.len());
        for path in &group.files {
            match read_paragraphs(path) {
                Ok(paragraphs) => documents.push(paragraphs.join("\n")),
                Err(e) => warn!("Skipping '{}': {e:#}", path.display()),
            }
        }
        if documents.is_empty() {
            continue;
        }
        debug!(topic = group.topic, files = documents.len(), "Loaded topic notes");
        texts.insert(group.topic, documents.join("\n"));
    }

    info!(
        "Loaded notes for {} topic(s) from '{}'",
        texts.len(),
        dir.display()
    );
    texts
}
