use crate::models::topic::TopicId;
use crate::render::Layout;

/// Where a slot sits on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    GridCell { row: u8, col: u8 },
    Tab { index: u8 },
}

/// A fixed topic number bound to a title and a screen region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySlot {
    pub topic: TopicId,
    pub title: String,
    pub region: Region,
}

/// Topics with a display slot. Anything else found on disk is not shown.
pub const SLOT_TOPICS: [TopicId; 4] = [1, 2, 3, 4];

/// Slots for topics 1–4 in reading order: grid cells fill row by row, tabs left to right.
pub fn display_slots(titles: &[String; 4], layout: Layout) -> Vec<DisplaySlot> {
    SLOT_TOPICS
        .iter()
        .zip(titles)
        .enumerate()
        .map(|(i, (&topic, title))| {
            let i = i as u8;
            let region = match layout {
                Layout::Grid => Region::GridCell {
                    row: i / 2,
                    col: i % 2,
                },
                Layout::Tabs => Region::Tab { index: i },
            };
            DisplaySlot {
                topic,
                title: title.clone(),
                region,
            }
        })
        .collect()
}
