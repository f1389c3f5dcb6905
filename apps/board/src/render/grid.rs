use crate::models::topic::TopicDigest;
use crate::render::escape::html_escape;
use crate::render::page::RenderedPage;
use crate::render::slots::{DisplaySlot, Region};

/// Renders all four slots at once as a 2×2 grid.
///
/// Items fade in by CSS animation, so nothing in the stream is paced.
pub fn render_grid(page: &mut RenderedPage, slots: &[DisplaySlot], digest: &TopicDigest) {
    page.push("<div class='grid-container'>");
    for slot in slots {
        page.push(render_cell(slot, digest.points(slot.topic)));
    }
    page.push("</div>");
}

fn render_cell(slot: &DisplaySlot, points: &[String]) -> String {
    let position = match slot.region {
        Region::GridCell { row, col } => format!(" row-{row} col-{col}"),
        Region::Tab { .. } => String::new(),
    };

    let mut html = format!(
        "<div class='grid-cell{position}' data-topic='{}'><h3>{}</h3><ul>",
        slot.topic,
        html_escape(&slot.title)
    );
    for (idx, point) in points.iter().enumerate() {
        html.push_str(&format!(
            "<li style='--order:{idx}'>{}</li>",
            html_escape(point)
        ));
    }
    html.push_str("</ul></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::slots::display_slots;
    use crate::render::Layout;
    use std::collections::BTreeMap;

    fn slots() -> Vec<DisplaySlot> {
        display_slots(&["One", "Two", "Three", "Four & More"].map(String::from), Layout::Grid)
    }

    #[test]
    fn test_cells_carry_order_and_escape_text() {
        let mut topics = BTreeMap::new();
        topics.insert(
            1,
            vec!["Alert reach".to_string(), "<script>x</script>".to_string()],
        );
        let digest = TopicDigest::new(topics);

        let mut page = RenderedPage::new();
        render_grid(&mut page, &slots(), &digest);
        assert_eq!(page.paced_count(), 0);
        let html = page.into_html();

        assert!(html.contains("<li style='--order:0'>Alert reach</li>"));
        assert!(html.contains("<li style='--order:1'>&lt;script&gt;x&lt;/script&gt;</li>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("<h3>Four &amp; More</h3>"));
        assert!(html.contains("class='grid-cell row-1 col-1' data-topic='4'"));
    }

    #[test]
    fn test_absent_topics_render_empty_lists_and_extras_are_dropped() {
        let mut topics = BTreeMap::new();
        topics.insert(5, vec!["Hidden topic point".to_string()]);
        let digest = TopicDigest::new(topics);

        let mut page = RenderedPage::new();
        render_grid(&mut page, &slots(), &digest);
        let html = page.into_html();

        assert_eq!(html.matches("<ul></ul>").count(), 4);
        assert!(!html.contains("Hidden topic point"));
    }
}
