use crate::models::topic::TopicDigest;
use crate::render::escape::html_escape;
use crate::render::page::RenderedPage;
use crate::render::slots::{DisplaySlot, Region};

/// Renders one tab per slot; only the checked tab's panel is visible.
///
/// Every list item is a paced fragment, so items appear one by one as the
/// page streams.
pub fn render_tabs(page: &mut RenderedPage, slots: &[DisplaySlot], digest: &TopicDigest) {
    let tabs: Vec<(u8, &DisplaySlot)> = slots
        .iter()
        .filter_map(|slot| match slot.region {
            Region::Tab { index } => Some((index, slot)),
            Region::GridCell { .. } => None,
        })
        .collect();

    page.push("<div class='tabs'>");
    for (index, _) in &tabs {
        let checked = if *index == 0 { " checked" } else { "" };
        page.push(format!(
            "<input type='radio' name='topic-tabs' id='tab-{index}'{checked}>"
        ));
    }

    page.push("<nav class='tab-bar'>");
    for (index, slot) in &tabs {
        page.push(format!(
            "<label for='tab-{index}'>{}</label>",
            html_escape(&slot.title)
        ));
    }
    page.push("</nav><div class='tab-panels'>");

    for (index, slot) in &tabs {
        page.push(format!(
            "<section class='tab-panel panel-{index}' data-topic='{}'><h3 class='fade-title'>{}</h3><ul>",
            slot.topic,
            html_escape(&slot.title)
        ));
        for point in digest.points(slot.topic) {
            page.push_paced(format!("<li><b>{}</b></li>", html_escape(point)));
        }
        page.push("</ul></section>");
    }
    page.push("</div></div>");
}
