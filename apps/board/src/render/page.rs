/// One piece of markup in the order it is sent to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    /// The stream pauses after this fragment before sending the next one.
    pub pace_after: bool,
}

/// A rendered page kept as fragments so it can be streamed with pacing.
#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    fragments: Vec<Fragment>,
}

impl RenderedPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, html: impl Into<String>) {
        let html = html.into();
        // Merge consecutive unpaced markup to keep the stream chunk count low.
        match self.fragments.last_mut() {
            Some(last) if !last.pace_after => last.html.push_str(&html),
            _ => self.fragments.push(Fragment {
                html,
                pace_after: false,
            }),
        }
    }

    pub fn push_paced(&mut self, html: impl Into<String>) {
        self.push(html);
        if let Some(last) = self.fragments.last_mut() {
            last.pace_after = true;
        }
    }

    #[cfg(test)]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn into_fragments(self) -> Vec<Fragment> {
        self.fragments
    }

    #[cfg(test)]
    pub fn paced_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.pace_after).count()
    }

    /// The whole page as one string, without pacing.
    pub fn into_html(self) -> String {
        self.fragments.into_iter().map(|f| f.html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpaced_markup_is_merged() {
        let mut page = RenderedPage::new();
        page.push("<ul>");
        page.push_paced("<li>a</li>");
        page.push_paced("<li>b</li>");
        page.push("</ul>");
        page.push("<footer></footer>");

        let fragments = page.fragments();
        assert_eq!(fragments.len(), 3);
        assert_eq!(fragments[0].html, "<ul><li>a</li>");
        assert!(fragments[0].pace_after);
        assert_eq!(fragments[1].html, "<li>b</li>");
        assert_eq!(fragments[2].html, "</ul><footer></footer>");
        assert!(!fragments[2].pace_after);
        assert_eq!(page.paced_count(), 2);
        assert_eq!(page.into_html(), "<ul><li>a</li><li>b</li></ul><footer></footer>");
    }
}
