use crate::COLLAPSE_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapsibleCard {
    collapsible: bool,
    collapsed: bool,
}

impl CollapsibleCard {
    pub fn measure(content_height: u32) -> Self {
        Self::measure_with_threshold(content_height, COLLAPSE_THRESHOLD)
    }

    /// Short content never collapses and hides its toggle and divider.
    pub fn measure_with_threshold(content_height: u32, threshold: u32) -> Self {
        let collapsible = content_height > threshold;
        Self {
            collapsible,
            collapsed: collapsible,
        }
    }

    pub fn toggle_visible(&self) -> bool {
        self.collapsible
    }

    pub fn divider_visible(&self) -> bool {
        self.collapsible
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns the new `expanded` flag; a no-op for short content.
    pub fn toggle(&mut self) -> bool {
        if self.collapsible {
            self.collapsed = !self.collapsed;
        }
        !self.collapsed
    }
}
