use crate::types::ColoringPage;

/// Append-only snapshot log enabling undo by truncation.
///
/// Every entry is a deep copy; the live page is never aliased. Once `reset`
/// has run the stack never becomes empty — the original generated page is the
/// floor that undo cannot remove.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    snapshots: Vec<ColoringPage>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the stack and seed it with exactly one snapshot. Used when a new
    /// photo is loaded.
    pub fn reset(&mut self, initial: &ColoringPage) {
        self.snapshots.clear();
        self.snapshots.push(initial.snapshot());
    }

    /// Append a deep copy of the page.
    pub fn push(&mut self, page: &ColoringPage) {
        self.snapshots.push(page.snapshot());
    }

    /// Remove the most recent snapshot and return the one now on top.
    ///
    /// No-op returning `None` while only the initial snapshot remains (or the
    /// stack was never seeded).
    pub fn undo(&mut self) -> Option<&ColoringPage> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last()
    }

    /// The snapshot currently on top.
    pub fn current(&self) -> Option<&ColoringPage> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn page(shade: u8) -> ColoringPage {
        ColoringPage::new(image::RgbImage::from_pixel(4, 4, Rgb([shade, shade, shade])))
    }

    #[test]
    fn test_undo_on_single_entry_is_noop() {
        let mut history = HistoryStack::new();
        history.reset(&page(0));

        assert!(history.undo().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&page(0)));
    }

    #[test]
    fn test_undo_restores_previous_and_shrinks_by_one() {
        let mut history = HistoryStack::new();
        history.reset(&page(0));
        history.push(&page(1));
        history.push(&page(2));
        assert_eq!(history.len(), 3);

        let restored = history.undo().expect("undo past two entries");
        assert_eq!(restored, &page(1));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_stack_never_empties() {
        let mut history = HistoryStack::new();
        history.reset(&page(0));
        history.push(&page(1));

        for _ in 0..10 {
            history.undo();
        }
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&page(0)));
    }

    #[test]
    fn test_reset_replaces_everything() {
        let mut history = HistoryStack::new();
        history.reset(&page(0));
        history.push(&page(1));

        history.reset(&page(7));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&page(7)));
    }

    #[test]
    fn test_snapshots_do_not_alias_the_source() {
        let mut live = page(0);
        let mut history = HistoryStack::new();
        history.reset(&live);

        live.image_mut().put_pixel(0, 0, Rgb([255, 0, 0]));
        assert_eq!(history.current(), Some(&page(0)));
    }
}
