//! Gallery filter + lightbox viewer state.
//!
//! The gallery narrows the fixed image list by category and lets the user
//! browse the filtered subset in a modal viewer.  The viewer index always
//! points into the *currently filtered* sequence; switching category while
//! the viewer is open remaps it by image id (or closes it when the shown
//! image left the subset), so a stale index can never survive a filter
//! change.

use crate::core::clinic::{GalleryImage, ImageCategory};

/// Active category tab, including the synthetic "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ImageCategory),
}

impl CategoryFilter {
    /// Tab order shown in the UI.
    pub const ALL: &[CategoryFilter] = &[
        CategoryFilter::All,
        CategoryFilter::Only(ImageCategory::Clinic),
        CategoryFilter::Only(ImageCategory::Team),
        CategoryFilter::Only(ImageCategory::BeforeAfter),
        CategoryFilter::Only(ImageCategory::Equipment),
    ];

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Photos",
            CategoryFilter::Only(cat) => cat.label(),
        }
    }

    fn matches(self, image: &GalleryImage) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => image.category == cat,
        }
    }
}

/// Gallery widget state: filter tab, grid cursor, and the optional open
/// viewer.  `viewer` is an index into the filtered sequence.
#[derive(Debug, Default)]
pub struct GalleryState {
    pub filter: CategoryFilter,
    pub cursor: usize,
    pub viewer: Option<usize>,
}

impl GalleryState {
    /// The filtered sequence, original order preserved.
    pub fn filtered<'a>(&self, images: &'a [GalleryImage]) -> Vec<&'a GalleryImage> {
        images.iter().filter(|img| self.filter.matches(img)).collect()
    }

    pub fn filtered_len(&self, images: &[GalleryImage]) -> usize {
        images.iter().filter(|img| self.filter.matches(img)).count()
    }

    /// The image currently shown in the viewer, if any.
    pub fn viewer_image<'a>(&self, images: &'a [GalleryImage]) -> Option<&'a GalleryImage> {
        let idx = self.viewer?;
        self.filtered(images).get(idx).copied()
    }

    /// Switch the active category.  An open viewer follows the shown image
    /// into the new subset by id, or closes when the image is filtered out.
    /// The grid cursor is clamped into the new subset.
    pub fn select_filter(&mut self, images: &[GalleryImage], filter: CategoryFilter) {
        if filter == self.filter {
            return;
        }
        let shown_id = self.viewer_image(images).map(|img| img.id);
        self.filter = filter;

        let filtered = self.filtered(images);
        self.viewer = shown_id
            .and_then(|id| filtered.iter().position(|img| img.id == id));
        self.cursor = self.cursor.min(filtered.len().saturating_sub(1));
    }

    /// Open the viewer on `image_id` if it is part of the filtered sequence;
    /// otherwise do nothing.
    pub fn open(&mut self, images: &[GalleryImage], image_id: &str) {
        if let Some(idx) = self
            .filtered(images)
            .iter()
            .position(|img| img.id == image_id)
        {
            self.viewer = Some(idx);
        }
    }

    /// Open the viewer on the image under the grid cursor.
    pub fn open_at_cursor(&mut self, images: &[GalleryImage]) {
        if self.cursor < self.filtered_len(images) {
            self.viewer = Some(self.cursor);
        }
    }

    pub fn close(&mut self) {
        self.viewer = None;
    }

    /// Advance the viewer with wraparound.  No-op when the filtered sequence
    /// has one image or fewer.
    pub fn next(&mut self, images: &[GalleryImage]) {
        self.step(images, 1);
    }

    /// Retreat the viewer with wraparound.
    pub fn prev(&mut self, images: &[GalleryImage]) {
        self.step(images, -1);
    }

    fn step(&mut self, images: &[GalleryImage], dir: isize) {
        let len = self.filtered_len(images);
        if len <= 1 {
            return;
        }
        if let Some(idx) = self.viewer {
            let next = (idx as isize + dir).rem_euclid(len as isize) as usize;
            self.viewer = Some(next);
            // Keep the grid cursor on the shown image.
            self.cursor = next;
        }
    }

    /// Move the grid cursor, clamped to the filtered sequence bounds.
    pub fn move_cursor(&mut self, images: &[GalleryImage], dir: isize) {
        let len = self.filtered_len(images);
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let next = (self.cursor as isize + dir).clamp(0, len as isize - 1);
        self.cursor = next as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clinic::ClinicData;

    fn images() -> Vec<GalleryImage> {
        ClinicData::sample().gallery
    }

    #[test]
    fn filter_preserves_order_and_category() {
        let images = images();
        let state = GalleryState {
            filter: CategoryFilter::Only(ImageCategory::Equipment),
            ..GalleryState::default()
        };
        let filtered = state.filtered(&images);
        assert_eq!(filtered.len(), 3);
        let ids: Vec<_> = filtered.iter().map(|img| img.id).collect();
        assert_eq!(ids, vec!["5", "9", "12"]);
        assert!(filtered
            .iter()
            .all(|img| img.category == ImageCategory::Equipment));
    }

    #[test]
    fn all_filter_passes_everything_through() {
        let images = images();
        let state = GalleryState::default();
        assert_eq!(state.filtered_len(&images), images.len());
    }

    #[test]
    fn open_by_id_agrees_with_filtered_position() {
        let images = images();
        let mut state = GalleryState::default();
        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Team));
        state.open(&images, "7");
        assert_eq!(state.viewer, Some(1));
        assert_eq!(state.viewer_image(&images).unwrap().id, "7");
    }

    #[test]
    fn open_on_absent_id_is_a_noop() {
        let images = images();
        let mut state = GalleryState::default();
        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Team));
        state.open(&images, "5"); // an equipment image
        assert_eq!(state.viewer, None);
    }

    #[test]
    fn next_wraps_around_filtered_length() {
        let images = images();
        let mut state = GalleryState::default();
        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Equipment));
        state.open(&images, "5");
        let start = state.viewer;

        for _ in 0..3 {
            state.next(&images);
            let idx = state.viewer.unwrap();
            assert!(idx < 3);
        }
        assert_eq!(state.viewer, start);
    }

    #[test]
    fn prev_wraps_from_zero_to_end() {
        let images = images();
        let mut state = GalleryState::default();
        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Equipment));
        state.open(&images, "5");
        state.prev(&images);
        assert_eq!(state.viewer, Some(2));
    }

    #[test]
    fn navigation_is_disabled_on_single_image() {
        let images = vec![images()[0]];
        let mut state = GalleryState::default();
        state.open(&images, "1");
        state.next(&images);
        state.prev(&images);
        assert_eq!(state.viewer, Some(0));
    }

    #[test]
    fn filter_change_remaps_open_viewer_by_id() {
        let images = images();
        let mut state = GalleryState::default();
        state.open(&images, "9"); // equipment, index 8 under "all"
        assert_eq!(state.viewer, Some(8));

        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Equipment));
        assert_eq!(state.viewer, Some(1));
        assert_eq!(state.viewer_image(&images).unwrap().id, "9");
    }

    #[test]
    fn filter_change_closes_viewer_when_image_leaves_subset() {
        let images = images();
        let mut state = GalleryState::default();
        state.open(&images, "9");
        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Team));
        assert_eq!(state.viewer, None);
    }

    #[test]
    fn empty_filtered_set_never_panics() {
        let images: Vec<GalleryImage> = Vec::new();
        let mut state = GalleryState::default();
        assert_eq!(state.filtered_len(&images), 0);
        state.open(&images, "1");
        state.open_at_cursor(&images);
        state.next(&images);
        state.prev(&images);
        state.move_cursor(&images, 1);
        state.move_cursor(&images, -1);
        assert_eq!(state.viewer, None);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_is_clamped_when_subset_shrinks() {
        let images = images();
        let mut state = GalleryState::default();
        state.cursor = 11;
        state.select_filter(&images, CategoryFilter::Only(ImageCategory::Equipment));
        assert_eq!(state.cursor, 2);
    }
}
