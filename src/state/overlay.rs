//! Detail overlay state for the portfolio page.
//!
//! The overlay holds at most one selected project, the gallery position
//! inside it, and the lock that keeps the page behind it from scrolling.

use tracing::{debug, warn};

use super::catalog::Catalog;
use super::data::{Project, ProjectId};

/// Suppresses background scrolling while an overlay is up.
///
/// Every acquire is matched by exactly one release, however many times the
/// overlay is told to close.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollLock {
    held: bool,
    releases: u64,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.held = true;
    }

    /// Returns `true` only for the release that actually unlocked.
    pub fn release(&mut self) -> bool {
        if !self.held {
            return false;
        }
        self.held = false;
        self.releases += 1;
        true
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// How many times scrolling has been restored.
    pub fn releases(&self) -> u64 {
        self.releases
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overlay {
    selected: Option<ProjectId>,
    image_index: usize,
    scroll: ScrollLock,
}

impl Overlay {
    /// Show `id` in the overlay, replacing any current selection.
    ///
    /// Ids that are not in the catalog are ignored; the filter is not
    /// consulted. Returns whether the overlay now shows `id`.
    pub fn open(&mut self, catalog: &Catalog, id: &ProjectId) -> bool {
        if catalog.project(id).is_none() {
            warn!(%id, "Ignoring request to open unknown project");
            return false;
        }
        if self.selected.as_ref() != Some(id) {
            self.image_index = 0;
        }
        self.selected = Some(id.clone());
        self.scroll.acquire();
        debug!(%id, "Overlay opened");
        true
    }

    /// Clear the selection. Returns `true` if something was open.
    pub fn close(&mut self) -> bool {
        let Some(id) = self.selected.take() else {
            return false;
        };
        self.image_index = 0;
        self.scroll.release();
        debug!(%id, "Overlay closed");
        true
    }

    /// The selected project, resolved against the catalog.
    pub fn selected<'a>(&self, catalog: &'a Catalog) -> Option<&'a Project> {
        self.selected.as_ref().and_then(|id| catalog.project(id))
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Jump to gallery image `index`. Out-of-range indices are ignored.
    pub fn show_image(&mut self, catalog: &Catalog, index: usize) {
        let Some(project) = self.selected(catalog) else {
            return;
        };
        if index < project.gallery().len() {
            self.image_index = index;
        }
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    #[test]
    fn test_open_and_close() {
        let catalog = catalog();
        let mut overlay = Overlay::default();
        assert!(!overlay.is_open());

        assert!(overlay.open(&catalog, &ProjectId::from("3")));
        assert_eq!(overlay.selected(&catalog).unwrap().title, "Brew & Bond Rebrand");
        assert!(overlay.scroll_lock().is_held());

        assert!(overlay.close());
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_lock().is_held());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let catalog = catalog();
        let mut overlay = Overlay::default();
        assert!(!overlay.open(&catalog, &ProjectId::from("404")));
        assert!(!overlay.is_open());
        assert!(!overlay.scroll_lock().is_held());
    }

    #[test]
    fn test_scroll_restored_exactly_once() {
        let catalog = catalog();
        let mut overlay = Overlay::default();
        overlay.open(&catalog, &ProjectId::from("1"));

        assert!(overlay.close());
        assert!(!overlay.close());
        assert!(!overlay.close());
        assert_eq!(overlay.scroll_lock().releases(), 1);
    }

    #[test]
    fn test_replacing_selection_keeps_single_lock() {
        let catalog = catalog();
        let mut overlay = Overlay::default();
        overlay.open(&catalog, &ProjectId::from("1"));
        overlay.open(&catalog, &ProjectId::from("4"));
        assert_eq!(overlay.selected(&catalog).unwrap().id, ProjectId::from("4"));

        overlay.close();
        overlay.close();
        assert_eq!(overlay.scroll_lock().releases(), 1);
    }

    #[test]
    fn test_image_index_resets_between_selections() {
        let catalog = catalog();
        let mut overlay = Overlay::default();

        overlay.open(&catalog, &ProjectId::from("1"));
        overlay.show_image(&catalog, 2);
        assert_eq!(overlay.image_index(), 2);

        overlay.close();
        overlay.open(&catalog, &ProjectId::from("4"));
        assert_eq!(overlay.image_index(), 0);
    }

    #[test]
    fn test_image_index_resets_when_switching_directly() {
        let catalog = catalog();
        let mut overlay = Overlay::default();

        overlay.open(&catalog, &ProjectId::from("1"));
        overlay.show_image(&catalog, 1);
        overlay.open(&catalog, &ProjectId::from("5"));
        assert_eq!(overlay.image_index(), 0);
    }

    #[test]
    fn test_out_of_range_image_is_ignored() {
        let catalog = catalog();
        let mut overlay = Overlay::default();

        // Project 2 has no image list, so its gallery is just the thumbnail.
        overlay.open(&catalog, &ProjectId::from("2"));
        overlay.show_image(&catalog, 1);
        assert_eq!(overlay.image_index(), 0);

        overlay.open(&catalog, &ProjectId::from("1"));
        overlay.show_image(&catalog, 3);
        assert_eq!(overlay.image_index(), 0);
    }

    #[test]
    fn test_show_image_without_selection_is_noop() {
        let catalog = catalog();
        let mut overlay = Overlay::default();
        overlay.show_image(&catalog, 1);
        assert_eq!(overlay.image_index(), 0);
    }
}
