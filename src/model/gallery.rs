//! Lightbox gallery state
//!
//! A two-state machine over a fixed, ordered photo list:
//! `Closed` and `Open(current_index)`. Navigation wraps in both
//! directions, and closing keeps the index where it was.

use super::photo::PhotoEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    photos: &'static [PhotoEntry],
    is_open: bool,
    current_index: usize,
}

impl Gallery {
    pub fn new(photos: &'static [PhotoEntry]) -> Self {
        Self {
            photos,
            is_open: false,
            current_index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Open at `index`; an index past the end lands on the last photo
    pub fn open(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        self.current_index = index.min(self.len() - 1);
        self.is_open = true;
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.len();
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        let n = self.len();
        self.current_index = (self.current_index + n - 1) % n;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn current_photo(&self) -> Option<&'static PhotoEntry> {
        self.photos.get(self.current_index())
    }

    /// One-based position caption, e.g. "3 / 9"
    pub fn caption(&self) -> String {
        format!("{} / {}", self.current_index() + 1, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::photo::LISTING_PHOTOS;

    #[test]
    fn test_initially_closed() {
        let gallery = Gallery::new(&LISTING_PHOTOS);
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_open_sets_index_and_caption() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        for k in 0..gallery.len() {
            gallery.open(k);
            assert!(gallery.is_open());
            assert_eq!(gallery.caption(), format!("{} / 9", k + 1));
            assert_eq!(gallery.current_photo(), Some(&LISTING_PHOTOS[k]));
        }
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        for start in 0..gallery.len() {
            gallery.open(start);
            for _ in 0..gallery.len() {
                gallery.next();
            }
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn test_previous_then_next_is_identity() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        for start in 0..gallery.len() {
            gallery.open(start);
            gallery.previous();
            gallery.next();
            assert_eq!(gallery.current_index(), start);
        }
    }

    #[test]
    fn test_wraps_at_both_ends() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        gallery.open(0);
        gallery.previous();
        assert_eq!(gallery.current_index(), 8);
        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_close_keeps_index() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        gallery.open(5);
        gallery.next();
        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(gallery.current_index(), 6);
    }

    #[test]
    fn test_open_clamps_out_of_range() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        gallery.open(42);
        assert_eq!(gallery.current_index(), 8);
    }

    #[test]
    fn test_empty_gallery_is_inert() {
        let mut gallery = Gallery::new(&[]);
        gallery.open(0);
        gallery.next();
        gallery.previous();
        assert!(!gallery.is_open());
        assert!(gallery.current_photo().is_none());
    }
}
