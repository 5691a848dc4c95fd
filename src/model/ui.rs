//! Presentation state for the listing view

/// Which part of the listing view receives plain keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

/// The "Search Starkfield, MA" box
///
/// Text is echoed back to the user and never inspected.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub text: String,
}

impl SearchBox {
    pub const PLACEHOLDER: &'static str = "Search Starkfield, MA";

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }
}

/// Vertical scroll position clamped to the content height
#[derive(Debug, Clone, Copy, Default)]
pub struct Scroll {
    pub offset: usize,
}

impl Scroll {
    pub fn up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
    }

    /// Keep the offset inside `total - visible`
    pub fn clamp(&mut self, total: usize, visible: usize) {
        self.offset = self.offset.min(total.saturating_sub(visible));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_box_edits() {
        let mut search = SearchBox::default();
        search.push('e');
        search.push('l');
        search.push('m');
        search.backspace();
        assert_eq!(search.text, "el");
    }

    #[test]
    fn test_scroll_clamp() {
        let mut scroll = Scroll::default();
        scroll.up(3);
        assert_eq!(scroll.offset, 0);
        scroll.down(50);
        scroll.clamp(40, 10);
        assert_eq!(scroll.offset, 30);
        scroll.clamp(5, 10);
        assert_eq!(scroll.offset, 0);
    }
}
