//! Modal stack for app-level overlays
//!
//! Holds the quit confirmation and the keyboard help. The listing's
//! message dialog is a single slot of its own (see `dialog`), not a
//! stack entry.

/// An app-level overlay drawn on top of the current view
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drop every overlay (used when the route changes)
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_modal_stack_top() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        assert_eq!(stack.top(), Some(&Modal::Help));
    }

    #[test]
    fn test_modal_stack_clear() {
        let mut stack = ModalStack::new();
        stack.push(Modal::QuitConfirm);
        stack.clear();
        assert!(stack.is_empty());
    }
}
