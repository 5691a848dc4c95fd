//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod gallery;
pub mod help_dialog;
pub mod layout;
pub mod listing;
pub mod message_dialog;
pub mod print_view;
pub mod quit_dialog;

pub use help_dialog::HelpDialog;
pub use layout::{calculate_listing_layout, calculate_print_layout, centered_popup, inset};
pub use listing::ListingComponent;
pub use print_view::PrintComponent;
pub use quit_dialog::QuitDialog;

/// Flatten a rendered buffer into one string per row, for assertions
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
