//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::Route;
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Routes
    // ─────────────────────────────────────────────────────────────────────────
    /// Go to a route, remembering the current one
    Navigate(Route),
    /// Return to the previous route
    GoBack,

    // ─────────────────────────────────────────────────────────────────────────
    // Gallery
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the lightbox at a photo index
    OpenGallery(usize),
    /// Advance to the next photo (wraps)
    NextPhoto,
    /// Step back to the previous photo (wraps)
    PrevPhoto,
    /// Close the lightbox
    CloseGallery,

    // ─────────────────────────────────────────────────────────────────────────
    // Message Dialog
    // ─────────────────────────────────────────────────────────────────────────
    /// "Request Info" on the contact card
    RequestInfo,
    /// "Schedule Viewing" on the contact card
    ScheduleViewing,
    /// "View payment breakdown" on the payment card
    ShowPaymentBreakdown,
    /// Dismiss the message dialog
    CloseDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the search box
    EnterSearchMode,
    /// Leave the search box
    ExitSearchMode,
    /// Add character to the search box
    SearchInput(char),
    /// Remove last character from the search box
    SearchBackspace,
    /// Submit the search box
    SubmitSearch,

    // ─────────────────────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip the "Save" heart
    ToggleSaved,
    /// Scroll up one line
    ScrollUp,
    /// Scroll down one line
    ScrollDown,
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // Print View
    // ─────────────────────────────────────────────────────────────────────────
    /// Send the flyer to the print command
    PrintFlyer,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the top app-level modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::Navigate(route) => write!(f, "Navigate({})", route),
            Action::GoBack => write!(f, "GoBack"),
            Action::OpenGallery(index) => write!(f, "OpenGallery({})", index),
            Action::NextPhoto => write!(f, "NextPhoto"),
            Action::PrevPhoto => write!(f, "PrevPhoto"),
            Action::CloseGallery => write!(f, "CloseGallery"),
            Action::RequestInfo => write!(f, "RequestInfo"),
            Action::ScheduleViewing => write!(f, "ScheduleViewing"),
            Action::ShowPaymentBreakdown => write!(f, "ShowPaymentBreakdown"),
            Action::CloseDialog => write!(f, "CloseDialog"),
            Action::EnterSearchMode => write!(f, "EnterSearchMode"),
            Action::ExitSearchMode => write!(f, "ExitSearchMode"),
            Action::SearchInput(c) => write!(f, "SearchInput('{}')", c),
            Action::SearchBackspace => write!(f, "SearchBackspace"),
            Action::SubmitSearch => write!(f, "SubmitSearch"),
            Action::ToggleSaved => write!(f, "ToggleSaved"),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::PrintFlyer => write!(f, "PrintFlyer"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
