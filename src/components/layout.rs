//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Listing screen layout areas
pub struct ListingLayout {
    pub nav: Rect,
    pub main: Rect,
    pub sidebar: Rect,
    pub help: Rect,
}

/// Print screen layout areas
pub struct PrintLayout {
    pub toolbar: Rect,
    pub paper: Rect,
    pub status: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Area inset by `margin` cells on every side
pub fn inset(area: Rect, margin: u16) -> Rect {
    Rect::new(
        area.x + margin.min(area.width / 2),
        area.y + margin.min(area.height / 2),
        area.width.saturating_sub(margin * 2),
        area.height.saturating_sub(margin * 2),
    )
}

/// Nav bar on top, main column and sidebar, help bar at the bottom
///
/// The sidebar collapses below 90 columns and the main column takes the
/// full width.
pub fn calculate_listing_layout(area: Rect) -> ListingLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let (main, sidebar) = if area.width >= 90 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
            .split(rows[1]);
        (cols[0], cols[1])
    } else {
        (rows[1], Rect::new(rows[1].x, rows[1].y, 0, 0))
    };

    ListingLayout {
        nav: rows[0],
        main,
        sidebar,
        help: rows[2],
    }
}

/// Toolbar on top, paper-width column in the middle, status line at the bottom
pub fn calculate_print_layout(area: Rect, paper_width: u16) -> PrintLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let width = paper_width.min(rows[1].width);
    let paper = Rect::new(
        rows[1].x + (rows[1].width - width) / 2,
        rows[1].y,
        width,
        rows[1].height,
    );

    PrintLayout {
        toolbar: rows[0],
        paper,
        status: rows[2],
    }
}
