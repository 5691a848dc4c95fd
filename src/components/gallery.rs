//! Lightbox overlay for the listing photos

use crate::action::Action;
use crate::model::{AssetResolver, Gallery};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Key handler that exists only while the lightbox is open
///
/// The listing acquires one when the gallery opens and drops it when the
/// gallery closes or the view unmounts. Without it, Esc and the arrow
/// keys never reach the gallery.
#[derive(Debug)]
pub struct GalleryKeyListener {
    _attached: (),
}

impl GalleryKeyListener {
    pub fn attach() -> Self {
        tracing::debug!("gallery key listener attached");
        Self { _attached: () }
    }

    /// Esc closes, Right/Left navigate; everything else is swallowed
    pub fn handle_key_event(&self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CloseGallery),
            KeyCode::Right => Some(Action::NextPhoto),
            KeyCode::Left => Some(Action::PrevPhoto),
            _ => None,
        }
    }
}

impl Drop for GalleryKeyListener {
    fn drop(&mut self) {
        tracing::debug!("gallery key listener released");
    }
}

/// Full-screen lightbox: close control, prev/next arrows, photo frame, caption
pub fn draw_gallery(frame: &mut Frame, area: Rect, gallery: &Gallery, assets: &AssetResolver) {
    let Some(photo) = gallery.current_photo() else {
        return;
    };

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let close = Paragraph::new(Line::from(vec![
        Span::styled("× ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(close, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(5),
        ])
        .split(rows[1]);

    let arrow_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let arrow_row = |r: Rect| Rect::new(r.x, r.y + r.height / 2, r.width, r.height.min(1));
    frame.render_widget(
        Paragraph::new(Span::styled("‹ ←", arrow_style)).alignment(Alignment::Center),
        arrow_row(cols[0]),
    );
    frame.render_widget(
        Paragraph::new(Span::styled("→ ›", arrow_style)).alignment(Alignment::Center),
        arrow_row(cols[2]),
    );

    let picture = vec![
        Line::from(""),
        Line::from(Span::styled(
            photo.file_name(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            photo.alt_text,
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            assets.photo(photo),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let frame_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Gray))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(
        Paragraph::new(picture)
            .block(frame_block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        cols[1],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(gallery.caption(), Style::default().fg(Color::White)))
            .alignment(Alignment::Center),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::photo::LISTING_PHOTOS;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_listener_key_contract() {
        let listener = GalleryKeyListener::attach();
        assert_eq!(listener.handle_key_event(key(KeyCode::Esc)), Some(Action::CloseGallery));
        assert_eq!(listener.handle_key_event(key(KeyCode::Right)), Some(Action::NextPhoto));
        assert_eq!(listener.handle_key_event(key(KeyCode::Left)), Some(Action::PrevPhoto));
        assert_eq!(listener.handle_key_event(key(KeyCode::Char('s'))), None);
    }

    #[test]
    fn test_draw_shows_caption_and_alt_text() {
        let mut gallery = Gallery::new(&LISTING_PHOTOS);
        gallery.open(2);
        let assets = AssetResolver::default();

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|f| draw_gallery(f, f.area(), &gallery, &assets))
            .unwrap();

        let screen = crate::components::buffer_text(terminal.backend().buffer());
        assert!(screen.contains("3 / 9"));
        assert!(screen.contains("winter-window.png"));
        assert!(screen.contains("Frosted window overlooking"));
    }
}
