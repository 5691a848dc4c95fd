//! Print view - the "/print" flyer
//!
//! Static flyer with two screen-only controls: back to the listing and
//! print. The flyer itself has no interactive state.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_print_layout;
use crate::model::ui::Scroll;
use crate::model::{AssetResolver, Flyer, FlyerLine, LineKind};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct PrintComponent {
    flyer: Flyer,
    assets: AssetResolver,
    width: u16,
    scroll: Scroll,
    page_height: usize,
    /// Outcome of the last print attempt
    pub status: Option<String>,
}

impl PrintComponent {
    pub fn new(assets: AssetResolver, width: u16) -> Self {
        Self {
            flyer: Flyer::starkfield(),
            assets,
            width,
            scroll: Scroll::default(),
            page_height: 10,
            status: None,
        }
    }

    /// The text handed to the print command
    pub fn flyer_text(&self) -> String {
        self.flyer.to_plain_text(&self.assets, self.width)
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }
}

fn style_for(kind: LineKind) -> Style {
    match kind {
        LineKind::Title => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LineKind::Tagline => Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
        LineKind::Badge => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LineKind::Heading => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LineKind::Stats => Style::default().fg(Color::White).bg(Color::DarkGray),
        LineKind::Rule => Style::default().fg(Color::DarkGray),
        LineKind::Body => Style::default(),
        LineKind::Muted => Style::default().fg(Color::Gray),
    }
}

fn styled(line: FlyerLine) -> Line<'static> {
    let style = style_for(line.kind);
    Line::from(Span::styled(line.text, style))
}

impl Component for PrintComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key.code {
                KeyCode::Char('c') => Some(Action::ForceQuit),
                KeyCode::Char('p') => Some(Action::PrintFlyer),
                _ => None,
            });
        }
        let action = match key.code {
            KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace => Some(Action::GoBack),
            KeyCode::Char('p') => Some(Action::PrintFlyer),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => self.scroll.up(1),
            Action::ScrollDown => self.scroll.down(1),
            Action::PageUp => self.scroll.up(self.page_height),
            Action::PageDown => self.scroll.down(self.page_height),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_print_layout(area, self.width.saturating_add(4));

        let key = |k: &'static str| {
            Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        };
        let toolbar = Paragraph::new(Line::from(vec![
            key(" b "),
            Span::styled(" ← Back to Listing ", Style::default().fg(Color::White)),
            Span::raw("   "),
            key(" p "),
            Span::styled(
                " ⎙ Print Flyer ",
                Style::default().fg(Color::Black).bg(Color::White),
            ),
        ]))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(toolbar, layout.toolbar);

        let paper_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = paper_block.inner(layout.paper);
        let lines: Vec<Line> = self
            .flyer
            .layout(&self.assets, inner.width.saturating_sub(2).min(self.width))
            .into_iter()
            .map(styled)
            .collect();
        self.page_height = (inner.height as usize).max(1);
        self.scroll.clamp(lines.len(), self.page_height);
        frame.render_widget(
            Paragraph::new(lines)
                .block(paper_block)
                .scroll((self.scroll.offset as u16, 0)),
            layout.paper,
        );

        if let Some(status) = &self.status {
            frame.render_widget(
                Paragraph::new(Span::styled(status.clone(), Style::default().fg(Color::Gray))),
                layout.status,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn press(view: &mut PrintComponent, code: KeyCode) -> Option<Action> {
        view.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_keys_map_to_back_and_print() {
        let mut view = PrintComponent::new(AssetResolver::default(), 78);
        assert_eq!(press(&mut view, KeyCode::Char('b')), Some(Action::GoBack));
        assert_eq!(press(&mut view, KeyCode::Esc), Some(Action::GoBack));
        assert_eq!(press(&mut view, KeyCode::Char('p')), Some(Action::PrintFlyer));
        assert_eq!(press(&mut view, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_flyer_text_uses_prefix_and_width() {
        let view = PrintComponent::new(AssetResolver::new("/ethanfrome"), 78);
        let text = view.flyer_text();
        assert!(text.contains("/ethanfrome/assets/qrcode.png"));
        assert!(text.lines().any(|l| l == "=".repeat(78)));
    }

    #[test]
    fn test_draw_shows_toolbar_and_flyer() {
        let mut view = PrintComponent::new(AssetResolver::default(), 78);
        view.status = Some("Sent to lp".to_string());
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| view.draw(f, f.area()).unwrap()).unwrap();

        let screen = crate::components::buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Back to Listing"));
        assert!(screen.contains("Print Flyer"));
        assert!(screen.contains("Starkfield Farmhouse Listing"));
        assert!(screen.contains("Sent to lp"));
    }

    #[test]
    fn test_scroll_clamped_on_draw() {
        let mut view = PrintComponent::new(AssetResolver::default(), 78);
        for _ in 0..500 {
            view.update(Action::ScrollDown).unwrap();
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| view.draw(f, f.area()).unwrap()).unwrap();
        assert!(view.scroll_offset() < 500);
    }
}
