//! Help dialog component
//!
//! Lists the key bindings for both views and the overlays.

use crate::action::Action;
use crate::component::Component;
use crate::components::inset;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl HelpDialog {
    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(10);
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let dialog_area = inset(area, 4);
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:12}", key),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Listing");
    add_shortcut(&mut lines, "1 - 9", "Open photo in the gallery");
    add_shortcut(&mut lines, "v", "View all photos");
    add_shortcut(&mut lines, "s", "Save / unsave listing");
    add_shortcut(&mut lines, "i", "Request info from the agent");
    add_shortcut(&mut lines, "c", "Schedule a viewing");
    add_shortcut(&mut lines, "m", "Payment breakdown");
    add_shortcut(&mut lines, "p", "Print listing flyer");
    add_shortcut(&mut lines, "j / ↓", "Scroll down");
    add_shortcut(&mut lines, "k / ↑", "Scroll up");
    add_shortcut(&mut lines, "PgDn / PgUp", "Scroll one page");

    add_section(&mut lines, "Gallery");
    add_shortcut(&mut lines, "→", "Next photo");
    add_shortcut(&mut lines, "←", "Previous photo");
    add_shortcut(&mut lines, "Esc", "Close gallery");

    add_section(&mut lines, "Search");
    add_shortcut(&mut lines, "/", "Focus search box");
    add_shortcut(&mut lines, "Enter", "Search");
    add_shortcut(&mut lines, "Esc", "Leave search box");

    add_section(&mut lines, "Dialogs");
    add_shortcut(&mut lines, "Enter", "Understood");
    add_shortcut(&mut lines, "Esc / x", "Close");

    add_section(&mut lines, "Flyer");
    add_shortcut(&mut lines, "p", "Print flyer");
    add_shortcut(&mut lines, "b / Esc", "Back to listing");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}
