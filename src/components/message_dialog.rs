//! Message dialog overlay
//!
//! Title bar with a close control, the message lines, and an
//! "Understood" button. Both controls dismiss the dialog.

use crate::action::Action;
use crate::components::centered_popup;
use crate::model::DialogContent;
use crate::model::flyer::wrap;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;

/// Esc or `x` is the close control; Enter presses "Understood"
pub fn dialog_key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Enter => Some(Action::CloseDialog),
        _ => None,
    }
}

pub fn draw_message_dialog(frame: &mut Frame, area: Rect, content: &DialogContent) {
    let text_width = DIALOG_WIDTH.saturating_sub(6) as usize;

    let mut lines = vec![Line::from("")];
    for (i, message) in content.lines.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for row in wrap(message, text_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", row),
                Style::default().fg(Color::White),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(
        Line::from(vec![
            Span::styled(
                "  Understood  ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Enter", Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center),
    );

    let height = (lines.len() as u16 + 2).min(area.height);
    let popup_area = centered_popup(area, DIALOG_WIDTH, height);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", content.title))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .title(
            ratatui::widgets::block::Title::from(Span::styled(
                " × Esc ",
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Right),
        );

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
