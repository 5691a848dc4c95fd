//! Listing component - the main "/" view
//!
//! Renders the property record and owns the view's interactive state:
//! the lightbox gallery, the message dialog, the saved heart and the
//! search box. All of it lives and dies with the mounted view.

use crate::action::Action;
use crate::component::Component;
use crate::components::gallery::{draw_gallery, GalleryKeyListener};
use crate::components::message_dialog::{dialog_key_action, draw_message_dialog};
use crate::components::calculate_listing_layout;
use crate::model::flyer::wrap;
use crate::model::photo::LOGO;
use crate::model::ui::{InputMode, Scroll, SearchBox};
use crate::model::{AssetResolver, DialogContent, DialogSlot, Gallery, Listing, Route};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct ListingComponent {
    listing: Listing,
    assets: AssetResolver,

    pub gallery: Gallery,
    /// Present exactly while the gallery is open
    gallery_keys: Option<GalleryKeyListener>,

    pub dialog: DialogSlot,
    pub saved: bool,

    pub input_mode: InputMode,
    pub search: SearchBox,

    scroll: Scroll,
    page_height: usize,
}

impl ListingComponent {
    pub fn new(assets: AssetResolver) -> Self {
        let listing = Listing::starkfield();
        Self {
            gallery: Gallery::new(listing.photos),
            listing,
            assets,
            gallery_keys: None,
            dialog: DialogSlot::new(),
            saved: false,
            input_mode: InputMode::Browse,
            search: SearchBox::default(),
            scroll: Scroll::default(),
            page_height: 10,
        }
    }

    #[cfg(test)]
    pub fn has_gallery_listener(&self) -> bool {
        self.gallery_keys.is_some()
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    fn open_gallery(&mut self, index: usize) {
        self.gallery.open(index);
        if self.gallery.is_open() && self.gallery_keys.is_none() {
            self.gallery_keys = Some(GalleryKeyListener::attach());
        }
        tracing::debug!("gallery open at {}", self.gallery.caption());
    }

    fn close_gallery(&mut self) {
        self.gallery.close();
        self.gallery_keys = None;
        tracing::debug!("gallery closed");
    }

    fn show_dialog(&mut self, content: DialogContent) {
        tracing::debug!("dialog '{}'", content.title);
        self.dialog.open(content);
    }

    fn handle_search_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::ExitSearchMode),
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(c)),
            _ => None,
        }
    }

    fn handle_browse_key_event(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Action::ForceQuit),
                KeyCode::Char('d') => Some(Action::PageDown),
                KeyCode::Char('u') => Some(Action::PageUp),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                (index < self.gallery.len()).then_some(Action::OpenGallery(index))
            }
            KeyCode::Char('v') => Some(Action::OpenGallery(0)),
            KeyCode::Char('s') => Some(Action::ToggleSaved),
            KeyCode::Char('/') => Some(Action::EnterSearchMode),
            KeyCode::Char('i') => Some(Action::RequestInfo),
            KeyCode::Char('c') => Some(Action::ScheduleViewing),
            KeyCode::Char('m') => Some(Action::ShowPaymentBreakdown),
            KeyCode::Char('p') => Some(Action::Navigate(Route::Print)),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Content
    // ─────────────────────────────────────────────────────────────────────────

    fn build_main_lines(&self, width: usize) -> Vec<Line<'static>> {
        let listing = &self.listing;
        let text_width = width.saturating_sub(2).max(20);
        let mut lines = Vec::new();

        lines.push(Line::from(vec![
            Span::styled(
                listing.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", listing.badge),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(""));

        for (i, photo) in listing.photos.iter().enumerate().take(5) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", i + 1),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("▣ {}", photo.alt_text), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled(" v ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("⊞ View all {} photos", listing.photos.len()),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));

        let facts = listing
            .facts
            .iter()
            .flat_map(|fact| {
                [
                    Span::styled(
                        fact.value,
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" {}    ", fact.label)),
                ]
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(facts));
        lines.push(Line::from(Span::styled(
            "─".repeat(text_width),
            Style::default().fg(Color::DarkGray),
        )));
        for row in &listing.details {
            let label = format!("{}:", row.label);
            let gap = text_width.saturating_sub(label.len() + row.value.len()).max(1);
            lines.push(Line::from(vec![
                Span::raw(label),
                Span::raw(" ".repeat(gap)),
                Span::styled(row.value, Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }

        section(&mut lines, "Property Description");
        for (i, paragraph) in listing.description.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            paragraph_lines(&mut lines, paragraph, text_width, Style::default());
        }

        section(&mut lines, "Agent Notes");
        for note in &listing.agent_notes {
            lines.push(Line::from(Span::styled(
                format!("ⓘ {}", note.heading),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )));
            paragraph_lines(&mut lines, note.body, text_width, Style::default());
            lines.push(Line::from(""));
        }

        section(&mut lines, "Property Disclosures");
        for disclosure in &listing.disclosures {
            lines.push(Line::from(Span::styled(
                disclosure.heading,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for item in &disclosure.items {
                lines.push(Line::from(format!("  • {}", item)));
            }
            lines.push(Line::from(""));
        }

        section(&mut lines, "Neighborhood & Nearby");
        for row in NEIGHBORHOOD_MAP {
            lines.push(Line::from(Span::styled(*row, Style::default().fg(Color::Gray))));
        }
        lines.push(Line::from(""));
        for landmark in &listing.neighborhood.landmarks {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<18}", landmark.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(landmark.note, Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
        paragraph_lines(&mut lines, listing.neighborhood.blurb, text_width, Style::default());

        section(&mut lines, "Similar Properties in Starkfield");
        for comp in &listing.comparables {
            lines.push(Line::from(Span::styled(
                comp.title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                comp.price,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(comp.details));
            paragraph_lines(&mut lines, comp.description, text_width, Style::default());
            lines.push(Line::from(Span::styled(
                format!("[{}]", self.assets.photo(&comp.photo)),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "─".repeat(text_width),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(
            Line::from(Span::styled(listing.credit, Style::default().fg(Color::Gray)))
                .alignment(Alignment::Center),
        );

        lines
    }

    fn build_sidebar_lines(&self, width: usize) -> Vec<Line<'static>> {
        let agent = &self.listing.agent;
        let payment = &self.listing.payment;
        let text_width = width.saturating_sub(4).max(10);
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            "Contact Agent",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("☺ {}", agent.name)));
        lines.push(Line::from(Span::styled(agent.role, Style::default().fg(Color::Gray))));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(" i ", key_style),
            Span::styled(" Request Info ", Style::default().fg(Color::White).bg(Color::Blue)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" c ", key_style),
            Span::styled(" Schedule Viewing ", Style::default().fg(Color::Blue)),
        ]));
        paragraph_lines(
            &mut lines,
            agent.availability,
            text_width,
            Style::default().fg(Color::Gray),
        );
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "Est. Monthly Payment",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            payment.amount,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(payment.footnote));
        lines.push(Line::from(vec![
            Span::styled(" m ", key_style),
            Span::styled(
                "View payment breakdown",
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
        lines.push(Line::from(""));

        lines.push(Line::from(Span::styled(
            "Share This Listing",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(vec![
            Span::styled(" p ", key_style),
            Span::styled(
                " ⎙ Print Listing Flyer ",
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        ]));

        lines
    }

    fn draw_nav(&self, frame: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(36),
                Constraint::Min(10),
                Constraint::Length(12),
            ])
            .split(area);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("⌂ ", Style::default().fg(Color::White)),
            Span::styled(
                "Starkfield Realty",
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", self.assets.photo(&LOGO)),
                    Style::default().fg(Color::DarkGray),
                )),
        );
        frame.render_widget(logo, cols[0]);

        let focused = self.input_mode == InputMode::Search;
        let search_line = if self.search.text.is_empty() && !focused {
            Line::from(Span::styled(
                format!("⌕ {}", SearchBox::PLACEHOLDER),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let cursor = if focused { "_" } else { "" };
            Line::from(format!("⌕ {}{}", self.search.text, cursor))
        };
        let search_border = if focused { Color::Blue } else { Color::Gray };
        frame.render_widget(
            Paragraph::new(search_line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(search_border)),
            ),
            cols[1],
        );

        let (heart, style) = if self.saved {
            ("♥", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        } else {
            ("♡", Style::default().fg(Color::Gray))
        };
        frame.render_widget(
            Paragraph::new(Span::styled(format!("{} Save", heart), style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            cols[2],
        );
    }

    fn draw_help_bar(&self, frame: &mut Frame, area: Rect) {
        let key = |k: &'static str| {
            Span::styled(k, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        };
        let spans = match self.input_mode {
            InputMode::Search => vec![
                key(" Enter "),
                Span::raw("Search  "),
                key(" Esc "),
                Span::raw("Leave search"),
            ],
            InputMode::Browse => vec![
                key(" 1-9 "),
                Span::raw("Photo  "),
                key(" v "),
                Span::raw("All photos  "),
                key(" s "),
                Span::raw("Save  "),
                key(" / "),
                Span::raw("Search  "),
                key(" p "),
                Span::raw("Print  "),
                key(" j/k "),
                Span::raw("Scroll  "),
                key(" ? "),
                Span::raw("Help  "),
                key(" q "),
                Span::raw("Quit"),
            ],
        };
        frame.render_widget(
            Paragraph::new(Line::from(spans))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

const NEIGHBORHOOD_MAP: &[&str] = &[
    "   (Starkfield)                          ( The Hill )",
    "      Center              |",
    "                          |                   * The Elm",
    "  [Church] ---------- [FROME FARM] - - 0.3 mi - -'",
    "                          |",
    "                          |          [Sawmill]",
];

fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
}

fn paragraph_lines(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    for row in wrap(text, width) {
        lines.push(Line::from(Span::styled(row, style)));
    }
}

impl Component for ListingComponent {
    /// Dialog first, then the gallery listener, then the search box, then the page
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.dialog.is_visible() {
            return Ok(dialog_key_action(key));
        }
        if let Some(listener) = &self.gallery_keys {
            return Ok(listener.handle_key_event(key));
        }
        let action = match self.input_mode {
            InputMode::Search => self.handle_search_key_event(key),
            InputMode::Browse => self.handle_browse_key_event(key),
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.gallery.is_open() || self.dialog.is_visible() {
            return Ok(None);
        }
        let action = match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::OpenGallery(index) => self.open_gallery(index),
            Action::NextPhoto if self.gallery.is_open() => self.gallery.next(),
            Action::PrevPhoto if self.gallery.is_open() => self.gallery.previous(),
            Action::CloseGallery => self.close_gallery(),

            Action::RequestInfo => self.show_dialog(DialogContent::contact_agent()),
            Action::ScheduleViewing => self.show_dialog(DialogContent::schedule_viewing()),
            Action::ShowPaymentBreakdown => {
                self.show_dialog(DialogContent::payment_breakdown())
            }
            Action::CloseDialog => self.dialog.close(),

            Action::EnterSearchMode => self.input_mode = InputMode::Search,
            Action::ExitSearchMode => self.input_mode = InputMode::Browse,
            Action::SearchInput(c) => self.search.push(c),
            Action::SearchBackspace => self.search.backspace(),
            Action::SubmitSearch => self.show_dialog(DialogContent::search_interrupted()),

            Action::ToggleSaved => {
                self.saved = !self.saved;
                tracing::debug!("saved = {}", self.saved);
            }
            Action::ScrollUp => self.scroll.up(1),
            Action::ScrollDown => self.scroll.down(1),
            Action::PageUp => self.scroll.up(self.page_height),
            Action::PageDown => self.scroll.down(self.page_height),
            _ => {}
        }
        Ok(None)
    }

    fn unmount(&mut self) {
        if self.gallery_keys.is_some() {
            self.close_gallery();
        }
        self.dialog.close();
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_listing_layout(area);

        self.draw_nav(frame, layout.nav);

        let main_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = main_block.inner(layout.main);
        let main_lines = self.build_main_lines(inner.width as usize);
        self.page_height = (inner.height as usize).max(1);
        self.scroll.clamp(main_lines.len(), self.page_height);
        frame.render_widget(
            Paragraph::new(main_lines)
                .block(main_block)
                .scroll((self.scroll.offset as u16, 0)),
            layout.main,
        );

        if layout.sidebar.width > 0 {
            let sidebar_lines = self.build_sidebar_lines(layout.sidebar.width as usize);
            frame.render_widget(
                Paragraph::new(sidebar_lines).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                ),
                layout.sidebar,
            );
        }

        self.draw_help_bar(frame, layout.help);

        if self.gallery.is_open() {
            draw_gallery(frame, area, &self.gallery, &self.assets);
        }
        if let Some(content) = self.dialog.current() {
            draw_message_dialog(frame, area, content);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Feed a key through handle_key_event + update, like the main loop does
    fn press(listing: &mut ListingComponent, code: KeyCode) {
        if let Some(action) = listing.handle_key_event(key(code)).unwrap() {
            listing.update(action).unwrap();
        }
    }

    fn render(listing: &mut ListingComponent, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| listing.draw(f, f.area()).unwrap()).unwrap();
        crate::components::buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_state() {
        let listing = ListingComponent::new(AssetResolver::default());
        assert!(!listing.gallery.is_open());
        assert!(!listing.dialog.is_visible());
        assert!(!listing.saved);
        assert!(!listing.has_gallery_listener());
    }

    #[test]
    fn test_digit_keys_open_matching_photo() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        press(&mut listing, KeyCode::Char('3'));
        assert!(listing.gallery.is_open());
        assert_eq!(listing.gallery.caption(), "3 / 9");
        assert!(listing.has_gallery_listener());
    }

    #[test]
    fn test_view_all_opens_first_photo() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        press(&mut listing, KeyCode::Char('v'));
        assert_eq!(listing.gallery.current_index(), 0);
        assert!(listing.gallery.is_open());
    }

    #[test]
    fn test_arrows_ignored_while_gallery_closed() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        press(&mut listing, KeyCode::Char('5'));
        press(&mut listing, KeyCode::Esc);
        assert!(!listing.has_gallery_listener());

        press(&mut listing, KeyCode::Right);
        press(&mut listing, KeyCode::Left);
        press(&mut listing, KeyCode::Right);
        press(&mut listing, KeyCode::Esc);
        assert!(!listing.gallery.is_open());
        assert_eq!(listing.gallery.current_index(), 4);
    }

    #[test]
    fn test_gallery_swallows_page_keys() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        press(&mut listing, KeyCode::Char('1'));
        press(&mut listing, KeyCode::Char('s'));
        press(&mut listing, KeyCode::Char('i'));
        assert!(!listing.saved);
        assert!(!listing.dialog.is_visible());
    }

    #[test]
    fn test_search_submit_ignores_text() {
        for text in ["", "elm tree", "how do I leave"] {
            let mut listing = ListingComponent::new(AssetResolver::default());
            press(&mut listing, KeyCode::Char('/'));
            for c in text.chars() {
                press(&mut listing, KeyCode::Char(c));
            }
            assert_eq!(listing.search.text, text);
            press(&mut listing, KeyCode::Enter);
            assert_eq!(
                listing.dialog.current(),
                Some(&DialogContent::search_interrupted())
            );
        }
    }

    #[test]
    fn test_search_mode_does_not_trigger_shortcuts() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        press(&mut listing, KeyCode::Char('/'));
        press(&mut listing, KeyCode::Char('s'));
        press(&mut listing, KeyCode::Char('3'));
        assert!(!listing.saved);
        assert!(!listing.gallery.is_open());
        press(&mut listing, KeyCode::Backspace);
        assert_eq!(listing.search.text, "s");
        press(&mut listing, KeyCode::Esc);
        assert_eq!(listing.input_mode, InputMode::Browse);
    }

    #[test]
    fn test_second_dialog_replaces_first() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        listing.update(Action::RequestInfo).unwrap();
        listing.update(Action::ShowPaymentBreakdown).unwrap();
        assert_eq!(
            listing.dialog.current(),
            Some(&DialogContent::payment_breakdown())
        );
    }

    #[test]
    fn test_dialog_takes_keys_and_closes() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        press(&mut listing, KeyCode::Char('c'));
        assert!(listing.dialog.is_visible());

        press(&mut listing, KeyCode::Char('s'));
        assert!(!listing.saved);

        press(&mut listing, KeyCode::Enter);
        assert!(!listing.dialog.is_visible());
    }

    #[test]
    fn test_unmount_releases_listener() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        listing.update(Action::OpenGallery(7)).unwrap();
        listing.update(Action::RequestInfo).unwrap();
        listing.unmount();
        assert!(!listing.has_gallery_listener());
        assert!(!listing.gallery.is_open());
        assert!(!listing.dialog.is_visible());
    }

    #[test]
    fn test_scroll_clamped_on_draw() {
        let mut listing = ListingComponent::new(AssetResolver::default());
        for _ in 0..1000 {
            listing.update(Action::ScrollDown).unwrap();
        }
        render(&mut listing, 120, 40);
        assert!(listing.scroll_offset() < 1000);
        let bottom = listing.scroll_offset();
        listing.update(Action::PageUp).unwrap();
        assert!(listing.scroll_offset() < bottom);
    }

    #[test]
    fn test_draw_listing_and_overlays() {
        let mut listing = ListingComponent::new(AssetResolver::new("/ethanfrome"));
        let screen = render(&mut listing, 120, 40);
        assert!(screen.contains("Starkfield Farmhouse Listing"));
        assert!(screen.contains("Off Market"));
        assert!(screen.contains("Search Starkfield, MA"));
        assert!(screen.contains("/ethanfrome/assets/logo22.png"));
        assert!(screen.contains("Request Info"));

        listing.update(Action::OpenGallery(4)).unwrap();
        let screen = render(&mut listing, 120, 40);
        assert!(screen.contains("5 / 9"));
        assert!(screen.contains("/ethanfrome/assets/sled-hill.png"));

        listing.update(Action::CloseGallery).unwrap();
        listing.update(Action::SubmitSearch).unwrap();
        let screen = render(&mut listing, 120, 40);
        assert!(screen.contains("Search Interrupted"));
        assert!(screen.contains("There seems to be something keeping you here..."));
    }
}
