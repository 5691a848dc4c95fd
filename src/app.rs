//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to the mounted view.
//! App coordinates routes, app-level modals and the print command; the
//! views own their own interactive state.

use crate::action::Action;
use crate::component::Component;
use crate::components::{HelpDialog, ListingComponent, PrintComponent, QuitDialog};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{AssetResolver, Route, Router};
use crate::services::PrintJob;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Route history
    pub router: Router,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Views (exactly one is mounted, matching the current route)
    // ─────────────────────────────────────────────────────────────────────────
    pub listing: Option<ListingComponent>,
    pub print_view: Option<PrintComponent>,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,

    pub config: Config,
    pub assets: AssetResolver,

    /// Print command running in the background, if any
    pub print_job: Option<PrintJob>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App starting on `start`
    pub fn new(config: Config, assets: AssetResolver, start: Route) -> App {
        tracing::info!(
            "Mounting {} with asset prefix {:?}",
            start,
            assets.base_path()
        );
        let mut app = App {
            router: Router::new(start),
            modals: ModalStack::new(),
            should_quit: false,
            listing: None,
            print_view: None,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            config,
            assets,
            print_job: None,
        };
        app.mount(start);
        app
    }

    fn mount(&mut self, route: Route) {
        match route {
            Route::Listing => {
                self.listing = Some(ListingComponent::new(self.assets.clone()));
            }
            Route::Print => {
                self.print_view = Some(PrintComponent::new(
                    self.assets.clone(),
                    self.config.flyer_width,
                ));
            }
        }
    }

    fn unmount_current(&mut self) {
        if let Some(mut view) = self.listing.take() {
            view.unmount();
        }
        if let Some(mut view) = self.print_view.take() {
            view.unmount();
        }
    }

    /// Swap the mounted view after the router has moved
    fn remount(&mut self, from: Route) {
        let to = self.router.current();
        tracing::info!("Route {} -> {}", from.path(), to.path());
        self.unmount_current();
        self.modals.clear();
        self.help_dialog.reset();
        self.mount(to);
    }

    fn current_view(&mut self) -> Option<&mut dyn Component> {
        match self.router.current() {
            Route::Listing => self.listing.as_mut().map(|v| v as &mut dyn Component),
            Route::Print => self.print_view.as_mut().map(|v| v as &mut dyn Component),
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    /// Start the print command; the outcome is picked up on a later tick
    fn print_flyer(&mut self) {
        let Some(view) = self.print_view.as_mut() else {
            return;
        };
        if let Some(job) = &self.print_job {
            view.status = Some(format!("Still printing via `{}`...", job.command()));
            return;
        }
        let job = PrintJob::spawn(
            self.config.print_command.clone(),
            self.config.print_args.clone(),
            view.flyer_text(),
        );
        view.status = Some(format!("Printing via `{}`...", job.command()));
        self.print_job = Some(job);
    }

    fn poll_print_job(&mut self) {
        let Some(result) = self.print_job.as_ref().and_then(|job| job.poll()) else {
            return;
        };
        let Some(job) = self.print_job.take() else {
            return;
        };
        let at = Local::now().format("%H:%M:%S");
        let status = match result {
            Ok(_) => {
                tracing::info!(
                    "Flyer sent to `{}` in {:.1}s",
                    job.command(),
                    job.elapsed().as_secs_f32()
                );
                format!("Flyer sent to `{}` at {}", job.command(), at)
            }
            Err(e) => {
                tracing::warn!("Printing failed: {:#}", e);
                format!("Print failed at {}: {:#}", at, e)
            }
        };
        // The user may have gone back to the listing meanwhile
        if let Some(view) = self.print_view.as_mut() {
            view.status = Some(status);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::ForceQuit));
        }
        if let Some(modal) = self.modals.top().cloned() {
            return self.handle_modal_key_event(&modal, key);
        }
        match self.current_view() {
            Some(view) => view.handle_key_event(key),
            None => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if !self.modals.is_empty() {
            return Ok(None);
        }
        match self.current_view() {
            Some(view) => view.handle_mouse_event(mouse),
            None => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => self.poll_print_job(),
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.unmount_current();
                self.should_quit = true;
                tracing::info!("Quitting");
            }

            // ─────────────────────────────────────────────────────────────────
            // Routes
            // ─────────────────────────────────────────────────────────────────
            Action::Navigate(to) => {
                let from = self.router.current();
                if self.router.navigate(to) {
                    self.remount(from);
                }
            }
            Action::GoBack => {
                let from = self.router.current();
                self.router.back();
                self.remount(from);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenHelp => {
                self.help_dialog.reset();
                self.modals.push(Modal::Help);
            }
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::CloseModal => {
                self.modals.pop();
            }

            Action::PrintFlyer => self.print_flyer(),

            // Everything else belongs to the mounted view
            other => {
                if let Some(view) = self.current_view() {
                    return view.update(other);
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if let Some(view) = self.current_view() {
            view.draw(frame, area)?;
        }

        if let Some(modal) = self.modals.top().cloned() {
            match modal {
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn app(start: Route) -> App {
        App::new(Config::default(), AssetResolver::default(), start)
    }

    /// Feed a key through the same path as the main loop
    fn press(app: &mut App, code: KeyCode) {
        let mut next = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
        while let Some(action) = next {
            next = app.update(action).unwrap();
        }
    }

    fn listing(app: &App) -> &ListingComponent {
        app.listing.as_ref().unwrap()
    }

    fn print_status(app: &App) -> String {
        app.print_view.as_ref().unwrap().status.clone().unwrap()
    }

    /// Tick like the main loop until the background print reports back
    fn finish_print(app: &mut App) {
        for _ in 0..500 {
            app.update(Action::Tick).unwrap();
            if app.print_job.is_none() {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        panic!("print never finished");
    }

    fn print_config(program: &str, args: &[&str]) -> Config {
        Config {
            print_command: program.to_string(),
            print_args: args.iter().map(|a| a.to_string()).collect(),
            ..Config::default()
        }
    }

    #[test]
    fn test_browse_gallery_and_save() {
        let mut app = app(Route::Listing);
        assert!(!listing(&app).gallery.is_open());
        assert!(!listing(&app).dialog.is_visible());
        assert!(!listing(&app).saved);

        press(&mut app, KeyCode::Char('3'));
        assert!(listing(&app).gallery.is_open());
        assert_eq!(listing(&app).gallery.current_index(), 2);
        assert_eq!(listing(&app).gallery.caption(), "3 / 9");

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(listing(&app).gallery.caption(), "5 / 9");

        press(&mut app, KeyCode::Esc);
        assert!(!listing(&app).gallery.is_open());
        assert!(!listing(&app).has_gallery_listener());

        press(&mut app, KeyCode::Char('s'));
        assert!(listing(&app).saved);
        press(&mut app, KeyCode::Char('s'));
        assert!(!listing(&app).saved);
    }

    #[test]
    fn test_print_route_and_back_remounts_listing() {
        let mut app = app(Route::Listing);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.router.current(), Route::Print);
        assert!(app.listing.is_none());
        assert!(app.print_view.is_some());

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.router.current(), Route::Listing);
        assert!(app.print_view.is_none());
        assert!(!listing(&app).saved);
    }

    #[test]
    fn test_back_without_history_lands_on_listing() {
        let mut app = app(Route::Print);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.router.current(), Route::Listing);
        assert!(app.listing.is_some());
    }

    #[test]
    fn test_leaving_listing_releases_gallery_listener() {
        let mut app = app(Route::Listing);
        press(&mut app, KeyCode::Char('1'));
        assert!(listing(&app).has_gallery_listener());

        app.update(Action::Navigate(Route::Print)).unwrap();
        app.update(Action::GoBack).unwrap();
        assert!(!listing(&app).gallery.is_open());
        assert!(!listing(&app).has_gallery_listener());
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let mut app = app(Route::Listing);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_swallows_view_keys() {
        let mut app = app(Route::Listing);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modals.top(), Some(&Modal::Help));

        press(&mut app, KeyCode::Char('s'));
        assert!(!listing(&app).saved);

        press(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_print_reports_failure_on_status_line() {
        let config = print_config("sh", &["-c", "echo 'lp: no default destination' >&2; exit 2"]);
        let mut app = App::new(config, AssetResolver::default(), Route::Print);

        press(&mut app, KeyCode::Char('p'));
        finish_print(&mut app);
        let status = print_status(&app);
        assert!(status.starts_with("Print failed"));
        assert!(status.contains("no default destination"));
    }

    #[cfg(unix)]
    #[test]
    fn test_print_reports_success_on_status_line() {
        let mut app = App::new(print_config("cat", &[]), AssetResolver::default(), Route::Print);

        press(&mut app, KeyCode::Char('p'));
        finish_print(&mut app);
        assert!(print_status(&app).starts_with("Flyer sent to `cat` at "));
    }

    #[cfg(unix)]
    #[test]
    fn test_slow_print_does_not_block_input() {
        let mut app = App::new(print_config("sleep", &["3"]), AssetResolver::default(), Route::Print);

        let started = std::time::Instant::now();
        press(&mut app, KeyCode::Char('p'));
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
        assert_eq!(print_status(&app), "Printing via `sleep 3`...");

        // A second request while busy does not start another job
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(print_status(&app), "Still printing via `sleep 3`...");

        app.update(Action::Tick).unwrap();
        assert!(app.print_job.is_some());

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.router.current(), Route::Listing);
        assert!(started.elapsed() < std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_draw_listing_with_help_overlay() {
        let mut app = app(Route::Listing);
        app.update(Action::OpenHelp).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f, f.area()).unwrap()).unwrap();

        let screen = crate::components::buffer_text(terminal.backend().buffer());
        assert!(screen.contains("Keyboard Shortcuts"));
    }
}
