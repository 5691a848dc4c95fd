//! Starkfield - a terminal listing for the Starkfield farmhouse
//!
//! This is the main entry point for the listing application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::{Config, BASE_PATH_ENV};
use crate::model::photo::PRODUCTION_BASE_PATH;
use crate::model::{AssetResolver, Flyer, Route};
use crate::tui::Tui;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::event::Event;
use std::time::Duration;

/// Starkfield - the farmhouse listing in your terminal
#[derive(Parser, Debug)]
#[command(name = "starkfield")]
#[command(about = "Browse the Starkfield farmhouse listing and print its flyer", long_about = None)]
struct Args {
    /// View to open on start: a name (listing, print) or a path (/, /print)
    #[arg(short, long, value_parser = parse_route, default_value = "listing")]
    route: Route,

    /// Path prefix prepended to every asset reference
    #[arg(long, value_name = "PREFIX", conflicts_with = "production")]
    base_path: Option<String>,

    /// Use the production deployment prefix
    #[arg(long)]
    production: bool,

    /// Write the flyer as plain text to stdout and exit
    #[arg(long)]
    flyer: bool,

    /// Write the current settings to ~/.starkfield/config.json and exit
    #[arg(long)]
    init_config: bool,
}

fn parse_route(value: &str) -> Result<Route, String> {
    Route::from_path(value)
        .or_else(|| Route::from_str(value, true).ok())
        .ok_or_else(|| format!("unknown route `{}` (expected listing, print, / or /print)", value))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is best effort; the listing works without it
    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let config = Config::load();
    if args.init_config {
        config.save()?;
        if let Some(dir) = Config::config_dir() {
            println!("Wrote {}", dir.join("config.json").display());
        }
        return Ok(());
    }

    let cli_base = if args.production {
        Some(PRODUCTION_BASE_PATH.to_string())
    } else {
        args.base_path.clone()
    };
    let env_base = std::env::var(BASE_PATH_ENV).ok();
    let assets =
        AssetResolver::new(&config.resolve_base_path(cli_base.as_deref(), env_base.as_deref()));

    if args.flyer {
        print!("{}", Flyer::starkfield().to_plain_text(&assets, config.flyer_width));
        return Ok(());
    }

    // Setup terminal
    Tui::install_panic_hook();
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new(config, assets, args.route);

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting after error: {:#}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!("Draw error: {:#}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_accepts_names_and_paths() {
        assert_eq!(parse_route("print"), Ok(Route::Print));
        assert_eq!(parse_route("/print"), Ok(Route::Print));
        assert_eq!(parse_route("/"), Ok(Route::Listing));
        assert!(parse_route("/nowhere").is_err());
    }

    #[test]
    fn test_base_path_conflicts_with_production() {
        let result = Args::try_parse_from(["starkfield", "--production", "--base-path", "/x"]);
        assert!(result.is_err());

        let args = Args::try_parse_from(["starkfield", "-r", "print", "--flyer"]).unwrap();
        assert_eq!(args.route, Route::Print);
        assert!(args.flyer);
    }
}
