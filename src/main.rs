//! wodtrack - a workout feed in the terminal
//!
//! This is the main entry point for the wodtrack application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod logging;
mod model;
mod motion;
mod theme;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{debug, info};

fn main() -> Result<()> {
    let config = Config::load_or_default();
    if let Some(path) = logging::init(&config)? {
        info!(log = %path.display(), "wodtrack starting");
    }

    // Create app state before touching the terminal
    let mut app = App::new(&config)?;
    app.init()?;

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;
    info!("wodtrack stopped");

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        let mut draw_result = Ok(());
        tui.draw(|frame| draw_result = app.draw(frame, frame.area()))?;
        draw_result?;

        // Poll for events; a quiet poll still advances transitions
        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Mouse(mouse)) => {
                let area = app.last_area();
                app.handle_mouse_event(mouse, area)?
            }
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            if a != Action::Tick {
                debug!(action = %a, "dispatch");
            }
            current_action = app.update(a)?;
        }

        // Input bursts must not stall running transitions
        app.tick_at(std::time::Instant::now());
    }

    Ok(())
}
