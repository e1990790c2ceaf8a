//! UI module for Estatelist
//!
//! This module handles all user interface components, rendering, and user
//! interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;

pub use app_component::AppComponent;
pub use layout::LayoutManager;

use crate::config::Config;
use crate::service::PortalService;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the TUI application until the user quits.
pub async fn run_app(service: PortalService, config: Config) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Initialize application components
    let mut app = AppComponent::new(service, &config);
    let mut event_handler = EventHandler::new();

    // Load the page automatically on startup
    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick => {
                // Time-driven state first (toast expiry), then drain
                // whatever background work finished since the last tick
                app.on_tick();

                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() || app.has_toasts() {
                    needs_render = true;
                }
                for action in background_actions {
                    app.handle_background_action(action).await?;
                }
            }
            EventType::Render => {
                needs_render = true;
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
