//! threadview — threaded comment viewer for the terminal.
//!
//! Entry point for the `threadview` binary. Wires together configuration
//! (`config`), file logging (`logging`), the terminal lifecycle (`tui`), the
//! unified event bus (`event`), and the UI (`ui`) around the comment forest
//! held in `app::AppState`.
//!
//! # Startup sequence
//!
//! 1. Load config; start file logging (the terminal is about to be taken over).
//! 2. Load the seed thread, falling back to the built-in one on error.
//! 3. `install_panic_hook()`, then `register_sigterm()`.
//! 4. `init_tui()`, then spawn the event task.
//!
//! `restore_tui()` is called once after the event loop exits. Inside the loop
//! errors only escape through `break`, so that call is always reached.

mod app;
mod config;
mod event;
mod logging;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::sync::atomic::Ordering;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::ui::keybindings::{self, KeyAction};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Step 0: config and logging. A CLI argument overrides the configured seed.
    let (mut config, config_warning) = Config::load(&config::config_path());
    if let Some(seed) = std::env::args_os().nth(1) {
        config.seed = Some(PathBuf::from(seed));
    }
    let _log_guard = match logging::init(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("threadview: logging disabled: {e}");
            None
        }
    };
    if let Some(warning) = config_warning {
        warn!("{warning}");
    }

    let theme = theme::Theme::from_name(&config.theme);
    let mut state = app::AppState::new(app::initial_comments(config.seed.as_deref()));
    info!(comments = state.total_comments(), theme = %config.theme, "starting");

    // Step 1: panic hook first so it is the innermost hook.
    tui::install_panic_hook();
    let term_flag = tui::register_sigterm()?;

    // Step 2: take over the terminal and start producing events.
    let mut terminal = tui::init_tui()?;
    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    let mut outcome = Ok(());

    'event_loop: loop {
        tokio::select! {
            // Heartbeat so SIGTERM is noticed even when no events arrive.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {
                if term_flag.load(Ordering::Relaxed) {
                    info!("SIGTERM received");
                    break 'event_loop;
                }
            }
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event::AppEvent::Render) => {
                        if let Err(e) = terminal.draw(|frame| ui::render(frame, &mut state, &theme)) {
                            error!(error = %e, "draw failed");
                            outcome = Err(e);
                            break 'event_loop;
                        }
                    }
                    Some(event::AppEvent::Key(key)) => {
                        if keybindings::handle_key(key, &mut state) == KeyAction::Quit {
                            break 'event_loop;
                        }
                    }
                    Some(event::AppEvent::Mouse(mouse)) => {
                        keybindings::handle_mouse(mouse, &mut state);
                    }
                    // The next Render picks up the new frame size.
                    Some(event::AppEvent::Resize(cols, rows)) => {
                        debug!(cols, rows, "terminal resized");
                    }
                    Some(event::AppEvent::Quit) | None => break 'event_loop,
                }
                if term_flag.load(Ordering::Relaxed) {
                    break 'event_loop;
                }
            }
        }
    }

    tui::restore_tui()?;
    info!(comments = state.total_comments(), "exiting");
    outcome
}
