//! Main TUI runner - entry point and event loop

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use pagecraft_app::config;
use pagecraft_app::message::Message;
use pagecraft_app::AppState;
use pagecraft_core::prelude::*;
use pagecraft_genai::{GeminiClient, Generator};

use crate::{event, process, render, terminal};

/// Run the TUI application for a project directory
pub async fn run_with_project(project_path: &Path) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Load configuration
    let settings = config::load_settings(project_path);
    info!(
        text_model = %settings.api.text_model,
        "Loaded settings"
    );

    let generator = Arc::new(GeminiClient::new(config::client_config(&settings)));

    // Initialize terminal
    let mut term = ratatui::init();

    // Create initial state with settings
    let mut state = AppState::with_settings(settings);
    state.project_dir = project_path.to_path_buf();

    // Unified message channel for background task results
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, generator);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<G>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    generator: Arc<G>,
) -> Result<()>
where
    G: Generator + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Process results from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg, &msg_tx, &generator);
        }

        // Render
        terminal
            .draw(|frame| render::view(frame, state))
            .context("Failed to draw frame")?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, &generator);
        }
    }

    Ok(())
}
