//! Message processing loop
//!
//! Runs the update function for a message and every follow-up message it
//! produces, spawning background tasks for any actions along the way.

use std::sync::Arc;

use pagecraft_app::actions::handle_action;
use pagecraft_app::message::Message;
use pagecraft_app::{handler, AppState};
use pagecraft_genai::Generator;
use tokio::sync::mpsc;

/// Process a message and all follow-up messages it produces
pub fn process_message<G>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    generator: &Arc<G>,
) where
    G: Generator + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            handle_action(action, generator.clone(), msg_tx.clone());
        }
        msg = result.message;
    }
}
