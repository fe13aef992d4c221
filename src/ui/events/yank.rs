//! Yank (copy) handlers
//!
//! Copies the output panel's content to the system clipboard.

use crate::state::AppState;
use arboard::Clipboard;
use log::{debug, warn};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Yank the current output (title and payload) to the clipboard
pub fn handle_yank_output(state: &Arc<RwLock<AppState>>) {
    let text = match state.read() {
        Ok(s) => match &s.output {
            Some(output) => output.to_plain_text(),
            None => {
                debug!("No output available to yank");
                return;
            }
        },
        Err(_) => return,
    };

    let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));

    match copied {
        Ok(()) => {
            debug!("Yanked output to clipboard");

            if let Ok(mut s) = state.write() {
                s.yank_flash = true;
            }

            // Clear the flash after a short delay
            let state = Arc::clone(state);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(200)).await;
                if let Ok(mut s) = state.write() {
                    s.yank_flash = false;
                }
            });
        }
        Err(e) => {
            warn!("Failed to copy to clipboard: {e}");
        }
    }
}
