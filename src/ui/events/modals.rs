//! API URL modal handlers

use super::helpers::{apply, collect_paste_batch};
use crate::actions::AppAction;
use crate::config;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use std::sync::{Arc, RwLock};

/// Handle URL dialog activation
pub fn handle_url_dialog(state: &Arc<RwLock<AppState>>, api_url: &str) {
    apply(
        state,
        AppAction::EnterUrlInputMode {
            api_url: api_url.to_string(),
        },
    );
    debug!("Entering URL input mode");
}

/// Handle a key in the URL modal. Returns the new URL once it is submitted
/// and valid.
pub fn handle_url_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) -> Option<String> {
    match key.code {
        KeyCode::Enter => {
            let api_url = match state.read() {
                Ok(s) => s.url_input.trim().to_string(),
                Err(_) => return None,
            };

            match config::validate_url(&api_url) {
                Ok(()) => {
                    apply(state, AppAction::ExitUrlInputMode);
                    info!("API URL set to {api_url}");
                    return Some(api_url);
                }
                Err(e) => {
                    debug!("Invalid API URL: {e}");
                    // Keep modal open
                    apply(state, AppAction::SetUrlError(e));
                }
            }
        }
        KeyCode::Esc => {
            apply(state, AppAction::ExitUrlInputMode);
            debug!("URL input cancelled");
        }
        KeyCode::Backspace => apply(state, AppAction::BackspaceUrlInput),
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearUrlInput);
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordUrlInput);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let batch = collect_paste_batch(c);
            apply(state, AppAction::AppendToUrlInput(batch));
        }
        _ => {}
    }
    None
}
