//! Operations dropdown handlers
//!
//! While the menu is open it owns the keyboard. Keys it does not use close
//! it, the way a click outside a dropdown would.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::Operation;
use crossterm::event::{KeyCode, KeyEvent};
use log::debug;
use std::sync::{Arc, RwLock};

pub fn handle_menu_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::MenuDown),
        KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::MenuUp),
        KeyCode::Enter | KeyCode::Char(' ') => {
            apply(state, AppAction::SelectHighlightedForm);
            log_visible_form(state);
        }
        KeyCode::Char(c) => match shortcut_operation(c) {
            Some(operation) => {
                apply(state, AppAction::SelectForm(operation));
                log_visible_form(state);
            }
            None => dismiss(state),
        },
        _ => dismiss(state),
    }
}

fn dismiss(state: &Arc<RwLock<AppState>>) {
    apply(state, AppAction::CloseMenu);
    debug!("Menu dismissed");
}

/// Number keys 1-4 pick a form in menu order
pub fn shortcut_operation(c: char) -> Option<Operation> {
    let index = c.to_digit(10)?.checked_sub(1)?;
    Operation::ALL.get(index as usize).copied()
}

fn log_visible_form(state: &Arc<RwLock<AppState>>) {
    if let Ok(s) = state.read() {
        debug!("Visible form: {:?}", s.menu.active_form);
    }
}
