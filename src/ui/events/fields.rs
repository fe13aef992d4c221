//! Form field editing
//!
//! In editing mode every printable key goes into the selected field.

use super::helpers::{apply, apply_many, collect_paste_batch};
use crate::actions::AppAction;
use crate::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// What the caller should do after a key in editing mode
#[derive(Debug, PartialEq)]
pub enum FieldInputResult {
    Continue,
    /// Enter was pressed: editing stopped and the form should be sent
    Submit,
}

pub fn handle_field_input(key: KeyEvent, state: &Arc<RwLock<AppState>>) -> FieldInputResult {
    match key.code {
        KeyCode::Enter => {
            apply(state, AppAction::StopEditingField);
            return FieldInputResult::Submit;
        }
        KeyCode::Esc => apply(state, AppAction::StopEditingField),
        KeyCode::Tab => apply(state, AppAction::NextField),
        KeyCode::BackTab => apply(state, AppAction::PreviousField),
        KeyCode::Backspace => apply(state, AppAction::BackspaceField),
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::DeleteWordField);
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearField);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let batch = collect_paste_batch(c);
            apply(state, AppAction::AppendToField(batch));
        }
        _ => {}
    }
    FieldInputResult::Continue
}

/// Start editing the selected field, optionally clearing it first
pub fn handle_start_editing(state: &Arc<RwLock<AppState>>, clear: bool) {
    let mut actions = vec![AppAction::StartEditingField];
    if clear {
        actions.push(AppAction::ClearField);
    }
    apply_many(state, actions);
}
