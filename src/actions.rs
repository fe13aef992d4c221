use crate::forms::FormOutcome;
use crate::state::AppState;
use crate::types::{InputMode, Operation};

/// Lines moved per Ctrl+U / Ctrl+D
const SCROLL_LINES_PER_ACTION: usize = 5;

/// Represents all possible state-changing actions in the application
/// This pattern separates input handling from state mutations, making the code
/// more testable
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Menu actions
    ToggleMenu,
    CloseMenu,
    MenuUp,
    MenuDown,
    SelectForm(Operation),
    SelectHighlightedForm,

    // Form field actions
    NextField,
    PreviousField,
    StartEditingField,
    StopEditingField,
    AppendToField(String),
    BackspaceField,
    DeleteWordField,
    ClearField,

    // API URL modal
    EnterUrlInputMode { api_url: String },
    ExitUrlInputMode,
    AppendToUrlInput(String),
    BackspaceUrlInput,
    DeleteWordUrlInput,
    ClearUrlInput,
    SetUrlError(String),

    // Output actions
    ScrollUp,
    ScrollDown,

    // Request lifecycle
    StartExecuting(Operation),
    FinishExecuting {
        operation: Operation,
        outcome: FormOutcome,
    },
}

/// Apply an action to the application state
/// All state mutations should go through this function to maintain consistency
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        // Menu
        AppAction::ToggleMenu => {
            state.menu.open = !state.menu.open;
            if state.menu.open {
                // Start on the entry of the visible form
                state.menu.highlighted = state
                    .menu
                    .active_form
                    .and_then(|form| Operation::ALL.iter().position(|op| *op == form))
                    .unwrap_or(0);
            }
        }
        AppAction::CloseMenu => {
            state.menu.open = false;
        }
        AppAction::MenuUp => {
            state.menu.highlighted = state.menu.highlighted.saturating_sub(1);
        }
        AppAction::MenuDown => {
            state.menu.highlighted = (state.menu.highlighted + 1).min(Operation::ALL.len() - 1);
        }
        AppAction::SelectForm(operation) => {
            select_form(state, operation);
        }
        AppAction::SelectHighlightedForm => {
            if let Some(operation) = Operation::ALL.get(state.menu.highlighted).copied() {
                select_form(state, operation);
            }
        }

        // Form fields
        AppAction::NextField => {
            let count = field_count(state);
            if count > 0 {
                state.selected_field = (state.selected_field + 1) % count;
            }
        }
        AppAction::PreviousField => {
            let count = field_count(state);
            if count > 0 {
                state.selected_field = (state.selected_field + count - 1) % count;
            }
        }
        AppAction::StartEditingField => {
            if state.selected_form_field().is_some() {
                state.input_mode = InputMode::EditingField;
            }
        }
        AppAction::StopEditingField => {
            state.input_mode = InputMode::Normal;
        }
        AppAction::AppendToField(text) => {
            if let Some(value) = state.selected_field_value_mut() {
                value.push_str(&text);
            }
        }
        AppAction::BackspaceField => {
            if let Some(value) = state.selected_field_value_mut() {
                value.pop();
            }
        }
        AppAction::DeleteWordField => {
            if let Some(value) = state.selected_field_value_mut() {
                delete_word(value);
            }
        }
        AppAction::ClearField => {
            if let Some(value) = state.selected_field_value_mut() {
                value.clear();
            }
        }

        // API URL modal
        AppAction::EnterUrlInputMode { api_url } => {
            state.input_mode = InputMode::EnteringUrl;
            state.menu.open = false;
            state.url_input = api_url;
            state.url_error = None;
        }
        AppAction::ExitUrlInputMode => {
            state.input_mode = InputMode::Normal;
            state.url_input.clear();
            state.url_error = None;
        }
        AppAction::AppendToUrlInput(text) => {
            state.url_input.push_str(&text);
            state.url_error = None;
        }
        AppAction::BackspaceUrlInput => {
            state.url_input.pop();
            state.url_error = None;
        }
        AppAction::DeleteWordUrlInput => {
            delete_word(&mut state.url_input);
        }
        AppAction::ClearUrlInput => {
            state.url_input.clear();
        }
        AppAction::SetUrlError(error) => {
            state.url_error = Some(error);
        }

        // Output
        AppAction::ScrollUp => {
            state.output_scroll = state.output_scroll.saturating_sub(SCROLL_LINES_PER_ACTION);
        }
        AppAction::ScrollDown => {
            state.output_scroll = state.output_scroll.saturating_add(SCROLL_LINES_PER_ACTION);
        }

        // Request lifecycle
        AppAction::StartExecuting(operation) => {
            state.executing = Some(operation);
        }
        AppAction::FinishExecuting { operation, outcome } => {
            state.executing = None;
            if outcome.reset_form {
                state.forms.reset(operation);
            }
            state.show_output(outcome.output);
        }
    }
}

/// Hide every form, show the chosen one, close the menu
fn select_form(state: &mut AppState, operation: Operation) {
    state.menu.active_form = Some(operation);
    state.menu.open = false;
    state.selected_field = 0;
    state.input_mode = InputMode::Normal;
}

fn field_count(state: &AppState) -> usize {
    state
        .menu
        .active_form
        .map(|form| form.fields().len())
        .unwrap_or(0)
}

/// Helper function to delete the last word from a string (Ctrl+W behavior)
fn delete_word(s: &mut String) {
    // Trim trailing whitespace first
    *s = s.trim_end().to_string();

    // Find last whitespace and truncate there
    if let Some(pos) = s.rfind(char::is_whitespace) {
        s.truncate(pos);
    } else {
        // No whitespace found, clear entire string
        s.clear();
    }
}
