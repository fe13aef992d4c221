//! Event handling system for pizza-tui
//!
//! This module processes user input and translates it into state-changing actions.
//! Input is routed by what currently owns the keyboard:
//! - Operations menu (when open)
//! - EnteringUrl: Modal for configuring the API URL
//! - EditingField: Typing into a form field
//! - Normal: Navigation and commands
//!
//! # Architecture
//!
//! The EventHandler uses an action pattern where input events generate AppActions
//! that are applied to AppState via the apply_action function in actions.rs.
//!
//! # Lock Management
//!
//! Handlers take short-lived locks on Arc<RwLock<AppState>> and never hold one
//! while another handler runs.

mod execution;
mod fields;
mod helpers;
mod menu;
mod modals;
mod yank;

use crate::actions::AppAction;
use crate::api::HttpTransport;
use crate::state::AppState;
use crate::types::InputMode;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fields::FieldInputResult;
use helpers::apply;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll for one input event and dispatch it. Returns a newly submitted
    /// API URL, if the URL modal was confirmed.
    pub fn handle_events(
        &mut self,
        state: &Arc<RwLock<AppState>>,
        transport: &HttpTransport,
        api_url: &str,
    ) -> Result<Option<String>> {
        if !event::poll(std::time::Duration::from_millis(50))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        Ok(self.handle_key(key, state, transport, api_url))
    }

    /// Dispatch one key press to whatever currently owns the keyboard
    fn handle_key(
        &mut self,
        key: KeyEvent,
        state: &Arc<RwLock<AppState>>,
        transport: &HttpTransport,
        api_url: &str,
    ) -> Option<String> {
        let (menu_open, input_mode) = match state.read() {
            Ok(s) => (s.menu.open, s.input_mode.clone()),
            Err(_) => return None,
        };

        if menu_open {
            menu::handle_menu_input(key, state);
            return None;
        }

        match input_mode {
            InputMode::EnteringUrl => {
                return modals::handle_url_input(key, state);
            }

            InputMode::EditingField => {
                if fields::handle_field_input(key, state) == FieldInputResult::Submit {
                    execution::handle_submit(state, transport, api_url);
                }
            }

            InputMode::Normal => match key.code {
                // QUIT
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                // open / close the operations menu
                KeyCode::Char('m') | KeyCode::F(2) => {
                    apply(state, AppAction::ToggleMenu);
                }
                // config url
                KeyCode::Char(',') => {
                    modals::handle_url_dialog(state, api_url);
                }
                // yank output
                KeyCode::Char('y') => {
                    yank::handle_yank_output(state);
                }

                // ctrl + modifiers
                // Ctrl+u: Scroll output up
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    apply(state, AppAction::ScrollUp);
                }
                // Ctrl+d: Scroll output down
                KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    apply(state, AppAction::ScrollDown);
                }
                // no other Ctrl chord does anything in normal mode
                KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}

                // field navigation
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                    apply(state, AppAction::NextField);
                }
                KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                    apply(state, AppAction::PreviousField);
                }
                // edit the selected field
                KeyCode::Char('e') | KeyCode::Char('i') => {
                    fields::handle_start_editing(state, false);
                }
                // replace the selected field's value
                KeyCode::Char('c') => {
                    fields::handle_start_editing(state, true);
                }

                // submit the visible form
                KeyCode::Enter | KeyCode::Char(' ') => {
                    execution::handle_submit(state, transport, api_url);
                }

                // jump straight to a form
                KeyCode::Char(c) => {
                    if let Some(operation) = menu::shortcut_operation(c) {
                        apply(state, AppAction::SelectForm(operation));
                    }
                }

                _ => {}
            },
        }

        None
    }
}
