use crate::forms::PizzaForms;
use crate::output::Output;
use crate::types::{FormField, InputMode, Operation};

/// Dropdown menu and which form it has made visible
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    pub open: bool,
    /// Menu entry under the cursor while the menu is open
    pub highlighted: usize,
    /// The one visible form, if any
    pub active_form: Option<Operation>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub menu: MenuState,
    pub forms: PizzaForms,
    /// Index into the active form's fields
    pub selected_field: usize,
    pub input_mode: InputMode,

    /// Buffer of the API URL modal
    pub url_input: String,
    /// Validation error shown in the API URL modal
    pub url_error: Option<String>,

    /// Operation whose request is in flight
    pub executing: Option<Operation>,
    /// Last rendered result
    pub output: Option<Output>,

    /// Scroll offset for the output panel (lines)
    pub output_scroll: usize,
    pub yank_flash: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            menu: MenuState::default(),
            forms: PizzaForms::default(),
            selected_field: 0,
            input_mode: InputMode::Normal,
            url_input: String::new(),
            url_error: None,
            executing: None,
            output: None,
            output_scroll: 0,
            yank_flash: false,
        }
    }
}

impl AppState {
    /// Field of the visible form that has the cursor
    pub fn selected_form_field(&self) -> Option<FormField> {
        let form = self.menu.active_form?;
        form.fields().get(self.selected_field).copied()
    }

    /// Buffer of the selected field, if a form with fields is visible
    pub fn selected_field_value_mut(&mut self) -> Option<&mut String> {
        let form = self.menu.active_form?;
        let field = self.selected_form_field()?;
        self.forms.field_mut(form, field)
    }

    pub fn is_executing(&self) -> bool {
        self.executing.is_some()
    }

    /// Replace whatever the output panel shows
    pub fn show_output(&mut self, output: Output) {
        self.output = Some(output);
        self.output_scroll = 0;
    }
}
