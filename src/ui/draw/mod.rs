//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: header, menu bar and footer
//! - `modals`: overlays (operations dropdown, API URL input)
//! - `panels`: main panels (form, output)
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
mod styling;

pub use components::{render_footer, render_header, render_menu_bar};
pub use modals::{render_menu_dropdown, render_url_input_modal};
pub use panels::{render_form_panel, render_output_panel};
