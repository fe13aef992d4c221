//! Form submission
//!
//! Enter submits the visible form. The request itself runs in the background
//! so the UI keeps drawing while it is in flight.

use crate::api::HttpTransport;
use crate::request::submit_background;
use crate::state::AppState;
use log::debug;
use std::sync::{Arc, RwLock};

/// Handle Enter - submit the visible form
pub fn handle_submit(state: &Arc<RwLock<AppState>>, transport: &HttpTransport, api_url: &str) {
    let active_form = match state.read() {
        Ok(s) => s.menu.active_form,
        Err(_) => return,
    };

    let Some(operation) = active_form else {
        debug!("No form visible, nothing to submit");
        return;
    };

    if submit_background(
        Arc::clone(state),
        transport.clone(),
        api_url.to_string(),
        operation,
    ) {
        debug!("Submitted {operation:?} to {api_url}");
    }
}
