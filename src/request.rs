use crate::actions::{apply_action, AppAction};
use crate::api::HttpTransport;
use crate::forms;
use crate::state::AppState;
use crate::types::Operation;
use log::debug;
use std::sync::{Arc, RwLock};

/// Submits the visible form in the background
///
/// Returns `false` without doing anything if a request is already in flight.
pub fn submit_background(
    state: Arc<RwLock<AppState>>,
    transport: HttpTransport,
    base_url: String,
    operation: Operation,
) -> bool {
    // Snapshot the form and mark the operation as executing in one lock
    let form_snapshot = {
        let Ok(mut s) = state.write() else {
            return false;
        };
        if let Some(executing) = s.executing {
            debug!("{executing:?} still in flight, ignoring {operation:?}");
            return false;
        }
        apply_action(AppAction::StartExecuting(operation), &mut s);
        s.forms.clone()
    };

    tokio::spawn(async move {
        let outcome = forms::submit(&transport, &base_url, operation, &form_snapshot).await;

        if let Ok(mut s) = state.write() {
            apply_action(AppAction::FinishExecuting { operation, outcome }, &mut s);
        }
    });

    true
}
