//! Reusable UI components
//!
//! - Header (title, API URL, request status)
//! - Menu bar (the dropdown button)
//! - Footer (command help for the current input mode)

use super::styling::get_method_color;
use crate::state::AppState;
use crate::types::InputMode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Render the application header with the API URL and request status
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    api_url: &str,
    state: &AppState,
    spinner_index: usize,
) {
    let status_text = match state.executing {
        Some(operation) => format!(
            "{} {} sending...",
            SPINNER[spinner_index % SPINNER.len()],
            operation.method()
        ),
        None => "Idle".to_string(),
    };

    let header_text = format!("pizza tui - {api_url} [{status_text}]");

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the menu button and the name of the visible form
pub fn render_menu_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let arrow = if state.menu.open { "▴" } else { "▾" };

    let mut spans = vec![Span::styled(
        format!(" Operations {arrow} "),
        Style::default()
            .fg(Color::Black)
            .bg(if state.menu.open {
                Color::Yellow
            } else {
                Color::Cyan
            })
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(form) = state.menu.active_form {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            form.method().to_string(),
            Style::default()
                .fg(get_method_color(&form.method()))
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", form.label())));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(bar, area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let footer_text = if state.menu.open {
        "j/k/↑/↓:Nav Enter:Show form 1-4:Pick Esc:Close"
    } else {
        match state.input_mode {
            InputMode::EditingField => {
                "Type to edit Tab:Next field Enter:Submit Esc:Done Ctrl+W:Word Ctrl+L:Clear"
            }
            InputMode::EnteringUrl => "Enter:Save Esc:Cancel Ctrl+L:Clear",
            InputMode::Normal => {
                "m:Menu 1-4:Form j/k:Field e:Edit Enter:Submit | Ctrl+U/D:Scroll y:Copy ,:URL q:Quit"
            }
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
