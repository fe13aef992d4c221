//! Main panel rendering
//!
//! - Form panel (left side): the fields of the visible form
//! - Output panel (right side): the last operation's title and payload

use super::styling::{self, get_method_color, METHOD_COLUMN_WIDTH};
use crate::output::Output;
use crate::state::AppState;
use crate::types::{InputMode, Operation};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the left panel with the visible form
pub fn render_form_panel(frame: &mut Frame, area: Rect, state: &AppState, api_url: &str) {
    let border_color = if state.input_mode == InputMode::EditingField {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title("[1] Form")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let Some(form) = state.menu.active_form else {
        let empty = Paragraph::new("No form selected\n\nPress [m] to open the operations menu")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let mut lines: Vec<Line> = Vec::new();

    let method = form.method();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<width$}", method.as_str(), width = METHOD_COLUMN_WIDTH),
            Style::default()
                .fg(get_method_color(&method))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(target_preview(form, state, api_url)),
    ]));
    lines.push(Line::from(Span::styled(
        form.label(),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(""));

    if form.fields().is_empty() {
        lines.push(Line::from(Span::styled(
            "No fields. Press [Enter] to send the request",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (idx, field) in form.fields().iter().enumerate() {
        let is_selected = idx == state.selected_field;
        let is_editing = is_selected && state.input_mode == InputMode::EditingField;
        let value = state.forms.field(form, *field).unwrap_or_default();

        let marker = if is_selected { "► " } else { "  " };
        let label_style = if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::LightCyan)
        };

        let value_text = if is_editing {
            format!("{value}_")
        } else if value.is_empty() {
            "<empty>".to_string()
        } else {
            value.to_string()
        };
        let value_style = if is_editing {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}: ", field.label()), label_style),
            Span::styled(value_text, value_style),
        ]));
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(content, area);
}

/// Render the right panel with the last output
pub fn render_output_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title("[2] Output")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::unfocused_border()));

    let mut lines: Vec<Line> = Vec::new();

    if let Some(operation) = state.executing {
        lines.push(Line::from(Span::styled(
            format!("⏳ Sending {} request...", operation.method()),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
    }

    match &state.output {
        Some(output) => lines.extend(output_lines(output, state.yank_flash)),
        None if !state.is_executing() => {
            lines.push(Line::from(Span::styled(
                "Nothing yet. Submit a form to see the result here",
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {}
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.output_scroll.min(u16::MAX as usize) as u16, 0))
        .block(block);

    frame.render_widget(content, area);
}

/// Title line, blank line, then the payload one line per line
fn output_lines(output: &Output, flash: bool) -> Vec<Line<'static>> {
    let title_color = if output.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let title_style = if flash {
        Style::default()
            .bg(title_color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![Line::from(Span::styled(output.title.clone(), title_style))];

    if let Some(body) = output.payload_text() {
        lines.push(Line::from(""));
        let body_style = if output.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };
        for line in body.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), body_style)));
        }
    }

    lines
}

/// URL the form would be sent to, with the typed id filled in
fn target_preview(form: Operation, state: &AppState, api_url: &str) -> String {
    let base = api_url.trim_end_matches('/');
    match form {
        Operation::List | Operation::Create => base.to_string(),
        Operation::Update | Operation::Delete => {
            let id = match form {
                Operation::Update => state.forms.update.id.trim(),
                _ => state.forms.delete.id.trim(),
            };
            if id.is_empty() {
                format!("{base}/{{id}}")
            } else {
                format!("{base}/{id}")
            }
        }
    }
}
