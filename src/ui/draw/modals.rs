//! Overlay rendering
//!
//! - Operations dropdown, hanging below the menu bar
//! - API URL configuration modal

use super::styling::{get_method_color, overlay_background, METHOD_COLUMN_WIDTH};
use crate::state::AppState;
use crate::types::Operation;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the dropdown under the menu bar
pub fn render_menu_dropdown(frame: &mut Frame, menu_bar: Rect, state: &AppState) {
    let area = frame.area();

    // Overlap the menu bar's bottom border
    let top = (menu_bar.y + menu_bar.height)
        .saturating_sub(1)
        .min(area.height.saturating_sub(1));

    let dropdown_area = Rect {
        x: menu_bar.x + 1,
        y: top,
        width: 40.min(area.width.saturating_sub(menu_bar.x + 1)),
        height: (Operation::ALL.len() as u16 + 2).min(area.height.saturating_sub(top)),
    };

    frame.render_widget(Clear, dropdown_area);

    let items: Vec<ListItem> = Operation::ALL
        .iter()
        .enumerate()
        .map(|(idx, operation)| {
            let method = operation.method();
            let is_visible = state.menu.active_form == Some(*operation);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("{:<width$}", method.as_str(), width = METHOD_COLUMN_WIDTH),
                    Style::default()
                        .fg(get_method_color(&method))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(operation.label()),
                Span::raw(if is_visible { " •" } else { "" }),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .style(Style::default().bg(overlay_background()).fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    let mut list_state = ListState::default();
    list_state.select(Some(state.menu.highlighted));

    frame.render_stateful_widget(list, dropdown_area, &mut list_state);
}

/// Render the API URL configuration modal
pub fn render_url_input_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.7).min(90.0) as u16;
    let modal_height = 9;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x: modal_x,
        y: modal_y,
        width: modal_width,
        height: modal_height.min(area.height),
    };

    // Clear the background behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Configure API URL ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(overlay_background()).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Label
            Constraint::Length(1), // Input
            Constraint::Length(1), // Error
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let desc = Paragraph::new("Pizza collection URL. Single pizzas live at <URL>/<id>")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let label = Paragraph::new("► API URL:").style(Style::default().fg(Color::Yellow));
    frame.render_widget(label, chunks[1]);

    let input = Paragraph::new(format!("{}_", state.url_input)).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(input, chunks[2]);

    if let Some(error) = &state.url_error {
        let error = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(error, chunks[3]);
    }

    let help = Paragraph::new("Enter: Save  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
