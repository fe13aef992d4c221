//! Styling utilities and color schemes
//!
//! This module contains color helpers and style constants used throughout the UI.

use ratatui::style::Color;

/// Get the color for an HTTP method
pub fn get_method_color(method: &reqwest::Method) -> Color {
    match *method {
        reqwest::Method::GET => Color::Green,
        reqwest::Method::POST => Color::Blue,
        reqwest::Method::PUT => Color::Yellow,
        reqwest::Method::DELETE => Color::Red,
        reqwest::Method::PATCH => Color::Cyan,
        _ => Color::White,
    }
}

/// Method column width for consistent formatting
pub const METHOD_COLUMN_WIDTH: usize = 7;

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

/// Background shared by the menu and modal overlays
pub fn overlay_background() -> Color {
    Color::Rgb(30, 30, 30)
}
