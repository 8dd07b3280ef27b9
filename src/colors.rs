//! Terminal coloring for request log lines.

use axum::http::StatusCode;
use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// Palette cycled through for request ids.
const PALETTE: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Picks a stable palette entry for a request id.
pub fn id_color(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    PALETTE[hash as usize % PALETTE.len()]
}

/// Renders `[id]` in the id's palette color.
pub fn paint_id(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(id_color(id)));
    format!("[{}]", id).style(style).to_string()
}

/// Renders a status code colored by class: green for success, yellow for
/// client errors, red for server errors.
pub fn paint_status(status: StatusCode) -> String {
    if status.is_server_error() {
        status.red().to_string()
    } else if status.is_client_error() {
        status.yellow().to_string()
    } else {
        status.green().to_string()
    }
}
