//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;
use crate::form::FieldMut;

/// Render the help line (bottom of screen)
pub fn render_line(app: &mut App, frame: &mut Frame, area: Rect) {
    let help_text = if app.page.loading {
        " F1: Help | Waiting for the answer... | Alt+1-5: Switch View | Ctrl+C: Quit"
    } else {
        match app.page.focused_field() {
            Some(FieldMut::Text(field)) if field.is_multiline() => {
                " F1: Help | Ctrl+S: Submit | Enter: New Line | Tab: Next Field | Alt+1-5: Switch View"
            }
            Some(FieldMut::Tags(_)) => {
                " F1: Help | Enter: Add Area | Ctrl+S: Submit | Tab: Next Field | Alt+1-5: Switch View"
            }
            Some(FieldMut::Detail(_)) => {
                " F1: Help | ←/→: Detail Level | Enter: Submit | Tab: Next Field | Alt+1-5: Switch View"
            }
            _ => " F1: Help | Enter: Submit | Tab: Next Field | Ctrl+Y: Copy | Alt+1-5: Switch View",
        }
    };

    let help = Paragraph::new(help_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}
