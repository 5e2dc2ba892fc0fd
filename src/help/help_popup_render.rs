//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

use crate::help::{HELP_ENTRIES, HELP_FOOTER, HelpPopupState};
use crate::widgets::popup;

// Help popup display constants
pub const HELP_POPUP_WIDTH: u16 = 70;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)
const KEY_COLUMN_WIDTH: usize = 20;

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(help: &mut HelpPopupState, frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 10 {
        return;
    }

    let content_height = HELP_ENTRIES.len() as u16;
    let popup_width = HELP_POPUP_WIDTH.min(frame_area.width);
    let popup_height = (content_height + HELP_POPUP_PADDING).min(frame_area.height);

    let popup_area = popup::centered_popup(frame_area, popup_width, popup_height);
    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = HELP_ENTRIES.iter().map(|(key, desc)| entry_line(key, desc)).collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_FOOTER),
        Style::default().fg(Color::DarkGray),
    )));

    let visible_height = popup_height.saturating_sub(2);
    help.scroll.update_bounds(lines.len() as u32, visible_height);

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keyboard Shortcuts ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .scroll((help.scroll.offset, 0));

    frame.render_widget(popup, popup_area);
}

fn entry_line(key: &'static str, desc: &'static str) -> Line<'static> {
    match (key.is_empty(), desc.is_empty()) {
        (true, true) => Line::from(""),
        // All-caps entries are section headers, the rest are notes
        (true, false) if desc.chars().all(|c| !c.is_lowercase()) => Line::from(vec![
            Span::raw("  "),
            Span::styled(
                desc,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        (true, false) => Line::from(Span::styled(
            format!("  {}", desc),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        _ => Line::from(vec![
            Span::styled(
                format!("  {:<width$}", key, width = KEY_COLUMN_WIDTH),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(Color::White)),
        ]),
    }
}
