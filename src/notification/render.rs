use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::state::NotificationState;
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;
const MIN_WIDTH: u16 = 20;

/// Render the current notification in the top-right corner, if any
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let frame_area = frame.area();
    let text_width = notification.message.width() as u16;
    // +4 for borders and padding
    let width = (text_width + 4).clamp(MIN_WIDTH, MAX_WIDTH);
    let inner_width = width.saturating_sub(4).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);
    let height = lines + 2;

    let area = popup::top_right_popup(frame_area, width, height, 1);
    if area.width < 4 || area.height < 3 {
        return;
    }

    let color = notification.level.color();
    let widget = Paragraph::new(Line::from(format!(" {} ", notification.message)))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    popup::clear_area(frame, area);
    frame.render_widget(widget, area);
}
