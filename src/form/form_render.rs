use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::FieldMut;
use crate::api::DetailLevel;

const DETAIL_HEIGHT: u16 = 3;
/// Borders, one row of tags and the input row
const TAGS_HEIGHT: u16 = 4;

/// Rows the field needs, borders included
pub fn field_height(field: &FieldMut<'_>) -> u16 {
    match field {
        FieldMut::Text(text) => text.height(),
        FieldMut::Detail(_) => DETAIL_HEIGHT,
        FieldMut::Tags(_) => TAGS_HEIGHT,
    }
}

pub fn render_field(frame: &mut Frame, area: Rect, field: FieldMut<'_>, focused: bool) {
    match field {
        FieldMut::Text(text) => frame.render_widget(text.widget(focused), area),
        FieldMut::Detail(level) => render_detail(frame, area, *level, focused),
        FieldMut::Tags(list) => {
            let block = field_block(list.label(), focused);
            let inner = block.inner(area);
            frame.render_widget(block, area);

            let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

            let chips: Vec<Span> = if list.is_empty() {
                vec![Span::styled(
                    "No areas yet, type one and press Enter",
                    Style::default().fg(Color::DarkGray),
                )]
            } else {
                list.tags()
                    .iter()
                    .flat_map(|tag| {
                        [
                            Span::styled(
                                format!(" {} ", tag),
                                Style::default().fg(Color::Black).bg(Color::Cyan),
                            ),
                            Span::raw(" "),
                        ]
                    })
                    .collect()
            };
            frame.render_widget(
                Paragraph::new(Line::from(chips)).wrap(Wrap { trim: true }),
                rows[0],
            );

            let input = list.pending.inline_widget(focused);
            frame.render_widget(input, rows[1]);
        }
    }
}

fn render_detail(frame: &mut Frame, area: Rect, selected: DetailLevel, focused: bool) {
    let mut spans = Vec::new();
    for level in DetailLevel::ALL {
        let style = if level == selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if level == selected { "●" } else { "○" };
        spans.push(Span::styled(format!("{} {}  ", marker, level.label()), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block("Detail level", focused));
    frame.render_widget(paragraph, area);
}

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", label))
        .border_style(Style::default().fg(border_color))
}
