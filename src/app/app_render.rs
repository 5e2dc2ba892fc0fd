use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use super::app_state::{App, ServerStatus};
use crate::form::form_render;
use crate::help::{help_line_render, help_popup_render};
use crate::markdown;
use crate::notification::render_notification;
use crate::tabs::Tab;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// Frames each spinner glyph stays on screen
const SPINNER_SLOWDOWN: u64 = 2;
/// Below this width the form sits above the answer instead of beside it
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 80;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_tab_bar(frame, layout[0]);

        let content = layout[1];
        let panes = if content.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        } else {
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        }
        .split(content);

        self.render_form(frame, panes[0]);
        self.render_result(frame, panes[1]);

        help_line_render::render_line(self, frame, layout[2]);

        if self.help.visible {
            help_popup_render::render_popup(&mut self.help, frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = Tab::ALL
            .iter()
            .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.tab().index())
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" MathFunElf ")
                    .title_top(self.server_status_line().right_aligned())
                    .border_style(Style::default().fg(Color::DarkGray)),
            );

        frame.render_widget(tabs, area);
    }

    fn server_status_line(&self) -> Line<'static> {
        let (symbol, label, color) = match &self.server_status {
            ServerStatus::Unknown => ("○", "unknown".to_string(), Color::DarkGray),
            ServerStatus::Checking => ("◌", "checking".to_string(), Color::Yellow),
            ServerStatus::Online(status) => ("●", status.clone(), Color::Green),
            ServerStatus::Offline => ("●", "offline".to_string(), Color::Red),
        };

        Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{} ({}) ", self.server_url, label),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn render_form(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.tab().title()))
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let focus = self.page.focus;
        let loading = self.page.loading;
        let fields = self.page.view.as_form_mut().fields();

        let mut constraints: Vec<Constraint> = fields
            .iter()
            .map(|field| Constraint::Length(form_render::field_height(field)))
            .collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::vertical(constraints).split(inner);

        for (index, field) in fields.into_iter().enumerate() {
            form_render::render_field(frame, rows[index], field, index == focus);
        }

        let hint = if loading {
            Span::styled("Submitting...", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("Ctrl+S to submit", Style::default().fg(Color::DarkGray))
        };
        if let Some(last) = rows.last() {
            frame.render_widget(Paragraph::new(Line::from(hint)), *last);
        }
    }

    fn render_result(&mut self, frame: &mut Frame, area: Rect) {
        let spinner = SPINNER_FRAMES[(self.frame_count / SPINNER_SLOWDOWN) as usize % SPINNER_FRAMES.len()];

        let title = if self.page.loading {
            format!(" Answer {} ", spinner)
        } else {
            " Answer ".to_string()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);

        let text = match self.page.result_markdown() {
            Some(result) => markdown::render(result),
            None if self.page.loading => Text::from(vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {} Thinking...", spinner),
                    Style::default().fg(Color::Yellow),
                )),
            ]),
            None => welcome_text(self.page.form().description()),
        };

        self.page
            .scroll
            .update_bounds(markdown::wrapped_height(&text, inner.width), inner.height);

        let paragraph = Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.page.scroll.offset, 0));

        frame.render_widget(paragraph, area);
    }
}

fn welcome_text(description: &str) -> Text<'static> {
    Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            "Welcome to MathFunElf!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(description.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Fill in the form and press Ctrl+S. Press F1 for all keys.",
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
