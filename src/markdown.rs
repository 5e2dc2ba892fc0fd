//! Markdown rendering for answers
//!
//! Converts the markdown returned by the tutoring service into styled
//! terminal text. Supports headings, lists, quotes, code fences, rules,
//! emphasis, inline code and math (`$..$`, `$$..$$`, `\(..\)`, `\[..\]`).
//! Rendering never fails: anything it does not understand is shown as-is.

mod inline;
mod math;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

pub use inline::parse_inline;
pub use math::prettify as prettify_math;

const RULE_WIDTH: usize = 40;

enum BlockState {
    Normal,
    Code,
    Math { closer: &'static str },
}

/// Render markdown into styled text
pub fn render(markdown: &str) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut state = BlockState::Normal;

    for raw in markdown.lines() {
        let trimmed = raw.trim();

        match state {
            BlockState::Code => {
                if trimmed.starts_with("```") {
                    state = BlockState::Normal;
                } else {
                    lines.push(code_line(raw));
                }
                continue;
            }
            BlockState::Math { closer } => {
                if let Some(before) = trimmed.strip_suffix(closer) {
                    if !before.trim().is_empty() {
                        lines.push(math_line(before));
                    }
                    state = BlockState::Normal;
                } else if !trimmed.is_empty() {
                    lines.push(math_line(trimmed));
                }
                continue;
            }
            BlockState::Normal => {}
        }

        if let Some(lang) = trimmed.strip_prefix("```") {
            state = BlockState::Code;
            if !lang.trim().is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", lang.trim()),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            continue;
        }

        if let Some((opener, closer)) = display_math_delimiters(trimmed) {
            let rest = &trimmed[opener.len()..];
            match rest.strip_suffix(closer) {
                // Whole formula on one line
                Some(inner) if !rest.is_empty() && !inner.contains(closer) => {
                    lines.push(math_line(inner));
                    continue;
                }
                Some(_) => {}
                None if !rest.contains(closer) => {
                    if !rest.trim().is_empty() {
                        lines.push(math_line(rest));
                    }
                    state = BlockState::Math { closer };
                    continue;
                }
                None => {}
            }
        }

        lines.push(render_line(raw));
    }

    Text::from(lines)
}

/// Number of terminal rows `text` occupies when wrapped to `width` columns
///
/// Uses the same word wrapping as the answer pane's `Paragraph`, so long
/// words and word breaks are counted the way they are drawn.
pub fn wrapped_height(text: &Text, width: u16) -> u32 {
    if width == 0 {
        return text.lines.len() as u32;
    }
    let rows = Paragraph::new(text.clone())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u32::try_from(rows).unwrap_or(u32::MAX)
}

fn display_math_delimiters(trimmed: &str) -> Option<(&'static str, &'static str)> {
    if trimmed.starts_with("$$") {
        Some(("$$", "$$"))
    } else if trimmed.starts_with("\\[") {
        Some(("\\[", "\\]"))
    } else {
        None
    }
}

fn render_line(raw: &str) -> Line<'static> {
    let trimmed = raw.trim();
    let indent = &raw[..raw.len() - raw.trim_start().len()];

    if trimmed.is_empty() {
        return Line::from("");
    }

    if let Some((level, title)) = heading(trimmed) {
        let style = heading_style(level);
        let mut spans = vec![Span::styled(format!("{} ", "#".repeat(level)), style)];
        spans.extend(parse_inline(title, style));
        return Line::from(spans);
    }

    if is_rule(trimmed) {
        return Line::from(Span::styled(
            "─".repeat(RULE_WIDTH),
            Style::default().fg(Color::DarkGray),
        ));
    }

    if let Some(quote) = trimmed.strip_prefix('>') {
        let style = Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC);
        let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];
        spans.extend(parse_inline(quote.trim_start(), style));
        return Line::from(spans);
    }

    if let Some(item) = ["- ", "* ", "+ "]
        .iter()
        .find_map(|marker| trimmed.strip_prefix(marker))
    {
        let mut spans = vec![Span::styled(
            format!("{}• ", indent),
            Style::default().fg(Color::Cyan),
        )];
        spans.extend(parse_inline(item, Style::default()));
        return Line::from(spans);
    }

    if let Some((marker, item)) = numbered_item(trimmed) {
        let mut spans = vec![Span::styled(
            format!("{}{} ", indent, marker),
            Style::default().fg(Color::Cyan),
        )];
        spans.extend(parse_inline(item, Style::default()));
        return Line::from(spans);
    }

    let mut spans = Vec::new();
    if !indent.is_empty() {
        spans.push(Span::raw(indent.to_string()));
    }
    spans.extend(parse_inline(trimmed, Style::default()));
    Line::from(spans)
}

fn heading(trimmed: &str) -> Option<(usize, &str)> {
    let level = trimmed.chars().take_while(|&c| c == '#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let rest = &trimmed[level..];
    if rest.is_empty() {
        return Some((level, ""));
    }
    rest.strip_prefix(' ').map(|title| (level, title.trim()))
}

fn heading_style(level: usize) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Cyan,
        _ => Color::Blue,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn is_rule(trimmed: &str) -> bool {
    let compact: Vec<char> = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    compact.len() >= 3
        && matches!(compact[0], '-' | '*' | '_')
        && compact.iter().all(|&c| c == compact[0])
}

/// `1. item` or `1) item`
fn numbered_item(trimmed: &str) -> Option<(&str, &str)> {
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let after = &trimmed[digits..];
    let item = after
        .strip_prefix(". ")
        .or_else(|| after.strip_prefix(") "))?;
    Some((&trimmed[..digits + 1], item))
}

fn code_line(raw: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  │ ", Style::default().fg(Color::DarkGray)),
        Span::styled(raw.trim_end().to_string(), inline::code_style()),
    ])
}

fn math_line(source: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {}", math::prettify(source.trim())),
        inline::math_style().add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod markdown_tests;
