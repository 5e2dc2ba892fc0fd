use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use super::math;

pub fn math_style() -> Style {
    Style::default().fg(Color::Yellow)
}

pub fn code_style() -> Style {
    Style::default().fg(Color::LightCyan)
}

/// Parse one line of inline markdown into styled spans
///
/// Unterminated markers are kept as literal text.
pub fn parse_inline(text: &str, base: Style) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    parse_chars(&chars, base, &mut spans);
    spans
}

fn parse_chars(chars: &[char], base: Style, spans: &mut Vec<Span<'static>>) {
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' if i + 1 < chars.len() => {
                let next = chars[i + 1];
                let closer = match next {
                    '(' => Some(')'),
                    '[' => Some(']'),
                    _ => None,
                };
                if let Some(closer) = closer
                    && let Some(end) = find_pair(chars, i + 2, '\\', closer)
                {
                    flush(&mut plain, base, spans);
                    spans.push(math_span(&chars[i + 2..end]));
                    i = end + 2;
                    continue;
                }
                if is_escapable(next) {
                    plain.push(next);
                    i += 2;
                    continue;
                }
            }
            '`' => {
                if let Some(end) = find_char(chars, i + 1, '`') {
                    flush(&mut plain, base, spans);
                    spans.push(Span::styled(collect(&chars[i + 1..end]), code_style()));
                    i = end + 1;
                    continue;
                }
            }
            '$' => {
                if chars.get(i + 1) == Some(&'$') {
                    if let Some(end) = find_pair(chars, i + 2, '$', '$')
                        && end > i + 2
                    {
                        flush(&mut plain, base, spans);
                        spans.push(math_span(&chars[i + 2..end]));
                        i = end + 2;
                        continue;
                    }
                } else if i + 1 < chars.len()
                    && !chars[i + 1].is_whitespace()
                    && let Some(end) = find_char(chars, i + 1, '$')
                    && end > i + 1
                {
                    flush(&mut plain, base, spans);
                    spans.push(math_span(&chars[i + 1..end]));
                    i = end + 1;
                    continue;
                }
            }
            '*' | '_' => {
                // `_` only opens emphasis at a word start (snake_case stays literal)
                let opens = c == '*' || i == 0 || !chars[i - 1].is_alphanumeric();
                if opens && chars.get(i + 1) == Some(&c) {
                    if let Some(end) = find_pair(chars, i + 2, c, c)
                        && end > i + 2
                    {
                        flush(&mut plain, base, spans);
                        parse_chars(&chars[i + 2..end], base.add_modifier(Modifier::BOLD), spans);
                        i = end + 2;
                        continue;
                    }
                } else if opens
                    && i + 1 < chars.len()
                    && !chars[i + 1].is_whitespace()
                    && let Some(end) = find_char(chars, i + 1, c)
                    && end > i + 1
                {
                    flush(&mut plain, base, spans);
                    parse_chars(&chars[i + 1..end], base.add_modifier(Modifier::ITALIC), spans);
                    i = end + 1;
                    continue;
                }
            }
            _ => {}
        }

        plain.push(c);
        i += 1;
    }

    flush(&mut plain, base, spans);
}

fn math_span(source: &[char]) -> Span<'static> {
    Span::styled(math::prettify(&collect(source)), math_style())
}

fn flush(plain: &mut String, style: Style, spans: &mut Vec<Span<'static>>) {
    if !plain.is_empty() {
        spans.push(Span::styled(std::mem::take(plain), style));
    }
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == target)
}

/// Index of the first `first` immediately followed by `second`, at or after `from`
fn find_pair(chars: &[char], from: usize, first: char, second: char) -> Option<usize> {
    (from..chars.len().saturating_sub(1)).find(|&i| chars[i] == first && chars[i + 1] == second)
}

fn is_escapable(c: char) -> bool {
    matches!(c, '\\' | '*' | '_' | '`' | '$' | '#' | '[' | ']' | '(' | ')' | '-' | '+' | '.' | '!' | '|' | '>')
}
