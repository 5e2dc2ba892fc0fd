use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Rows a multi-line field occupies, borders included
const MULTI_LINE_HEIGHT: u16 = 6;
const SINGLE_LINE_HEIGHT: u16 = 3;

/// A labelled text input
pub struct TextField {
    label: &'static str,
    placeholder: &'static str,
    multiline: bool,
    textarea: TextArea<'static>,
}

impl TextField {
    pub fn single_line(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, placeholder, false)
    }

    pub fn multi_line(label: &'static str, placeholder: &'static str) -> Self {
        Self::new(label, placeholder, true)
    }

    fn new(label: &'static str, placeholder: &'static str, multiline: bool) -> Self {
        Self {
            label,
            placeholder,
            multiline,
            textarea: create_textarea(placeholder),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn height(&self) -> u16 {
        if self.multiline {
            MULTI_LINE_HEIGHT
        } else {
            SINGLE_LINE_HEIGHT
        }
    }

    /// Full text, lines joined with `\n`
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Trimmed text, `None` when blank
    pub fn value(&self) -> Option<String> {
        let text = self.text();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    pub fn is_blank(&self) -> bool {
        self.value().is_none()
    }

    /// Forward a key to the editor, returns true if the content changed
    ///
    /// Single-line fields never take a line break.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if !self.multiline && breaks_line(&key) {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    /// Insert text at the cursor
    ///
    /// Single-line fields turn line breaks into spaces.
    pub fn insert_str(&mut self, text: &str) {
        if self.multiline {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            self.textarea.insert_str(normalized);
        } else {
            let flattened: String = text
                .chars()
                .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                .collect();
            self.textarea.insert_str(flattened);
        }
    }

    pub fn clear(&mut self) {
        self.textarea = create_textarea(self.placeholder);
    }

    /// The editor widget styled for the current focus
    pub fn widget(&mut self, focused: bool) -> &TextArea<'static> {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.label))
                .border_style(Style::default().fg(border_color)),
        );

        self.set_cursor_visible(focused);
        &self.textarea
    }

    /// The editor widget without a border, for embedding in another block
    pub fn inline_widget(&mut self, focused: bool) -> &TextArea<'static> {
        self.textarea.set_block(Block::default());
        self.set_cursor_visible(focused);
        &self.textarea
    }

    // Unfocused fields hide their cursor
    fn set_cursor_visible(&mut self, visible: bool) {
        let cursor_style = if visible {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }
}

fn create_textarea(placeholder: &'static str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(placeholder);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea
}

/// Keys the editor's default bindings turn into a new line
fn breaks_line(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => true,
        KeyCode::Char('m') | KeyCode::Char('M') => {
            key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{ctrl, key, key_with_mods, type_text};

    #[test]
    fn test_new_field_is_blank() {
        let field = TextField::single_line("Concept", "e.g. derivatives");
        assert!(field.is_blank());
        assert_eq!(field.text(), "");
        assert_eq!(field.value(), None);
    }

    #[test]
    fn test_typing_updates_text() {
        let mut field = TextField::single_line("Concept", "");
        type_text(&mut field, "limits");
        assert_eq!(field.text(), "limits");
    }

    #[test]
    fn test_value_is_trimmed() {
        let mut field = TextField::single_line("Concept", "");
        field.insert_str("  limits  ");
        assert_eq!(field.value(), Some("limits".to_string()));
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut field = TextField::multi_line("Question", "");
        field.insert_str("   \n  ");
        assert!(field.is_blank());
    }

    #[test]
    fn test_single_line_rejects_line_break_keys() {
        let mut field = TextField::single_line("Student ID", "");
        type_text(&mut field, "s-1");

        assert!(!field.input(ctrl('m')));
        assert!(!field.input(key_with_mods(KeyCode::Enter, KeyModifiers::ALT)));
        type_text(&mut field, "7");

        assert_eq!(field.text(), "s-17");
        assert_eq!(field.value(), Some("s-17".to_string()));
    }

    #[test]
    fn test_multi_line_takes_ctrl_m_as_newline() {
        let mut field = TextField::multi_line("Question", "");
        type_text(&mut field, "a");
        field.input(ctrl('m'));
        type_text(&mut field, "b");
        assert_eq!(field.text(), "a\nb");
    }

    #[test]
    fn test_multiline_keeps_line_breaks() {
        let mut field = TextField::multi_line("Question", "");
        field.insert_str("line one\r\nline two");
        assert_eq!(field.text(), "line one\nline two");
    }

    #[test]
    fn test_single_line_flattens_line_breaks() {
        let mut field = TextField::single_line("Context", "");
        field.insert_str("a\nb");
        assert_eq!(field.text(), "a b");
    }

    #[test]
    fn test_backspace_edits_text() {
        let mut field = TextField::single_line("Concept", "");
        field.insert_str("pie");
        field.input(key(KeyCode::Backspace));
        assert_eq!(field.text(), "pi");
    }

    #[test]
    fn test_clear_empties_field() {
        let mut field = TextField::multi_line("Question", "");
        field.insert_str("x + 1 = 2");
        field.clear();
        assert!(field.is_blank());
    }

    #[test]
    fn test_height_depends_on_kind() {
        assert_eq!(TextField::single_line("a", "").height(), SINGLE_LINE_HEIGHT);
        assert_eq!(TextField::multi_line("a", "").height(), MULTI_LINE_HEIGHT);
    }
}
