use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::clipboard::clipboard_events;
use crate::form::KeyOutcome;
use crate::tabs::Tab;

/// How long to wait for input before redrawing (keeps the spinner moving)
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Wait briefly for one terminal event and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(EVENT_POLL_INTERVAL)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        if self.page.handle_key(key) == KeyOutcome::Submit {
            self.submit();
        }
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.help.visible {
            return;
        }
        self.page.handle_paste(&text);
    }

    /// Handle keys that work regardless of the focused field
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup captures every key while open
        if self.help.visible {
            self.handle_help_popup_key(key);
            return true;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::Esc => {
                self.notification.dismiss();
                true
            }
            KeyCode::F(5) => {
                self.check_health();
                true
            }
            KeyCode::Char('y') if ctrl => clipboard_events::handle_clipboard_key(self, key),
            KeyCode::Char(c @ '1'..='9') if alt => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = Tab::from_index(index) {
                    self.switch_tab(tab);
                }
                true
            }
            KeyCode::Char('n') if ctrl => {
                self.switch_tab(self.tab().next());
                true
            }
            KeyCode::Char('p') if ctrl => {
                self.switch_tab(self.tab().previous());
                true
            }
            KeyCode::Char('s') if ctrl => {
                self.submit();
                true
            }
            KeyCode::Char('d') if ctrl => {
                self.page.scroll.page_down();
                true
            }
            KeyCode::Char('u') if ctrl => {
                self.page.scroll.page_up();
                true
            }
            KeyCode::PageDown => {
                self.page.scroll.page_down();
                true
            }
            KeyCode::PageUp => {
                self.page.scroll.page_up();
                true
            }
            KeyCode::Tab => {
                self.page.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.page.focus_previous();
                true
            }
            _ => false,
        }
    }

    fn handle_help_popup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) => self.help.close(),
            KeyCode::Char('q') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.help.close()
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('j') | KeyCode::Down => self.help.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.help.scroll.scroll_up(1),
            KeyCode::PageDown => self.help.scroll.page_down(),
            KeyCode::PageUp => self.help.scroll.page_up(),
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.help.scroll.page_down()
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.help.scroll.page_up()
            }
            KeyCode::Char('g') | KeyCode::Home => self.help.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.help.scroll.jump_to_bottom(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
