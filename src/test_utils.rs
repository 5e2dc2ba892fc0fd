#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::api::worker::{WorkerRequest, WorkerResponse};
    use crate::app::App;
    use crate::config::Config;
    use crate::form::TextField;
    use crate::tabs::Tab;

    /// The worker's side of the app's channels
    pub struct TestChannels {
        pub requests: UnboundedReceiver<WorkerRequest>,
        pub responses: Sender<WorkerResponse>,
    }

    impl TestChannels {
        /// Requests the app has sent so far
        pub fn sent(&mut self) -> Vec<WorkerRequest> {
            let mut sent = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                sent.push(request);
            }
            sent
        }
    }

    pub fn test_app() -> (App, TestChannels) {
        test_app_on(Tab::default())
    }

    pub fn test_app_on(tab: Tab) -> (App, TestChannels) {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        let app = App::new(&Config::default(), tab, request_tx, response_rx);
        (
            app,
            TestChannels {
                requests,
                responses,
            },
        )
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Type `text` into a field one key at a time
    pub fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.input(key(KeyCode::Char(c)));
        }
    }

    /// Type `text` into the app's focused field one key at a time
    pub fn type_into_app(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
