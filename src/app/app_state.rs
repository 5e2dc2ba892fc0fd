use std::sync::mpsc::{Receiver, TryRecvError};

use tokio::sync::mpsc::UnboundedSender;

use crate::api::worker::{WorkerRequest, WorkerResponse};
use crate::api::{ApiRequest, ApiResponse};
use crate::config::{ClipboardBackend, Config};
use crate::help::HelpPopupState;
use crate::notification::NotificationState;
use crate::tabs::Tab;
use crate::views::Page;

/// Reachability of the tutoring service, shown in the tab bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerStatus {
    Unknown,
    Checking,
    Online(String),
    Offline,
}

/// Application state
pub struct App {
    pub page: Page,
    pub notification: NotificationState,
    pub help: HelpPopupState,
    pub server_status: ServerStatus,
    pub server_url: String,
    pub clipboard_backend: ClipboardBackend,
    pub should_quit: bool,
    /// Drives the loading spinner
    pub frame_count: u64,
    request_tx: UnboundedSender<WorkerRequest>,
    response_rx: Receiver<WorkerResponse>,
    next_request_id: u64,
    health_request_id: Option<u64>,
}

impl App {
    pub fn new(
        config: &Config,
        tab: Tab,
        request_tx: UnboundedSender<WorkerRequest>,
        response_rx: Receiver<WorkerResponse>,
    ) -> Self {
        Self {
            page: Page::new(tab),
            notification: NotificationState::new(),
            help: HelpPopupState::new(),
            server_status: ServerStatus::Unknown,
            server_url: config.server.base_url.clone(),
            clipboard_backend: config.clipboard.backend,
            should_quit: false,
            frame_count: 0,
            request_tx,
            response_rx,
            next_request_id: 1,
            health_request_id: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tab(&self) -> Tab {
        self.page.tab()
    }

    /// Show another view
    ///
    /// The new view starts empty. An answer still in flight for the old view
    /// is dropped when it arrives.
    pub fn switch_tab(&mut self, tab: Tab) {
        if tab == self.page.tab() {
            return;
        }
        log::debug!("Switching view {} -> {}", self.page.tab().route(), tab.route());
        self.page = Page::new(tab);
    }

    /// Validate the active form and send its request
    pub fn submit(&mut self) {
        if self.page.loading {
            self.notification.show("Still waiting for the previous answer");
            return;
        }

        let request = match self.page.build_request() {
            Ok(request) => request,
            Err(err) => {
                self.notification.show_warning(&err.to_string());
                return;
            }
        };

        if let Some(request_id) = self.send(request) {
            self.page.start_request(request_id);
        }
    }

    /// Ask the server whether it is up
    pub fn check_health(&mut self) {
        if let Some(request_id) = self.send(ApiRequest::Health) {
            self.health_request_id = Some(request_id);
            self.server_status = ServerStatus::Checking;
        }
    }

    /// Apply every answer the worker has produced since the last frame
    pub fn poll_responses(&mut self) {
        loop {
            match self.response_rx.try_recv() {
                Ok(response) => self.handle_worker_response(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if self.page.loading {
                        self.page.finish_request();
                        self.notification.show_error("Network worker stopped");
                    }
                    break;
                }
            }
        }
    }

    fn send(&mut self, request: ApiRequest) -> Option<u64> {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        log::debug!("Sending request {} to {}", request_id, request.endpoint());

        if self
            .request_tx
            .send(WorkerRequest {
                request,
                request_id,
            })
            .is_err()
        {
            log::warn!("Network worker is gone, request {} not sent", request_id);
            self.notification.show_error("Network worker stopped");
            return None;
        }

        Some(request_id)
    }

    pub(crate) fn handle_worker_response(&mut self, response: WorkerResponse) {
        let WorkerResponse { request_id, result } = response;

        if self.health_request_id == Some(request_id) {
            self.health_request_id = None;
            self.server_status = match result {
                Ok(ApiResponse::Health(status)) => ServerStatus::Online(status),
                Ok(_) => ServerStatus::Online("ok".to_string()),
                Err(err) => {
                    log::debug!("Health check failed: {}", err);
                    ServerStatus::Offline
                }
            };
            return;
        }

        if !self.page.is_waiting_for(request_id) {
            log::debug!("Dropping stale response {}", request_id);
            return;
        }

        match result {
            Ok(response) => {
                let uploaded = matches!(response, ApiResponse::ImageAnalysis(_));
                self.page.apply_response(response);
                if uploaded {
                    self.notification.show("Image uploaded");
                }
                if !matches!(self.server_status, ServerStatus::Online(_)) {
                    self.server_status = ServerStatus::Online("ok".to_string());
                }
            }
            Err(err) => {
                self.page.apply_error(&err);
                if err.is_transport() {
                    self.server_status = ServerStatus::Offline;
                }
                self.notification.show_error(&err.user_message());
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
