//! Network worker thread
//!
//! Runs the HTTP client on a background thread so the UI never blocks.
//! Requests arrive over a channel tagged with a request id; every request is
//! answered exactly once with a [`WorkerResponse`] carrying the same id, so
//! the UI can drop answers for views that no longer exist.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{ApiRequest, ApiResponse};
use crate::error::MathElfError;

/// Request message sent to the worker thread
#[derive(Debug)]
pub struct WorkerRequest {
    pub request: ApiRequest,
    /// Unique ID for this request, used to filter stale responses
    pub request_id: u64,
}

/// Response message received from the worker thread
#[derive(Debug)]
pub struct WorkerResponse {
    pub request_id: u64,
    pub result: Result<ApiResponse, ApiError>,
}

/// Channel ends held by the UI, plus the worker thread itself
pub struct WorkerHandle {
    pub request_tx: UnboundedSender<WorkerRequest>,
    pub response_rx: Receiver<WorkerResponse>,
    pub thread: JoinHandle<()>,
}

/// Spawn the network worker thread
///
/// The thread owns a current-thread tokio runtime. Each request is handled
/// in its own task, so a slow answer for one view never delays another.
/// The thread exits when the request sender is dropped.
pub fn spawn_worker(client: ApiClient) -> Result<WorkerHandle, MathElfError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| MathElfError::Worker(e.to_string()))?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    let thread = std::thread::Builder::new()
        .name("mathelf-net".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(client, request_rx, response_tx));
        })?;

    Ok(WorkerHandle {
        request_tx,
        response_rx,
        thread,
    })
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: ApiClient,
    mut request_rx: UnboundedReceiver<WorkerRequest>,
    response_tx: Sender<WorkerResponse>,
) {
    while let Some(WorkerRequest {
        request,
        request_id,
    }) = request_rx.recv().await
    {
        log::debug!(
            "Request {} -> {}",
            request_id,
            client.url_for(&request)
        );

        let client = client.clone();
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let result = client.send(&request).await;
            log_outcome(request_id, &result);

            if response_tx
                .send(WorkerResponse { request_id, result })
                .is_err()
            {
                // Main thread disconnected
                log::debug!("Dropping response {}: UI gone", request_id);
            }
        });
    }

    log::debug!("Network worker shutting down");
}

fn log_outcome(request_id: u64, result: &Result<ApiResponse, ApiError>) {
    match result {
        Ok(_) => log::debug!("Request {} succeeded", request_id),
        Err(e) if e.is_transport() => log::warn!("Request {} failed: {}", request_id, e),
        Err(e) => log::debug!("Request {} failed ({}): {}", request_id, e.kind(), e),
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
