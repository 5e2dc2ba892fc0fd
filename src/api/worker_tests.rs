//! Tests for the network worker thread

use super::*;
use crate::api::types::SolveRequest;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn solve(question: &str) -> ApiRequest {
    ApiRequest::Solve(SolveRequest {
        question: question.to_string(),
        context: None,
    })
}

/// Block on the std receiver without stalling the test runtime
async fn recv(rx: Receiver<WorkerResponse>) -> (Receiver<WorkerResponse>, WorkerResponse) {
    tokio::task::spawn_blocking(move || {
        let response = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("worker should answer");
        (rx, response)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_worker_answers_with_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solve-math"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"solution": "4"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let handle = spawn_worker(client).unwrap();

    handle
        .request_tx
        .send(WorkerRequest {
            request: solve("2 + 2"),
            request_id: 7,
        })
        .unwrap();

    let (_rx, response) = recv(handle.response_rx).await;
    assert_eq!(response.request_id, 7);
    assert_eq!(response.result, Ok(ApiResponse::Solution("4".to_string())));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_worker_reports_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solve-math"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    let handle = spawn_worker(client).unwrap();

    handle
        .request_tx
        .send(WorkerRequest {
            request: solve("x"),
            request_id: 1,
        })
        .unwrap();

    let (_rx, response) = recv(handle.response_rx).await;
    assert_eq!(
        response.result,
        Err(ApiError::Server {
            status: 500,
            detail: "boom".to_string(),
        })
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_slow_request_does_not_block_fast_one() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solve-math"))
        .and(body_json(json!({"question": "slow"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"solution": "slow"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/solve-math"))
        .and(body_json(json!({"question": "fast"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"solution": "fast"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri(), Duration::from_secs(10)).unwrap();
    let handle = spawn_worker(client).unwrap();

    handle
        .request_tx
        .send(WorkerRequest {
            request: solve("slow"),
            request_id: 1,
        })
        .unwrap();
    handle
        .request_tx
        .send(WorkerRequest {
            request: solve("fast"),
            request_id: 2,
        })
        .unwrap();

    let (rx, first) = recv(handle.response_rx).await;
    assert_eq!(first.request_id, 2);
    let (_rx, second) = recv(rx).await;
    assert_eq!(second.request_id, 1);
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let handle = spawn_worker(client).unwrap();

    // Drop the sender to close the channel
    drop(handle.request_tx);

    // Worker should exit cleanly
    handle
        .thread
        .join()
        .expect("Worker thread should exit cleanly");
}
