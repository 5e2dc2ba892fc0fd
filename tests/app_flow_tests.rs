//! End-to-end flows: key presses in, HTTP calls to a mock server, answers out

use std::thread::JoinHandle;
use std::time::Duration;

use mathelf::api::ApiClient;
use mathelf::api::worker::spawn_worker;
use mathelf::app::{App, ServerStatus};
use mathelf::config::Config;
use mathelf::notification::NotificationLevel;
use mathelf::tabs::Tab;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(base_url: &str, tab: Tab) -> (App, JoinHandle<()>) {
    let mut config = Config::default();
    config.server.base_url = base_url.to_string();

    let client = ApiClient::new(base_url, Duration::from_secs(5)).unwrap();
    let worker = spawn_worker(client).unwrap();
    let app = App::new(&config, tab, worker.request_tx, worker.response_rx);
    (app, worker.thread)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()));
    }
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::empty()));
}

fn submit(app: &mut App) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
}

async fn wait_until_idle(app: &mut App) {
    for _ in 0..500 {
        app.poll_responses();
        if !app.page.loading {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("request did not finish in time");
}

#[tokio::test(flavor = "multi_thread")]
async fn solve_answer_is_displayed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solve-math"))
        .and(body_json(json!({"question": "2x = 8"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"solution": "x = **4**"})))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, _worker) = app_for(&server.uri(), Tab::Solve);
    type_text(&mut app, "2x = 8");
    submit(&mut app);
    assert!(app.page.loading);

    wait_until_idle(&mut app).await;

    assert_eq!(app.page.result_markdown(), Some("x = **4**"));
}

#[tokio::test(flavor = "multi_thread")]
async fn concept_request_carries_detail_level() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/explain-concept"))
        .and(body_json(json!({"concept": "limit", "detail_level": "intermediate"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"explanation": {"content": "A limit is..."}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, _worker) = app_for(&server.uri(), Tab::Concept);
    type_text(&mut app, "limit");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    wait_until_idle(&mut app).await;

    assert_eq!(app.page.result_markdown(), Some("A limit is..."));
}

#[tokio::test(flavor = "multi_thread")]
async fn advice_sends_problem_areas() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/learning-advice"))
        .and(body_json(json!({
            "student_id": "s-7",
            "problem_areas": ["fractions", "ratios"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "advice": "Practice daily.",
            "resources": [{"title": "Fraction drills", "url": "https://example.com/f"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, _worker) = app_for(&server.uri(), Tab::Advice);
    type_text(&mut app, "s-7");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "fractions");
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "ratios");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    wait_until_idle(&mut app).await;

    let result = app.page.result_markdown().unwrap();
    assert!(result.starts_with("Practice daily."));
    assert!(result.contains("- Fraction drills (https://example.com/f)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_is_notified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/solve-math"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "model offline"})))
        .mount(&server)
        .await;

    let (mut app, _worker) = app_for(&server.uri(), Tab::Solve);
    type_text(&mut app, "1 + 1");
    submit(&mut app);

    wait_until_idle(&mut app).await;

    let notification = app.notification.peek().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert_eq!(notification.message, "Server error 500: model offline");
    assert_eq!(app.page.result_markdown(), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_submit_makes_no_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (mut app, _worker) = app_for(&server.uri(), Tab::Grade);
    submit(&mut app);

    assert!(!app.page.loading);
    assert_eq!(
        app.notification.peek().unwrap().message,
        "Please enter the question"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_reports_cannot_connect() {
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let (mut app, _worker) = app_for(&format!("http://127.0.0.1:{}", port), Tab::Solve);
    type_text(&mut app, "1 + 1");
    submit(&mut app);

    wait_until_idle(&mut app).await;

    let notification = app.notification.peek().unwrap();
    assert!(notification.message.starts_with("Cannot connect to server"));
    assert_eq!(app.server_status, ServerStatus::Offline);
}

#[tokio::test(flavor = "multi_thread")]
async fn health_check_marks_server_online() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
        .mount(&server)
        .await;

    let (mut app, _worker) = app_for(&server.uri(), Tab::Solve);
    app.check_health();

    for _ in 0..500 {
        app.poll_responses();
        if app.server_status != ServerStatus::Checking {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(app.server_status, ServerStatus::Online("healthy".to_string()));
}
