//! Integration tests for the harvester
//!
//! These tests use wiremock to stand in for the three DU sites and run the
//! units end-to-end, writing JSON into temporary directories.

use du_harvest::config::Config;
use du_harvest::output::{JsonFileWriter, MemoryWriter};
use du_harvest::scrape::HttpFetcher;
use du_harvest::{Harvester, Unit};
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Points every unit at the mock server, with a 1 second request timeout
fn create_test_config(base_url: &str, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.http.user_agent = "TestHarvester/1.0".to_string();
    config.http.timeout_secs = 1;
    config.http.connect_timeout_secs = 1;
    config.http.max_concurrent_enrichments = 4;
    config.output.directory = output_dir.to_string_lossy().into_owned();
    config.bulletin.url = format!("{}/bulletin", base_url);
    config.athletics.url = format!("{}/athletics", base_url);
    config.calendar.url = format!("{}/calendar", base_url);
    config.calendar.link_base = format!("{}/calendar", base_url);
    config
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

fn read_json(path: &Path) -> Value {
    let content = std::fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&content).expect("Output is not valid JSON")
}

const BULLETIN_PAGE: &str = r#"
    <div class="courseblock">
        <p class="courseblocktitle"><strong>COMP-3155</strong> Algorithms</p>
    </div>
    <div class="courseblock">
        <p class="courseblocktitle"><strong>COMP-2400</strong> Computer Organization</p>
    </div>
    <div class="courseblock">
        <p class="courseblocktitle"><strong>COMP-3710</strong> Compilers</p>
        <p class="courseblockextra">Prerequisite: COMP-3000</p>
    </div>
"#;

const ATHLETICS_PAGE: &str = r#"
    <div class="carousel-item">
        <span class="team-name">Men's Hockey</span>
        <span class="opponent-name">Colorado College</span>
        <span class="event-date">Nov 8</span>
    </div>
    <div class="carousel-item">
        <span class="team-name">Women's Lacrosse</span>
    </div>
"#;

const CALENDAR_PAGE: &str = r#"
    <div class="event-item">
        <a class="event-link" href="/events/1"><span class="event-title">Slow Lecture</span></a>
        <span class="event-date">May 1</span>
        <span class="event-time">6:00 PM</span>
    </div>
    <div class="event-item">
        <a class="event-link" href="/events/2"><span class="event-title">Spring Concert</span></a>
        <span class="event-date">May 2</span>
    </div>
"#;

async fn mount_calendar(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(html(CALENDAR_PAGE))
        .mount(server)
        .await;

    // Slower than the client timeout
    Mock::given(method("GET"))
        .and(path("/calendar/events/1"))
        .respond_with(
            html(r#"<div class="event-description">Never arrives</div>"#)
                .set_delay(Duration::from_secs(3)),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/calendar/events/2"))
        .respond_with(html(
            r#"<div class="event-description"> Lamont School of Music ensembles. </div>"#,
        ))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_calendar_waits_for_every_enrichment() {
    let mock_server = MockServer::start().await;
    mount_calendar(&mock_server).await;

    let output = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&mock_server.uri(), output.path());
    let harvester = Harvester::from_config(&config).expect("Failed to create harvester");

    let written = harvester.run_calendar().await.expect("Calendar unit failed");
    assert_eq!(written, 2);

    let json = read_json(&output.path().join("calendar_events.json"));
    let events = json["events"].as_array().expect("events array");
    assert_eq!(events.len(), 2);

    assert_eq!(events[0]["title"], "Slow Lecture");
    assert_eq!(events[0]["time"], "6:00 PM");
    assert!(events[0].get("description").is_none());

    assert_eq!(events[1]["title"], "Spring Concert");
    assert!(events[1]["time"].is_null());
    assert_eq!(events[1]["description"], "Lamont School of Music ensembles.");

    let raw = std::fs::read_to_string(output.path().join("calendar_events.json")).unwrap();
    assert!(!raw.contains("/events/"));
    assert!(!raw.contains("eventUrl"));
    assert!(!raw.contains("detail_url"));
}

#[tokio::test]
async fn test_calendar_without_links_makes_no_detail_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/calendar"))
        .respond_with(html(
            r#"
            <div class="event-item"><span class="event-title">Open House</span></div>
            <div class="event-item"><span class="event-title">Career Fair</span></div>
            "#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path_regex("^/calendar/.+"))
        .respond_with(html("unexpected"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());
    let harvester = Harvester::new(
        &config,
        HttpFetcher::from_config(&config.http).unwrap(),
        MemoryWriter::new(),
    )
    .unwrap();

    harvester.run_calendar().await.expect("Calendar unit failed");

    let json = harvester.writer().json("calendar_events.json").unwrap();
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.get("description").is_none()));
}

#[tokio::test]
async fn test_full_run_writes_three_files() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bulletin"))
        .respond_with(html(BULLETIN_PAGE))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/athletics"))
        .respond_with(html(ATHLETICS_PAGE))
        .mount(&mock_server)
        .await;

    mount_calendar(&mock_server).await;

    let output = TempDir::new().unwrap();
    let results_dir = output.path().join("results");
    let config = create_test_config(&mock_server.uri(), &results_dir);
    let harvester = Harvester::from_config(&config).unwrap();

    let summary = harvester.run_all().await;
    assert_eq!(summary.failed(), 0);

    let bulletin = read_json(&results_dir.join("bulletin.json"));
    assert_eq!(
        bulletin,
        serde_json::json!({
            "courses": [{ "course": "COMP-3155", "title": "Algorithms" }]
        })
    );

    let athletics = read_json(&results_dir.join("athletic_events.json"));
    assert_eq!(
        athletics,
        serde_json::json!({
            "events": [{ "duTeam": "Men's Hockey", "opponent": "Colorado College", "date": "Nov 8" }]
        })
    );

    let calendar = read_json(&results_dir.join("calendar_events.json"));
    assert_eq!(calendar["events"].as_array().unwrap().len(), 2);

    // 2-space indentation
    let raw = std::fs::read_to_string(results_dir.join("bulletin.json")).unwrap();
    assert!(raw.starts_with("{\n  \"courses\": [\n    {"));
}

#[tokio::test]
async fn test_failed_unit_writes_nothing_and_others_continue() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bulletin"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/athletics"))
        .respond_with(html(ATHLETICS_PAGE))
        .mount(&mock_server)
        .await;

    mount_calendar(&mock_server).await;

    let output = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), output.path());
    let writer = JsonFileWriter::new(output.path());
    let harvester = Harvester::new(
        &config,
        HttpFetcher::from_config(&config.http).unwrap(),
        writer,
    )
    .unwrap();

    let summary = harvester.run_all().await;

    assert_eq!(summary.failed(), 1);
    assert!(summary.outcome(Unit::Bulletin).unwrap().result.is_err());
    assert!(!output.path().join("bulletin.json").exists());
    assert!(output.path().join("athletic_events.json").exists());
    assert!(output.path().join("calendar_events.json").exists());
}

#[tokio::test]
async fn test_rerun_overwrites_previous_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bulletin"))
        .respond_with(html(BULLETIN_PAGE))
        .mount(&mock_server)
        .await;

    let output = TempDir::new().unwrap();
    let stale = output.path().join("bulletin.json");
    std::fs::write(&stale, "{ \"courses\": [1, 2, 3, 4, 5] }").unwrap();

    let config = create_test_config(&mock_server.uri(), output.path());
    let harvester = Harvester::from_config(&config).unwrap();
    harvester.run_bulletin().await.expect("Bulletin unit failed");

    let json = read_json(&stale);
    assert_eq!(json["courses"].as_array().unwrap().len(), 1);
}
