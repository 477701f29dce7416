// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{FetcherSettings, ScanSettings, SelectorSettings};
use crate::domain::models::job_record::ScrapeTarget;
use crate::domain::scraping::ListingScraper;
use crate::domain::services::scan_service::JobListingScraper;
use crate::engines::router::ContentFetcher;
use crate::engines::traits::RenderMode;
use axum::{routing::get, Router};
use std::collections::HashMap;
use tokio::net::TcpListener;

const TWO_LISTINGS: &str = r#"<html><body>
    <div class="job-card">
        <h2>  Senior
	Engineer  </h2>
        <span class="location">Remote</span>
        <span class="department">Platform</span>
        <p class="description">Build things.</p>
        <p class="requirements">Rust.</p>
        <span class="date">2025-01-15</span>
        <a href="/jobs/1">Apply</a>
    </div>
    <div class="job-listing">
        <h2>Data   Analyst</h2>
        <span class="location">Berlin</span>
        <span class="department">Insights</span>
        <p class="description">Analyze things.</p>
        <p class="requirements">SQL.</p>
        <span class="date">2025-02-01</span>
        <a href="/jobs/2">Apply</a>
    </div>
</body></html>"#;

const PARTIAL_LISTINGS: &str = r#"<html><body>
    <div class="job-card">
        <h2>Site Reliability Engineer</h2>
        <span class="location">Oslo</span>
        <a href="/jobs/3">Apply</a>
    </div>
    <div class="job-card">
        <span class="location">Madrid</span>
        <span class="department">Support</span>
        <a href="/jobs/4">Apply</a>
    </div>
</body></html>"#;

async fn start_test_server() -> String {
    let app = Router::new()
        .route("/careers", get(|| async { axum::response::Html(TWO_LISTINGS) }))
        .route(
            "/partial",
            get(|| async { axum::response::Html(PARTIAL_LISTINGS) }),
        )
        .route(
            "/empty",
            get(|| async { axum::response::Html("<html><body><p>No openings</p></body></html>") }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn test_selectors() -> SelectorSettings {
    SelectorSettings {
        signature_classes: vec![
            "job-listing".to_string(),
            "job-card".to_string(),
            "job-posting".to_string(),
        ],
        title: "h2".to_string(),
        link: "a".to_string(),
        location: ".location".to_string(),
        department: ".department".to_string(),
        description: ".description".to_string(),
        requirements: ".requirements".to_string(),
        posting_date: ".date".to_string(),
    }
}

fn build_scraper(url: &str) -> JobListingScraper {
    let fetcher = ContentFetcher::new(FetcherSettings {
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        timeout_secs: 10,
        headers: HashMap::new(),
    });
    let scan = ScanSettings {
        target_url: url.to_string(),
        render_mode: RenderMode::Static,
    };
    let target = ScrapeTarget::new(url).unwrap();
    JobListingScraper::new(target, fetcher, &scan, test_selectors())
}

#[tokio::test]
async fn test_scan_fetch_failure_returns_empty_result() {
    let server_url = start_test_server().await;

    // Unrouted path responds 404
    let scraper = build_scraper(&format!("{}/missing", server_url));
    let result = scraper.get_job_listings().await;

    assert!(result.records.is_empty());
    assert_eq!(result.positions_analyzed, 0);
}

#[tokio::test]
async fn test_scan_without_matching_elements_returns_empty_result() {
    let server_url = start_test_server().await;

    let scraper = build_scraper(&format!("{}/empty", server_url));
    let result = scraper.get_job_listings().await;

    assert!(result.records.is_empty());
    assert_eq!(result.positions_analyzed, 0);
}

#[tokio::test]
async fn test_scan_extracts_all_well_formed_listings() {
    let server_url = start_test_server().await;

    let scraper = build_scraper(&format!("{}/careers", server_url));
    let result = scraper.get_job_listings().await;

    assert_eq!(result.positions_analyzed, 2);
    assert_eq!(result.records.len(), result.positions_analyzed);

    let first = &result.records[0];
    assert_eq!(first.title.as_deref(), Some("Senior Engineer"));
    assert_eq!(first.location.as_deref(), Some("Remote"));
    assert_eq!(first.department.as_deref(), Some("Platform"));
    assert_eq!(first.description.as_deref(), Some("Build things."));
    assert_eq!(first.requirements.as_deref(), Some("Rust."));
    assert_eq!(first.posting_date.as_deref(), Some("2025-01-15"));
    assert_eq!(first.url.as_deref(), Some("/jobs/1"));

    let second = &result.records[1];
    assert_eq!(second.title.as_deref(), Some("Data Analyst"));
    assert_eq!(second.url.as_deref(), Some("/jobs/2"));
}

#[tokio::test]
async fn test_scan_listing_with_missing_title_is_still_counted() {
    let server_url = start_test_server().await;

    let scraper = build_scraper(&format!("{}/partial", server_url));
    let result = scraper.get_job_listings().await;

    assert_eq!(result.positions_analyzed, 2);
    assert_eq!(result.records.len(), 2);

    assert_eq!(
        result.records[0].title.as_deref(),
        Some("Site Reliability Engineer")
    );
    assert!(result.records[1].title.is_none());
    assert_eq!(result.records[1].location.as_deref(), Some("Madrid"));
    assert_eq!(result.records[1].department.as_deref(), Some("Support"));
}

#[tokio::test]
async fn test_scan_invalid_field_selector_skips_every_node() {
    let server_url = start_test_server().await;
    let url = format!("{}/careers", server_url);

    let fetcher = ContentFetcher::new(FetcherSettings {
        user_agent: "Mozilla/5.0".to_string(),
        timeout_secs: 10,
        headers: HashMap::new(),
    });
    let scan = ScanSettings {
        target_url: url.clone(),
        render_mode: RenderMode::Static,
    };
    let mut selectors = test_selectors();
    selectors.title = ":::".to_string();

    let scraper =
        JobListingScraper::new(ScrapeTarget::new(&url).unwrap(), fetcher, &scan, selectors);
    let result = scraper.get_job_listings().await;

    // Hard extraction failures are skipped, never appended and never counted
    assert!(result.records.is_empty());
    assert_eq!(result.positions_analyzed, 0);
}
