//! Integration tests for the HTTP fetcher against a mock server
//!
//! These tests verify manual redirect following:
//! - Absolute and relative `Location` headers
//! - The hop limit
//! - Redirects without a `Location`
//! - End-to-end verification through `run_verification`

mod helpers;

use helpers::test_config;
use redirect_verifier::{
    run_verification, Config, FetchErrorKind, Fetcher, HttpFetcher, MappingStatus,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher(config: &Config) -> HttpFetcher {
    HttpFetcher::new(config).expect("Failed to build HTTP fetcher")
}

async fn redirect(server: &MockServer, from: &str, status: u16, location: &str) {
    Mock::given(method("GET"))
        .and(path(from))
        .respond_with(ResponseTemplate::new(status).insert_header("Location", location))
        .mount(server)
        .await;
}

async fn page(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status).set_body_string("ok"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_follows_chain_to_final_url() {
    let server = MockServer::start().await;
    let base = server.uri();
    redirect(&server, "/old", 301, &format!("{base}/middle")).await;
    redirect(&server, "/middle", 302, "/new").await;
    page(&server, "/new", 200).await;

    let outcome = fetcher(&test_config(None, None))
        .fetch(&format!("{base}/old"))
        .await
        .expect("fetch should succeed");

    assert_eq!(outcome.final_url, format!("{base}/new"));
    assert_eq!(outcome.status, Some(200));
    assert_eq!(
        outcome.chain,
        vec![
            format!("{base}/old"),
            format!("{base}/middle"),
            format!("{base}/new"),
        ]
    );
}

#[tokio::test]
async fn test_relative_location_resolves_against_current_url() {
    let server = MockServer::start().await;
    let base = server.uri();
    redirect(&server, "/docs/old", 308, "new").await;
    page(&server, "/docs/new", 200).await;

    let outcome = fetcher(&test_config(None, None))
        .fetch(&format!("{base}/docs/old"))
        .await
        .unwrap();

    assert_eq!(outcome.final_url, format!("{base}/docs/new"));
}

#[tokio::test]
async fn test_non_redirect_status_is_still_a_landing() {
    let server = MockServer::start().await;
    let base = server.uri();
    redirect(&server, "/gone", 301, "/missing").await;
    page(&server, "/missing", 404).await;

    let outcome = fetcher(&test_config(None, None))
        .fetch(&format!("{base}/gone"))
        .await
        .unwrap();

    assert_eq!(outcome.final_url, format!("{base}/missing"));
    assert_eq!(outcome.status, Some(404));
}

#[tokio::test]
async fn test_landed_url_has_no_fragment() {
    let server = MockServer::start().await;
    let base = server.uri();
    page(&server, "/p", 200).await;
    redirect(&server, "/moved", 301, "/p#section").await;

    let fetcher = fetcher(&test_config(None, None));
    let direct = fetcher.fetch(&format!("{base}/p#frag")).await.unwrap();
    let redirected = fetcher.fetch(&format!("{base}/moved#top")).await.unwrap();

    assert_eq!(direct.final_url, format!("{base}/p"));
    assert_eq!(redirected.final_url, format!("{base}/p"));
}

#[tokio::test]
async fn test_fragment_on_source_still_verifies_as_success() {
    let server = MockServer::start().await;
    let base = server.uri();
    page(&server, "/p", 200).await;

    let report = run_verification(test_config(Some(&base), Some(&base)), "/p#a, /p")
        .await
        .unwrap();

    assert_eq!(report.records[0].status, MappingStatus::Success);
}

#[tokio::test]
async fn test_requests_look_like_page_navigation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nav"))
        .and(header("sec-fetch-mode", "navigate"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = fetcher(&test_config(None, None))
        .fetch(&format!("{}/nav", server.uri()))
        .await
        .unwrap();

    assert_eq!(outcome.status, Some(200));
}

#[tokio::test]
async fn test_default_hop_limit_follows_long_chains() {
    let server = MockServer::start().await;
    let base = server.uri();
    for hop in 0..15 {
        redirect(&server, &format!("/hop{hop}"), 301, &format!("/hop{}", hop + 1)).await;
    }
    page(&server, "/hop15", 200).await;

    let outcome = fetcher(&Config::default())
        .fetch(&format!("{base}/hop0"))
        .await
        .expect("15 redirects are within the default limit");

    assert_eq!(outcome.final_url, format!("{base}/hop15"));
    assert_eq!(outcome.chain.len(), 16);
}

#[tokio::test]
async fn test_redirect_loop_hits_hop_limit() {
    let server = MockServer::start().await;
    redirect(&server, "/loop", 302, "/loop").await;

    let config = Config {
        max_redirects: 3,
        ..test_config(None, None)
    };
    let err = fetcher(&config)
        .fetch(&format!("{}/loop", server.uri()))
        .await
        .expect_err("loop should fail");

    assert_eq!(err.kind, FetchErrorKind::TooManyRedirects);
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 4);
}

#[tokio::test]
async fn test_redirect_without_location_ends_chain() {
    let server = MockServer::start().await;
    page(&server, "/nowhere", 302).await;

    let outcome = fetcher(&test_config(None, None))
        .fetch(&format!("{}/nowhere", server.uri()))
        .await
        .unwrap();

    assert_eq!(outcome.final_url, format!("{}/nowhere", server.uri()));
    assert_eq!(outcome.status, Some(302));
}

#[tokio::test]
async fn test_relative_token_without_domain_is_invalid_url() {
    let err = fetcher(&test_config(None, None))
        .fetch("/about")
        .await
        .expect_err("relative URL cannot be fetched");

    assert_eq!(err.kind, FetchErrorKind::InvalidUrl);
}

#[tokio::test]
async fn test_run_verification_end_to_end() {
    let server = MockServer::start().await;
    let base = server.uri();
    redirect(&server, "/about", 301, "/company/about").await;
    page(&server, "/company/about", 200).await;
    redirect(&server, "/blog", 301, "/").await;
    page(&server, "/", 200).await;

    let input = "/about, /company/about\n/blog -> /news\nhttp://127.0.0.1:1/x, /y";
    let report = run_verification(test_config(Some(&base), Some(&base)), input)
        .await
        .expect("run should succeed");

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.success, 1);
    assert_eq!(report.summary.mismatch, 1);
    assert_eq!(report.summary.error, 1);

    let statuses: Vec<MappingStatus> = report.records.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            MappingStatus::Success,
            MappingStatus::Mismatch,
            MappingStatus::Error
        ]
    );
    assert_eq!(report.records[1].final_url, format!("{base}/"));
    assert_eq!(report.records[2].final_url, "---");
}
