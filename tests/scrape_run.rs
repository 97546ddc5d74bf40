//! End-to-end runs against a mock search engine.
//!
//! Each test prepares a [`RunPlan`] pointed at a wiremock server and writes
//! into a temp directory, then checks the results file on disk.

use ddg_scrape::config::OutputConfig;
use ddg_scrape::{AppConfig, AppError, RunOptions, RunPlan};
use ddg_search::{IdentitySelector, SearchConfig, SearchError};
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATS_HTML: &str = include_str!("../ddg-search/test-data/cats.html");

const CATS_EXPECTED: &str = "Rank: 1\n\
Title: Cat - Wikipedia\n\
URL: https://en.wikipedia.org/wiki/Cat\n\
Description: The cat is a domestic species of small carnivorous mammal.\n\
\n\
Rank: 2\n\
Title: Cat | Breeds, Origins, History, Body Types, & Facts | Britannica\n\
URL: https://www.britannica.com/animal/cat\n\
Description: Cat, domesticated member of the family Felidae.\n\
\n";

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig {
        search: SearchConfig {
            base_url: format!("{}/html/", server.uri()),
            timeout_seconds: Some(5),
            ..Default::default()
        },
        ..Default::default()
    }
}

async fn serve_cats(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/html/"))
        .and(query_param("q", "cats"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CATS_HTML))
        .mount(server)
        .await;
}

async fn run_to(server: &MockServer, output: &Path, seed: u64) -> ddg_scrape::Result<usize> {
    let options = RunOptions {
        term: Some("  cats  ".into()),
        output: Some(output.to_path_buf()),
        count: Some(2),
        config: config_for(server),
        ..Default::default()
    };
    let plan = RunPlan::prepare(options, &mut IdentitySelector::seeded(seed))?;
    let summary = plan.execute().await?;
    Ok(summary.results_written)
}

#[tokio::test]
async fn cats_example_writes_two_blocks() {
    let server = MockServer::start().await;
    serve_cats(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("cats.txt");

    let written = run_to(&server, &out, 1).await.expect("run");

    assert_eq!(written, 2);
    let content = std::fs::read_to_string(&out).expect("read output");
    assert_eq!(content, CATS_EXPECTED);
    assert_eq!(content.matches("Rank:").count(), 2);
    assert!(!content.contains("(Ad)"));
}

#[tokio::test]
async fn identical_inputs_give_identical_files() {
    let server = MockServer::start().await;
    serve_cats(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");

    // Different seeds pick different identities; output must not change.
    run_to(&server, &first, 1).await.expect("first run");
    run_to(&server, &second, 99).await.expect("second run");

    let a = std::fs::read(&first).expect("read first");
    let b = std::fs::read(&second).expect("read second");
    assert_eq!(a, b);
}

#[tokio::test]
async fn default_file_name_uses_term_in_output_directory() {
    let server = MockServer::start().await;
    serve_cats(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");

    let mut config = config_for(&server);
    config.output = OutputConfig {
        directory: Some(dir.path().to_path_buf()),
    };
    let options = RunOptions {
        term: Some("cats".into()),
        config,
        ..Default::default()
    };
    let plan = RunPlan::prepare(options, &mut IdentitySelector::seeded(5)).expect("plan");
    let summary = plan.execute().await.expect("run");

    assert_eq!(summary.output_path, dir.path().join("cats.txt"));
    assert!(summary.output_path.exists());
}

#[tokio::test]
async fn blocked_run_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string(CATS_HTML))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("cats.txt");

    let err = run_to(&server, &out, 1).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Search(SearchError::Blocked { status: 429 })
    ));
    assert!(!out.exists());
}

#[tokio::test]
async fn parse_failure_leaves_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("cats.txt");

    let err = run_to(&server, &out, 1).await.unwrap_err();

    assert!(matches!(err, AppError::Search(SearchError::Parse(_))));
    assert!(!out.exists());
}

#[tokio::test]
async fn unwritable_output_is_write_error() {
    let server = MockServer::start().await;
    serve_cats(&server).await;
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("no-such-dir").join("cats.txt");

    let err = run_to(&server, &out, 1).await.unwrap_err();

    assert!(matches!(err, AppError::Write { .. }), "got {err:?}");
}
