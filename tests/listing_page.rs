//! Listing server integration tests: directory scan, page rendering, routing.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use motionviz::config::ServerConfig;
use motionviz::server::{handle_request, render_index, scan_predictions};

fn cfg_for(dir: &Path) -> ServerConfig {
    ServerConfig {
        pred_path: dir.to_path_buf(),
        visualizer: "http://viz/".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8120,
    }
}

#[test]
fn scan_finds_only_json_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), "{}").unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("c.json"), "{}").unwrap();

    let files = scan_predictions(dir.path());
    assert_eq!(files.len(), 2);
    assert_eq!(files[0], dir.path().join("a.json"));
    assert_eq!(files[1], dir.path().join("b.json"));
}

#[test]
fn index_links_every_prediction_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), "{}").unwrap();
    fs::write(dir.path().join("b.json"), "{}").unwrap();
    let cfg = cfg_for(dir.path());

    let page = render_index(&cfg);
    assert_eq!(page.matches("<a href='").count(), 2);
    for name in ["a.json", "b.json"] {
        let path = dir.path().join(name);
        assert!(
            page.contains(&format!("href='http://viz/?file={}'", path.display())),
            "missing link for {} in: {}",
            name,
            page
        );
    }
}

#[test]
fn index_names_the_scanned_directory() {
    let dir = TempDir::new().unwrap();
    let cfg = cfg_for(dir.path());

    let page = render_index(&cfg);
    assert!(page.contains(&format!(
        "Visualize predictions at {}",
        dir.path().display()
    )));
}

#[test]
fn empty_directory_renders_header_only() {
    let dir = TempDir::new().unwrap();
    let cfg = cfg_for(dir.path());

    let response = handle_request("GET / HTTP/1.1", &cfg);
    assert_eq!(response.status, "200 OK");
    assert!(response.content_type.starts_with("text/html"));
    assert_eq!(response.body.matches("<a href='").count(), 0);
}

#[test]
fn missing_directory_yields_empty_listing() {
    let cfg = cfg_for(&PathBuf::from("/no/such/prediction-dir"));

    assert!(scan_predictions(&cfg.pred_path).is_empty());
    let response = handle_request("GET / HTTP/1.1", &cfg);
    assert_eq!(response.status, "200 OK");
    assert_eq!(response.body.matches("<a href='").count(), 0);
}

#[test]
fn unknown_path_is_not_found() {
    let dir = TempDir::new().unwrap();
    let cfg = cfg_for(dir.path());

    let response = handle_request("GET /nope HTTP/1.1", &cfg);
    assert_eq!(response.status, "404 NOT FOUND");
}

#[test]
fn health_check_responds() {
    let dir = TempDir::new().unwrap();
    let cfg = cfg_for(dir.path());

    let response = handle_request("GET /healthz HTTP/1.1", &cfg);
    assert_eq!(response.status, "200 OK");
    assert_eq!(response.content_type, "application/json");
    assert!(response.body.contains("ok"));
}
