//! Prediction Listing Server
//!
//! Serves a single HTML page of links into the external visualizer, one per
//! JSON prediction file. Each request re-scans the directory; there is no
//! cross-request state.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::ServerConfig;
use crate::logging::{log, obj, v_num, v_str, Domain, Level};

pub struct Response {
    pub status: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    fn html(body: String) -> Self {
        Self {
            status: "200 OK",
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn json(body: &str) -> Self {
        Self {
            status: "200 OK",
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: "404 NOT FOUND",
            content_type: "text/plain",
            body: "Not Found".to_string(),
        }
    }

    fn internal_error() -> Self {
        Self {
            status: "500 INTERNAL SERVER ERROR",
            content_type: "text/plain",
            body: "Internal Server Error".to_string(),
        }
    }
}

/// Non-recursive scan for `*.json` files, sorted for stable page output.
/// A missing or unreadable directory yields an empty listing; the condition
/// is logged so a misconfigured `pred_path` is visible to the operator.
pub fn scan_predictions(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log(
                Level::Warn,
                Domain::Serve,
                "pred_dir_unreadable",
                obj(&[
                    ("path", v_str(&dir.display().to_string())),
                    ("error", v_str(&err.to_string())),
                ]),
            );
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// Render the index page: a header naming the directory, then one anchor per
/// prediction file with its path passed as the `file` query parameter.
pub fn render_index(cfg: &ServerConfig) -> String {
    let files = scan_predictions(&cfg.pred_path);
    log(
        Level::Debug,
        Domain::Serve,
        "index_rendered",
        obj(&[
            ("path", v_str(&cfg.pred_path.display().to_string())),
            ("files", v_num(files.len() as f64)),
        ]),
    );
    let mut out = format!("[#] Visualize predictions at {}", cfg.pred_path.display());
    for file in files {
        let path = file.display();
        out.push_str(&format!(
            "<br><a href='{}?file={}'>{}</a>",
            cfg.visualizer, path, path
        ));
    }
    out
}

fn route(request_line: &str, cfg: &ServerConfig) -> Result<Response> {
    if request_line.starts_with("GET /healthz") {
        return Ok(Response::json(r#"{"status":"ok"}"#));
    }
    if request_line.starts_with("GET / ") || request_line == "GET /" {
        return Ok(Response::html(render_index(cfg)));
    }
    Ok(Response::not_found())
}

/// Dispatch one request line. Faults become a 500 response, never a crash.
pub fn handle_request(request_line: &str, cfg: &ServerConfig) -> Response {
    match route(request_line, cfg) {
        Ok(response) => response,
        Err(err) => {
            log(
                Level::Error,
                Domain::Serve,
                "request_failed",
                obj(&[
                    ("request", v_str(request_line)),
                    ("error", v_str(&format!("{:#}", err))),
                ]),
            );
            Response::internal_error()
        }
    }
}

fn handle_connection(mut stream: TcpStream, cfg: &ServerConfig) -> Result<()> {
    let request_line = {
        let buf_reader = BufReader::new(&stream);
        match buf_reader.lines().next() {
            Some(Ok(line)) => line,
            _ => return Ok(()),
        }
    };

    let response = handle_request(&request_line, cfg);
    let raw = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n{}",
        response.status,
        response.content_type,
        response.body.len(),
        response.body
    );
    stream.write_all(raw.as_bytes())?;
    Ok(())
}

/// Synchronous accept loop; each request is handled independently.
pub fn serve(cfg: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(cfg.bind_addr())
        .with_context(|| format!("failed to bind {}", cfg.bind_addr()))?;
    log(
        Level::Info,
        Domain::System,
        "server_started",
        obj(&[
            ("addr", v_str(&cfg.bind_addr())),
            ("pred_path", v_str(&cfg.pred_path.display().to_string())),
            ("visualizer", v_str(&cfg.visualizer)),
        ]),
    );

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(s) => s,
            Err(_) => continue,
        };
        if let Err(err) = handle_connection(stream, cfg) {
            log(
                Level::Warn,
                Domain::Serve,
                "connection_failed",
                obj(&[("error", v_str(&err.to_string()))]),
            );
        }
    }
    Ok(())
}
