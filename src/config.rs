//! Startup configuration for the listing server.
//!
//! CLI flags in the reference form (`--pred_path <dir>` etc.), with
//! environment-variable fallbacks for deployment defaults.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_VISUALIZER: &str = "http://127.0.0.1:8001/";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8120;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory scanned for prediction files on every request.
    pub pred_path: PathBuf,
    /// Base URL of the external visualizer; `?file=<path>` is appended as-is.
    pub visualizer: String,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Parse `--pred_path`, `--visualizer`, `--host`, `--port` from the given
    /// argument stream. Environment variables (`PRED_PATH`, `VISUALIZER_URL`,
    /// `HOST`, `PORT`) supply defaults; flags win.
    pub fn from_args<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut pred_path = std::env::var("PRED_PATH").ok();
        let mut visualizer =
            std::env::var("VISUALIZER_URL").unwrap_or_else(|_| DEFAULT_VISUALIZER.to_string());
        let mut host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let mut port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--pred_path" => pred_path = Some(next_value(&mut args, "--pred_path")?),
                "--visualizer" => visualizer = next_value(&mut args, "--visualizer")?,
                "--host" => host = next_value(&mut args, "--host")?,
                "--port" => {
                    let raw = next_value(&mut args, "--port")?;
                    port = raw
                        .parse()
                        .with_context(|| format!("invalid --port value: {}", raw))?;
                }
                other => bail!("unknown argument: {}", other),
            }
        }

        let pred_path = match pred_path {
            Some(p) => PathBuf::from(p),
            None => bail!("--pred_path is required"),
        };
        Url::parse(&visualizer)
            .with_context(|| format!("invalid visualizer url: {}", visualizer))?;

        Ok(Self {
            pred_path,
            visualizer,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{} requires a value", flag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ServerConfig> {
        ServerConfig::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn parses_all_flags() {
        let cfg = parse(&[
            "--pred_path",
            "/data/preds",
            "--visualizer",
            "http://viz:8001/",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(cfg.pred_path, PathBuf::from("/data/preds"));
        assert_eq!(cfg.visualizer, "http://viz:8001/");
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn pred_path_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn defaults_apply() {
        let cfg = parse(&["--pred_path", "/data"]).unwrap();
        assert_eq!(cfg.visualizer, DEFAULT_VISUALIZER);
        assert_eq!(cfg.host, DEFAULT_HOST);
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn rejects_bad_visualizer_url() {
        assert!(parse(&["--pred_path", "/data", "--visualizer", "not a url"]).is_err());
    }

    #[test]
    fn rejects_bad_port() {
        assert!(parse(&["--pred_path", "/data", "--port", "eight"]).is_err());
    }

    #[test]
    fn rejects_unknown_flag() {
        assert!(parse(&["--pred_path", "/data", "--verbose"]).is_err());
    }
}
