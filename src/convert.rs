//! One-shot conversion from a result bundle to the viewer's motions.json.
//!
//! Best-effort batch job: deserialize, transform, write, exit. Any error
//! aborts the run before the output file is touched.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::bundle::Bundle;
use crate::logging::{log, obj, v_num, v_str, Domain, Level};
use crate::motion::MotionArray;

pub const DEFAULT_MOTION_KEY: &str = "motion";
pub const DEFAULT_OUTPUT_PATH: &str = "motions.json";

#[derive(Debug, Clone)]
pub struct ConvertJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertSummary {
    pub keys: Vec<String>,
    pub shape: Vec<usize>,
    pub bytes_written: u64,
    pub sha256: String,
}

impl ConvertJob {
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            key: DEFAULT_MOTION_KEY.to_string(),
        }
    }

    pub fn run(&self) -> Result<ConvertSummary> {
        let bundle = Bundle::load(&self.input)?;
        let keys = bundle.keys();
        log(
            Level::Info,
            Domain::Convert,
            "bundle_loaded",
            obj(&[
                ("path", v_str(&self.input.display().to_string())),
                ("keys", json!(keys)),
            ]),
        );

        let raw = bundle.take(&self.key)?;
        let motions = MotionArray::from_value(&raw)?;
        let shape = motions.shape().to_vec();
        log(
            Level::Info,
            Domain::Convert,
            "motion_extracted",
            obj(&[("key", v_str(&self.key)), ("shape", json!(shape))]),
        );

        let doc = json!({ "motions": motions.into_value() });
        let text = serde_json::to_string(&doc)
            .with_context(|| format!("failed to encode output for {}", self.output.display()))?;
        fs::write(&self.output, &text)
            .with_context(|| format!("failed to write {}", self.output.display()))?;

        let sha256 = hex::encode(Sha256::digest(text.as_bytes()));
        let bytes_written = text.len() as u64;
        log(
            Level::Info,
            Domain::Convert,
            "output_written",
            obj(&[
                ("path", v_str(&self.output.display().to_string())),
                ("bytes", v_num(bytes_written as f64)),
                ("sha256", v_str(&sha256)),
            ]),
        );

        Ok(ConvertSummary {
            keys,
            shape,
            bytes_written,
            sha256,
        })
    }
}
