//! Convert a motion result bundle into the viewer's motions.json.
//!
//! Usage:
//!   convert <bundle.json> [options]
//!
//! Options:
//!   --key <name>   Bundle key holding the motion array (default: motion)
//!   --out <path>   Output path (default: motions.json)

use std::path::PathBuf;
use std::process;

use motionviz::convert::{ConvertJob, DEFAULT_MOTION_KEY, DEFAULT_OUTPUT_PATH};

fn usage() -> ! {
    eprintln!("usage: convert <bundle.json> [--key <name>] [--out <path>]");
    process::exit(2);
}

fn main() {
    let mut args = std::env::args().skip(1);
    let mut input: Option<PathBuf> = None;
    let mut key = DEFAULT_MOTION_KEY.to_string();
    let mut output = PathBuf::from(DEFAULT_OUTPUT_PATH);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--key" => match args.next() {
                Some(v) => key = v,
                None => usage(),
            },
            "--out" => match args.next() {
                Some(v) => output = PathBuf::from(v),
                None => usage(),
            },
            other if input.is_none() && !other.starts_with("--") => {
                input = Some(PathBuf::from(other));
            }
            _ => usage(),
        }
    }

    let input = match input {
        Some(p) => p,
        None => usage(),
    };

    let job = ConvertJob { input, output, key };
    match job.run() {
        Ok(summary) => {
            println!(
                "wrote {} ({} bytes, shape {:?}, sha256 {})",
                job.output.display(),
                summary.bytes_written,
                summary.shape,
                summary.sha256
            );
        }
        Err(err) => {
            eprintln!("conversion failed: {:#}", err);
            process::exit(1);
        }
    }
}
