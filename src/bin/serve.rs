//! Prediction Listing Server
//!
//! Serves an HTML index of JSON prediction files with links into the
//! external visualizer. Run with: cargo run --bin serve -- --pred_path <dir>

use std::process;

use motionviz::config::ServerConfig;
use motionviz::server;

fn main() {
    let cfg = match ServerConfig::from_args(std::env::args().skip(1)) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{:#}", err);
            eprintln!(
                "usage: serve --pred_path <dir> [--visualizer <url>] [--host <addr>] [--port <port>]"
            );
            process::exit(2);
        }
    };

    println!("Prediction listing server running at http://{}", cfg.bind_addr());
    println!();
    println!("Endpoints:");
    println!("  GET /         - HTML listing of prediction files");
    println!("  GET /healthz  - Health check");
    println!();

    if let Err(err) = server::serve(&cfg) {
        eprintln!("server failed: {:#}", err);
        process::exit(1);
    }
}
