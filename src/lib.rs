//! Utilities for a motion-visualization workflow.
//!
//! Two independent components share this crate:
//! - the converter (`bundle`, `motion`, `convert`): extracts a motion
//!   trajectory array from a result bundle and writes the viewer's
//!   `motions.json`
//! - the listing server (`config`, `server`): serves one HTML page of links
//!   into the external visualizer, one per prediction file

pub mod bundle;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod motion;
pub mod server;
