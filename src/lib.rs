// lib.rs - Library exports for batching and fixed-point helpers

pub mod batch;
pub mod config;
pub mod error;
pub mod math;

pub use batch::{chunk, run_batched, BatchError, Chunks};
pub use config::Config;
pub use error::{UtilError, UtilResult};
pub use math::{average, ceil_div, ScaledAmount};
