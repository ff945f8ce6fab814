pub mod chunker;
pub mod runner;

pub use chunker::{chunk, chunk_slice, Chunks};
pub use runner::{run_batched, BatchError};
