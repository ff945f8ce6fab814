use std::env;

use anyhow::{Context, Result};
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::batch::chunker::{chunk, Chunks};
use crate::error::{UtilError, UtilResult};
use crate::math::units::{check_decimals, format_units};

pub const DEFAULT_CHUNK_SIZE: usize = 50;
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 18;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Batching
    pub chunk_size: usize,

    // Display of scaled integers
    pub display_decimals: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Project-specific file first, then a generic .env
        dotenv::from_filename("scaled_batch.env").ok();
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key -> value source. Missing keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chunk_size = match lookup("BATCH_CHUNK_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| {
                    format!("BATCH_CHUNK_SIZE must be an integer, got {:?}", raw)
                })?,
            None => DEFAULT_CHUNK_SIZE,
        };
        if chunk_size == 0 {
            return Err(UtilError::invalid("BATCH_CHUNK_SIZE must be positive"))
                .context("invalid batching configuration");
        }

        let display_decimals = match lookup("DISPLAY_DECIMALS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| {
                    format!("DISPLAY_DECIMALS must be an integer, got {:?}", raw)
                })?,
            None => DEFAULT_DISPLAY_DECIMALS,
        };
        let display_decimals =
            check_decimals(display_decimals).context("invalid display configuration")?;

        log::debug!(
            "loaded config: chunk_size={}, display_decimals={}",
            chunk_size,
            display_decimals
        );
        Ok(Config {
            chunk_size,
            display_decimals,
        })
    }

    /// Chunk `sequence` with the configured size.
    pub fn chunk<S: IntoIterator>(&self, sequence: S) -> UtilResult<Chunks<S::IntoIter>> {
        chunk(sequence, self.chunk_size)
    }

    /// Format a raw amount with the configured display decimals.
    pub fn format(&self, raw: &BigInt) -> UtilResult<String> {
        format_units(raw, self.display_decimals)
    }
}
