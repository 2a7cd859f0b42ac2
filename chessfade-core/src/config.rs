use std::path::Path;

use anyhow::Context as _;

use crate::composite::temporal::TemporalOptions;
use crate::foundation::core::MoveRange;
use crate::foundation::error::{ChessfadeError, ChessfadeResult};
use crate::pipeline::batch::{BatchOpts, Threading};

/// Run settings, loadable from JSON. Command-line flags override file values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// First ply of the window.
    pub start_move: Option<u32>,
    /// Last ply of the window (inclusive).
    pub end_move: Option<u32>,
    /// Downscale divisor.
    pub compression_factor: u32,
    /// Render edge before compression.
    pub base_size: u32,
    /// Oldest-frame weight.
    pub min_intensity: f32,
    /// Newest-frame weight.
    pub max_intensity: f32,
    /// Process games in parallel.
    pub parallel: bool,
    /// Worker threads when parallel.
    pub threads: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        let t = TemporalOptions::default();
        Self {
            start_move: None,
            end_move: None,
            compression_factor: t.compression_factor,
            base_size: t.base_size,
            min_intensity: t.min_intensity,
            max_intensity: t.max_intensity,
            parallel: false,
            threads: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn from_path(path: &Path) -> ChessfadeResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        serde_json::from_str(&text).map_err(|e| {
            ChessfadeError::config(format!("invalid settings '{}': {e}", path.display()))
        })
    }

    /// Parse settings from JSON text; absent keys take defaults.
    pub fn from_json(text: &str) -> ChessfadeResult<Self> {
        serde_json::from_str(text).map_err(|e| ChessfadeError::config(format!("invalid settings: {e}")))
    }

    /// Resolve into validated batch options.
    pub fn batch_opts(&self) -> ChessfadeResult<BatchOpts> {
        let start = self
            .start_move
            .ok_or_else(|| ChessfadeError::config("start_move is required"))?;
        let end = self
            .end_move
            .ok_or_else(|| ChessfadeError::config("end_move is required"))?;

        let opts = BatchOpts {
            range: MoveRange::new(start, end)?,
            temporal: TemporalOptions {
                compression_factor: self.compression_factor,
                base_size: self.base_size,
                min_intensity: self.min_intensity,
                max_intensity: self.max_intensity,
            },
            threading: Threading {
                parallel: self.parallel,
                threads: self.threads,
            },
        };
        opts.validate()?;
        Ok(opts)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
