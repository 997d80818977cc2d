use std::{fs::File, io::BufReader, path::Path};

use crate::foundation::{
    core::Size,
    error::{ArtgenError, ArtgenResult},
};

/// Tunables for a [`DrawEngine`](crate::DrawEngine).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Backing-store pixels per host pixel.
    pub pixel_ratio: f64,
    /// Frames whose total time exceeds this are logged with their timing report.
    pub slow_frame_budget_ms: f64,
    /// Seed for the value resolver; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Logical coordinate system; defaults to the physical surface size.
    pub coordinate_system: Option<Size>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pixel_ratio: 2.0,
            slow_frame_budget_ms: 15.0,
            seed: None,
            coordinate_system: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> ArtgenResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ArtgenError::serde(format!("parse engine config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ArtgenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ArtgenError::config(format!("open engine config '{}': {e}", path.display()))
        })?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            ArtgenError::serde(format!("parse engine config '{}': {e}", path.display()))
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> ArtgenResult<()> {
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(ArtgenError::config(format!(
                "pixel_ratio must be finite and positive, got {}",
                self.pixel_ratio
            )));
        }
        if !self.slow_frame_budget_ms.is_finite() || self.slow_frame_budget_ms < 0.0 {
            return Err(ArtgenError::config(format!(
                "slow_frame_budget_ms must be finite and non-negative, got {}",
                self.slow_frame_budget_ms
            )));
        }
        if let Some(cs) = self.coordinate_system {
            Size::new(cs.width, cs.height)
                .map_err(|e| ArtgenError::config(format!("coordinate_system: {e}")))?;
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn with_coordinate_system(mut self, size: Size) -> Self {
        self.coordinate_system = Some(size);
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
