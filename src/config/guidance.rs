//! Guidance content and flow-diagram configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Guidance configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GuidanceConfig {
    /// How long each flow stage stays active, in milliseconds
    #[serde(default = "default_stage_period_ms")]
    pub stage_period_ms: u64,

    /// YAML content file; built-in content is served when unset
    pub content_path: Option<PathBuf>,

    /// X coordinate of the first stage node
    #[serde(default = "default_layout_base_x")]
    pub layout_base_x: f32,

    /// Distance between consecutive stage nodes along X
    #[serde(default = "default_layout_spacing")]
    pub layout_spacing: f32,

    #[serde(default)]
    pub layout_y: f32,

    #[serde(default)]
    pub layout_z: f32,
}

impl GuidanceConfig {
    /// Get the stage period as Duration
    pub fn stage_period(&self) -> Duration {
        Duration::from_millis(self.stage_period_ms)
    }

    /// Validate guidance configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stage_period_ms == 0 {
            return Err(ValidationError::InvalidStagePeriod);
        }
        if !self.layout_spacing.is_finite() || self.layout_spacing <= 0.0 {
            return Err(ValidationError::InvalidLayoutSpacing);
        }
        if !(self.layout_base_x.is_finite() && self.layout_y.is_finite() && self.layout_z.is_finite())
        {
            return Err(ValidationError::InvalidLayoutOrigin);
        }
        Ok(())
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            stage_period_ms: default_stage_period_ms(),
            content_path: None,
            layout_base_x: default_layout_base_x(),
            layout_spacing: default_layout_spacing(),
            layout_y: 0.0,
            layout_z: 0.0,
        }
    }
}

fn default_stage_period_ms() -> u64 {
    2200
}

fn default_layout_base_x() -> f32 {
    -2.0
}

fn default_layout_spacing() -> f32 {
    1.0
}
