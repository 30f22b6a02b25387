/// Startup configuration for the cube pipeline
use std::str::FromStr;

use crate::angles::DEFAULT_STEP_DEGREES;
use crate::error::ConfigError;
use crate::rotation::AngleSteps;
use crate::shade::Rgb;

/// How visible faces are rendered.
///
/// `Line` forces every face visible and strokes all twelve edges. `Hidden`
/// runs the visibility test and strokes only front faces. `Filled` runs the
/// same test and fills front faces with their light-sourced shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    Line,
    Hidden,
    Filled,
}

impl FromStr for RenderStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Self::Line),
            "hidden" => Ok(Self::Hidden),
            "filled" => Ok(Self::Filled),
            other => Err(ConfigError::UnknownStyle(other.to_string())),
        }
    }
}

/// Constants fixed at startup. The pipeline never mutates these; frontends
/// may swap the render style between frames.
#[derive(Debug, Clone)]
pub struct CubeConfig {
    pub style: RenderStyle,
    /// Per-axis cursor advance per frame, in table-index units.
    pub steps: AngleSteps,
    pub view_distance: f32,
    pub half_extent: f32,
    pub ramp_start: Rgb,
    pub ramp_end: Rgb,
    pub ramp_len: usize,
    pub angle_step_degrees: f32,
}

impl Default for CubeConfig {
    /// The stock tuning: quarter-degree table, peach-on-black ramp, cube of
    /// half extent 100 viewed from 512 away.
    fn default() -> Self {
        Self {
            style: RenderStyle::Filled,
            steps: AngleSteps::new(1, 5, 2),
            view_distance: 512.0,
            half_extent: 100.0,
            ramp_start: Rgb::new(0x00, 0x00, 0x00),
            ramp_end: Rgb::new(0xF8, 0x98, 0x80),
            ramp_len: 64,
            angle_step_degrees: DEFAULT_STEP_DEGREES,
        }
    }
}

impl CubeConfig {
    /// Fail fast on configurations the pipeline cannot run with. A view
    /// distance inside the cube's rotated reach is allowed through (frames
    /// that actually degenerate are skipped at render time) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ramp_len == 0 {
            return Err(ConfigError::EmptyShadeRamp);
        }
        if !self.view_distance.is_finite() || self.view_distance <= 0.0 {
            return Err(ConfigError::NonPositiveViewDistance(self.view_distance));
        }
        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return Err(ConfigError::NonPositiveHalfExtent(self.half_extent));
        }
        let reach = self.half_extent * 3.0_f32.sqrt();
        if self.view_distance <= reach {
            log::warn!(
                "view distance {} is inside the cube's rotated reach {reach}; \
                 close frames will be skipped",
                self.view_distance
            );
        }
        Ok(())
    }
}
