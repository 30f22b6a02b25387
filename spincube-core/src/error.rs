/// Error taxonomy for the cube pipeline
use thiserror::Error;

/// Startup validation failures. None of these can occur once a
/// [`FrameDriver`](crate::frame::FrameDriver) has been constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("shade ramp needs at least one entry")]
    EmptyShadeRamp,
    #[error("view distance must be positive, got {0}")]
    NonPositiveViewDistance(f32),
    #[error("cube half extent must be positive, got {0}")]
    NonPositiveHalfExtent(f32),
    #[error("angle step {0} degrees does not divide a quarter turn into whole table entries")]
    UnevenAngleStep(f32),
    #[error("invalid hex colour {0:?}, expected #RRGGBB")]
    InvalidColour(String),
    #[error("unknown render style {0:?}, expected line, hidden or filled")]
    UnknownStyle(String),
}

/// A rotated vertex came too close to the eye plane, collapsing the
/// perspective denominator. The frame driver skips such frames instead of
/// emitting NaN or mirrored coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("projection denominator collapsed: z {z} against view distance {view_distance}")]
pub struct DegenerateProjection {
    pub z: f32,
    pub view_distance: f32,
}
