/// Spincube Core Library - the per-frame cube geometry pipeline
///
/// Everything needed to animate a rotating cube on any 2D drawing surface:
/// the precomputed angle table, shade ramp, rotation engine, perspective
/// projector, visibility shader and the frame driver that sequences them.
/// Frontends supply a `RenderSurface` and a frame cadence; the core owns no
/// drawing-surface state and performs no trigonometry outside table
/// construction.

pub mod angles;
pub mod config;
pub mod cube;
pub mod error;
pub mod frame;
pub mod projection;
pub mod rotation;
pub mod shade;
pub mod surface;
pub mod visibility;

// Re-export commonly used types
pub use angles::AngleTable;
pub use config::{CubeConfig, RenderStyle};
pub use cube::Cube;
pub use error::{ConfigError, DegenerateProjection};
pub use frame::{FrameDriver, FrameOutcome};
pub use rotation::{AngleSteps, RotationEngine};
pub use shade::{Rgb, ShadeRamp};
pub use surface::RenderSurface;
pub use visibility::FaceClass;
