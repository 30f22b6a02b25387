/// Backface culling that doubles as the lighting model
use nalgebra::{Point3, Vector3};

/// Per-frame classification of one face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceClass {
    pub visible: bool,
    pub shade: usize,
}

impl FaceClass {
    /// Wireframe override: everything drawn, no shading.
    pub const fn forced_visible() -> Self {
        Self {
            visible: true,
            shade: 0,
        }
    }
}

/// Classify a face from one rotated point on it and its rotated outward
/// normal, with the eye fixed at `z = -view_distance`.
///
/// The face is visible when the signed scalar
/// `p.x*n.x + p.y*n.y + (p.z - viewpoint_z)*n.z` is non-positive, meaning
/// the normal points at least partly toward the viewer. The cube is convex,
/// so every non-facing surface is fully occluded by the solid itself and
/// can be dropped outright.
///
/// The same normal approximates directional lighting: faces swinging toward
/// the implicit light direction pick a brighter ramp index. The raw index
/// can leave the ramp for unaligned normals, so it is clamped.
pub fn classify(
    anchor: &Point3<f32>,
    normal: &Vector3<f32>,
    view_distance: f32,
    ramp_len: usize,
) -> FaceClass {
    let viewpoint_z = -view_distance;
    let facing =
        anchor.x * normal.x + anchor.y * normal.y + (anchor.z - viewpoint_z) * normal.z;

    let top = ramp_len as f32 - 1.0;
    let raw = (normal.x - normal.y - normal.z * top).round();
    let shade = raw.clamp(0.0, top) as usize;

    FaceClass {
        visible: facing <= 0.0,
        shade,
    }
}
