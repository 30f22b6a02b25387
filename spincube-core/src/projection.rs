/// Pinhole perspective projection onto the drawing surface
use nalgebra::{Point2, Point3};

use crate::error::DegenerateProjection;

/// Smallest perspective denominator accepted as a usable projection.
/// Anything at or below this would blow the divide up or flip the image.
const MIN_DENOMINATOR: f32 = 1e-3;

/// Project a rotated 3D point to integer surface coordinates, centred on
/// the surface midpoint, with the eye at `z = -view_distance` and the
/// projection plane at `z = 0`:
///
/// ```text
/// x' = width/2  + round(x * d / (z + d))
/// y' = height/2 - round(y * d / (z + d))
/// ```
///
/// A point whose depth reaches the eye plane has no usable projection and
/// is reported as [`DegenerateProjection`]; the caller drops the frame.
pub fn project(
    point: &Point3<f32>,
    width: u32,
    height: u32,
    view_distance: f32,
) -> Result<Point2<i32>, DegenerateProjection> {
    let denominator = point.z + view_distance;
    if denominator < MIN_DENOMINATOR {
        return Err(DegenerateProjection {
            z: point.z,
            view_distance,
        });
    }
    let x = (width as f32 / 2.0) + (point.x * view_distance / denominator).round();
    let y = (height as f32 / 2.0) - (point.y * view_distance / denominator).round();
    Ok(Point2::new(x as i32, y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrotated_corner_lands_on_known_pixel() {
        // 100 * 512 / 412 = 124.27, rounds to 124.
        let projected = project(&Point3::new(100.0, -100.0, -100.0), 400, 400, 512.0).unwrap();
        assert_eq!(projected, Point2::new(324, 324));
    }

    #[test]
    fn origin_projects_to_surface_centre() {
        let projected = project(&Point3::new(0.0, 0.0, 0.0), 400, 300, 512.0).unwrap();
        assert_eq!(projected, Point2::new(200, 150));
    }

    #[test]
    fn nearer_points_project_larger() {
        let near = project(&Point3::new(100.0, 0.0, -100.0), 400, 400, 512.0).unwrap();
        let far = project(&Point3::new(100.0, 0.0, 100.0), 400, 400, 512.0).unwrap();
        assert!(near.x > far.x);
    }

    #[test]
    fn positive_y_goes_up_the_surface() {
        let projected = project(&Point3::new(0.0, 100.0, 0.0), 400, 400, 512.0).unwrap();
        assert!(projected.y < 200);
    }

    #[test]
    fn depth_at_the_eye_plane_is_degenerate() {
        let result = project(&Point3::new(0.0, 0.0, -512.0), 400, 400, 512.0);
        assert_eq!(
            result,
            Err(DegenerateProjection {
                z: -512.0,
                view_distance: 512.0
            })
        );
    }

    #[test]
    fn depth_behind_the_eye_plane_is_degenerate() {
        assert!(project(&Point3::new(0.0, 0.0, -600.0), 400, 400, 512.0).is_err());
    }
}
