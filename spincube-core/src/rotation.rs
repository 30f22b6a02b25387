/// Table-driven rotation: angle cursors and the combined XYZ matrix
use nalgebra::{Matrix3, Point3, Vector3};

use crate::angles::AngleTable;

/// Per-axis cursor advance, in table-index units rather than degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleSteps {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl AngleSteps {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// One axis's pair of cursors. The cosine cursor stays exactly a quarter
/// turn ahead of the sine cursor and wraps in lock-step with it.
#[derive(Debug, Clone, Copy)]
struct AxisCursor {
    sin: usize,
    cos: usize,
}

impl AxisCursor {
    fn new(quarter_turn: usize) -> Self {
        Self {
            sin: 0,
            cos: quarter_turn,
        }
    }

    fn advance(&mut self, step: usize, table_len: usize) {
        self.sin = (self.sin + step) % table_len;
        self.cos = (self.cos + step) % table_len;
    }
}

/// The only cross-frame state in the pipeline: three angle cursors, plus
/// the rotation matrix rebuilt from them after every advance.
///
/// The matrix rows follow the standard Euler XYZ composition (roll about X,
/// then pitch about Y, then yaw about Z) and the matrix is applied with the
/// row-vector convention, `p * M`. Rows are orthonormal for any cursor
/// triple, so rotation preserves vector length.
pub struct RotationEngine {
    x: AxisCursor,
    y: AxisCursor,
    z: AxisCursor,
    matrix: Matrix3<f32>,
}

impl RotationEngine {
    pub fn new(table: &AngleTable) -> Self {
        let mut engine = Self {
            x: AxisCursor::new(table.quarter_turn()),
            y: AxisCursor::new(table.quarter_turn()),
            z: AxisCursor::new(table.quarter_turn()),
            matrix: Matrix3::identity(),
        };
        engine.rebuild(table);
        engine
    }

    /// Advance the cursors and rebuild the matrix. Steps larger than the
    /// table wrap modulo its length, so an advance by `n` is identical to an
    /// advance by `n % len`. No trigonometric calls happen here, only
    /// lookups.
    pub fn advance(&mut self, table: &AngleTable, steps: AngleSteps) {
        let len = table.len();
        self.x.advance(steps.x, len);
        self.y.advance(steps.y, len);
        self.z.advance(steps.z, len);
        self.rebuild(table);
    }

    fn rebuild(&mut self, table: &AngleTable) {
        let sin_x = table.sin_at(self.x.sin);
        let cos_x = table.sin_at(self.x.cos);
        let sin_y = table.sin_at(self.y.sin);
        let cos_y = table.sin_at(self.y.cos);
        let sin_z = table.sin_at(self.z.sin);
        let cos_z = table.sin_at(self.z.cos);

        self.matrix = Matrix3::new(
            cos_y * cos_z,
            cos_y * sin_z,
            -sin_y,
            sin_x * sin_y * cos_z - cos_x * sin_z,
            sin_x * sin_y * sin_z + cos_x * cos_z,
            sin_x * cos_y,
            cos_x * sin_y * cos_z + sin_x * sin_z,
            cos_x * sin_y * sin_z - sin_x * cos_z,
            cos_x * cos_y,
        );
    }

    pub fn matrix(&self) -> &Matrix3<f32> {
        &self.matrix
    }

    /// Sine-cursor positions for the three axes, for diagnostics.
    pub fn cursors(&self) -> [usize; 3] {
        [self.x.sin, self.y.sin, self.z.sin]
    }

    /// Rotate a point in place: `p * M`, each output coordinate the dot
    /// product of the input with a matrix column.
    pub fn rotate_point(&self, point: &mut Point3<f32>) {
        point.coords = self.matrix.tr_mul(&point.coords);
    }

    /// Rotate a direction vector in place, same convention as points.
    pub fn rotate_vector(&self, vector: &mut Vector3<f32>) {
        *vector = self.matrix.tr_mul(vector);
    }
}

/// Componentwise negation. Valid as a stand-in for rotation only on
/// vertex/normal pairs that are exact negations in the canonical frame.
pub fn mirror_point(source: &Point3<f32>) -> Point3<f32> {
    Point3::from(-source.coords)
}

/// See [`mirror_point`].
pub fn mirror_vector(source: &Vector3<f32>) -> Vector3<f32> {
    -source
}
