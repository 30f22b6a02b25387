/// The cube model: eight vertices and six outward face normals
use nalgebra::{Point3, Vector3};

pub const VERTEX_COUNT: usize = 8;
pub const FACE_COUNT: usize = 6;

// Vertex layout, front face (z = -1) first:
//     6-------7
//    /|      /|
//   / |     / |
//  2--|----3  |
//  |  4----|--5
//  | /     | /
//  |/      |/
//  0-------1
const CANONICAL_CORNERS: [[f32; 3]; VERTEX_COUNT] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

// Unit normals in face order: front, right, back, left, bottom, top.
const CANONICAL_NORMALS: [[f32; 3]; FACE_COUNT] = [
    [0.0, 0.0, -1.0],
    [1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0],
    [-1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
];

/// Static shape of one face: its four corner indices, listed from the
/// bottom-left corner proceeding counter-clockwise as seen from outside,
/// and the corner whose rotated position anchors the visibility test.
///
/// The winding order is load-bearing for the outward-normal convention;
/// scrambling it silently breaks the lighting, not the draw.
#[derive(Debug, Clone, Copy)]
pub struct FaceTopology {
    pub corners: [usize; 4],
    pub anchor: usize,
}

/// Face table in draw order. Face `i` pairs with normal `i`.
pub const FACES: [FaceTopology; FACE_COUNT] = [
    FaceTopology { corners: [0, 1, 3, 2], anchor: 0 }, // front
    FaceTopology { corners: [1, 5, 7, 3], anchor: 1 }, // right
    FaceTopology { corners: [5, 4, 6, 7], anchor: 5 }, // back
    FaceTopology { corners: [4, 0, 2, 6], anchor: 4 }, // left
    FaceTopology { corners: [4, 5, 1, 0], anchor: 4 }, // bottom
    FaceTopology { corners: [2, 3, 7, 6], anchor: 2 }, // top
];

/// Vertices rotated directly each frame; the other four come from
/// [`MIRROR_VERTICES`].
pub const ROTATED_VERTICES: [usize; 4] = [0, 1, 2, 3];

/// Opposite-corner pairs: in the canonical frame the destination is the
/// exact negation of the source, and rotation commutes with negation, so
/// negating a rotated source yields the rotated destination.
pub const MIRROR_VERTICES: [(usize, usize); 4] = [(3, 4), (2, 5), (1, 6), (0, 7)];

/// Normals rotated directly each frame.
pub const ROTATED_NORMALS: [usize; 3] = [0, 1, 4];

/// Opposite-face normal pairs, negations of each other like the vertices.
pub const MIRROR_NORMALS: [(usize, usize); 3] = [(0, 2), (1, 3), (4, 5)];

/// Mutable per-frame cube state.
///
/// The arrays are overwritten in place every frame: reset to canonical
/// values, then rotated. Reusing the same storage keeps the pipeline
/// allocation-free and stops rounding error accumulating across frames.
pub struct Cube {
    pub vertices: [Point3<f32>; VERTEX_COUNT],
    pub normals: [Vector3<f32>; FACE_COUNT],
    half_extent: f32,
}

impl Cube {
    pub fn new(half_extent: f32) -> Self {
        let mut cube = Self {
            vertices: [Point3::origin(); VERTEX_COUNT],
            normals: [Vector3::zeros(); FACE_COUNT],
            half_extent,
        };
        cube.reset();
        cube
    }

    /// Rewrite every vertex and normal to its canonical unrotated value.
    pub fn reset(&mut self) {
        for (vertex, corner) in self.vertices.iter_mut().zip(&CANONICAL_CORNERS) {
            *vertex = Point3::new(
                corner[0] * self.half_extent,
                corner[1] * self.half_extent,
                corner[2] * self.half_extent,
            );
        }
        for (normal, canonical) in self.normals.iter_mut().zip(&CANONICAL_NORMALS) {
            *normal = Vector3::new(canonical[0], canonical[1], canonical[2]);
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Farthest any vertex sits from the origin under rotation: the corner
    /// diagonal, `half_extent * sqrt(3)`.
    pub fn reach(&self) -> f32 {
        self.half_extent * 3.0_f32.sqrt()
    }
}
