/// Frame driver: one call per display refresh runs the whole pipeline
use log::{debug, warn};
use nalgebra::Point2;

use crate::angles::AngleTable;
use crate::config::{CubeConfig, RenderStyle};
use crate::cube::{
    Cube, FACES, FACE_COUNT, MIRROR_NORMALS, MIRROR_VERTICES, ROTATED_NORMALS, ROTATED_VERTICES,
    VERTEX_COUNT,
};
use crate::error::ConfigError;
use crate::projection;
use crate::rotation::{self, RotationEngine};
use crate::shade::ShadeRamp;
use crate::surface::RenderSurface;
use crate::visibility::{self, FaceClass};

/// What one `advance_and_render` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Rendered { visible_faces: usize },
    /// A vertex projected degenerately; the surface was cleared and nothing
    /// drawn. The angle cursors advanced regardless.
    Skipped,
}

/// Owns every piece of pipeline state and runs the per-frame sequence:
/// reset, advance cursors, rotate and mirror, project, classify, draw.
///
/// All of it is reset or fully overwritten before use each frame; the angle
/// cursors inside the rotation engine are the only values that persist and
/// accumulate across calls.
pub struct FrameDriver {
    config: CubeConfig,
    table: AngleTable,
    ramp: ShadeRamp,
    cube: Cube,
    engine: RotationEngine,
    projected: [Point2<i32>; VERTEX_COUNT],
    classes: [FaceClass; FACE_COUNT],
}

impl FrameDriver {
    pub fn new(config: CubeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let table = AngleTable::build(config.angle_step_degrees)?;
        let ramp = ShadeRamp::build(config.ramp_start, config.ramp_end, config.ramp_len)?;
        let cube = Cube::new(config.half_extent);
        let engine = RotationEngine::new(&table);
        debug!(
            "pipeline ready: {} angle entries, {} shades, half extent {}",
            table.len(),
            ramp.len(),
            config.half_extent
        );
        Ok(Self {
            config,
            table,
            ramp,
            cube,
            engine,
            projected: [Point2::origin(); VERTEX_COUNT],
            classes: [FaceClass::forced_visible(); FACE_COUNT],
        })
    }

    pub fn style(&self) -> RenderStyle {
        self.config.style
    }

    /// Swap the render style between frames. The pipeline itself never
    /// changes configuration.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.config.style = style;
    }

    /// Face classifications from the most recent frame, in draw order.
    pub fn face_classes(&self) -> &[FaceClass; FACE_COUNT] {
        &self.classes
    }

    /// The single per-frame entry point. Always completes: a degenerate
    /// frame is skipped, never a crash.
    pub fn advance_and_render<S: RenderSurface>(&mut self, surface: &mut S) -> FrameOutcome {
        surface.clear();
        self.cube.reset();
        self.engine.advance(&self.table, self.config.steps);
        self.rotate_and_mirror();
        if !self.project_all(surface.width(), surface.height()) {
            warn!(
                "degenerate projection at cursors {:?}, frame skipped",
                self.engine.cursors()
            );
            return FrameOutcome::Skipped;
        }
        self.classify_all();
        let visible_faces = self.draw(surface);
        FrameOutcome::Rendered { visible_faces }
    }

    /// Rotate the front-face vertices and three normals, then mirror the
    /// rest through the origin. The mirrored half costs three negations per
    /// entry instead of nine multiplies and six adds.
    fn rotate_and_mirror(&mut self) {
        for &index in &ROTATED_VERTICES {
            self.engine.rotate_point(&mut self.cube.vertices[index]);
        }
        for &(src, dst) in &MIRROR_VERTICES {
            self.cube.vertices[dst] = rotation::mirror_point(&self.cube.vertices[src]);
        }
        for &index in &ROTATED_NORMALS {
            self.engine.rotate_vector(&mut self.cube.normals[index]);
        }
        for &(src, dst) in &MIRROR_NORMALS {
            self.cube.normals[dst] = rotation::mirror_vector(&self.cube.normals[src]);
        }
    }

    fn project_all(&mut self, width: u32, height: u32) -> bool {
        for (slot, vertex) in self.projected.iter_mut().zip(&self.cube.vertices) {
            match projection::project(vertex, width, height, self.config.view_distance) {
                Ok(point) => *slot = point,
                Err(_) => return false,
            }
        }
        true
    }

    fn classify_all(&mut self) {
        for (index, class) in self.classes.iter_mut().enumerate() {
            *class = if self.config.style == RenderStyle::Line {
                FaceClass::forced_visible()
            } else {
                visibility::classify(
                    &self.cube.vertices[FACES[index].anchor],
                    &self.cube.normals[index],
                    self.config.view_distance,
                    self.ramp.len(),
                )
            };
        }
    }

    /// Emit one closed path per visible face, in fixed face order. No depth
    /// sorting: convexity means the visibility test already removed every
    /// occluded face.
    fn draw<S: RenderSurface>(&self, surface: &mut S) -> usize {
        let mut visible_faces = 0;
        for (face, class) in FACES.iter().zip(&self.classes) {
            if !class.visible {
                continue;
            }
            visible_faces += 1;

            let first = self.projected[face.corners[0]];
            surface.begin_path();
            surface.move_to(first.x, first.y);
            for &corner in &face.corners[1..] {
                let point = self.projected[corner];
                surface.line_to(point.x, point.y);
            }
            surface.close_path();

            match self.config.style {
                RenderStyle::Line | RenderStyle::Hidden => surface.stroke(self.ramp.last(), 1.0),
                RenderStyle::Filled => surface.fill(self.ramp.get(class.shade)),
            }
        }
        visible_faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::AngleSteps;
    use crate::shade::Rgb;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Begin,
        MoveTo(i32, i32),
        LineTo(i32, i32),
        Close,
        Stroke(Rgb),
        Fill(Rgb),
    }

    struct RecordingSurface {
        width: u32,
        height: u32,
        ops: Vec<Op>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
            }
        }
    }

    impl RenderSurface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }
        fn height(&self) -> u32 {
            self.height
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::Begin);
        }
        fn move_to(&mut self, x: i32, y: i32) {
            self.ops.push(Op::MoveTo(x, y));
        }
        fn line_to(&mut self, x: i32, y: i32) {
            self.ops.push(Op::LineTo(x, y));
        }
        fn close_path(&mut self) {
            self.ops.push(Op::Close);
        }
        fn stroke(&mut self, colour: Rgb, _line_width: f32) {
            self.ops.push(Op::Stroke(colour));
        }
        fn fill(&mut self, colour: Rgb) {
            self.ops.push(Op::Fill(colour));
        }
    }

    fn driver(config: CubeConfig) -> FrameDriver {
        FrameDriver::new(config).unwrap()
    }

    #[test]
    fn filled_frame_draws_between_one_and_three_faces() {
        let mut driver = driver(CubeConfig::default());
        let mut surface = RecordingSurface::new(400, 400);
        match driver.advance_and_render(&mut surface) {
            FrameOutcome::Rendered { visible_faces } => {
                assert!((1..=3).contains(&visible_faces));
                let fills = surface.ops.iter().filter(|op| matches!(op, Op::Fill(_))).count();
                assert_eq!(fills, visible_faces);
            }
            FrameOutcome::Skipped => panic!("default config should never skip"),
        }
        assert_eq!(surface.ops[0], Op::Clear);
    }

    #[test]
    fn opposite_faces_are_never_both_visible() {
        let mut driver = driver(CubeConfig::default());
        let mut surface = RecordingSurface::new(400, 400);
        for _ in 0..500 {
            driver.advance_and_render(&mut surface);
            let classes = driver.face_classes();
            for &(a, b) in &[(0, 2), (1, 3), (4, 5)] {
                assert!(!(classes[a].visible && classes[b].visible));
            }
        }
    }

    #[test]
    fn generic_rotations_usually_show_three_faces() {
        let mut driver = driver(CubeConfig::default());
        let mut surface = RecordingSurface::new(400, 400);
        let mut saw_three = false;
        for _ in 0..200 {
            if let FrameOutcome::Rendered { visible_faces } =
                driver.advance_and_render(&mut surface)
            {
                assert!((1..=3).contains(&visible_faces));
                if visible_faces == 3 {
                    saw_three = true;
                }
            }
        }
        assert!(saw_three);
    }

    #[test]
    fn line_style_draws_all_six_faces() {
        let config = CubeConfig {
            style: RenderStyle::Line,
            ..CubeConfig::default()
        };
        let mut driver = driver(config);
        let mut surface = RecordingSurface::new(400, 400);
        let outcome = driver.advance_and_render(&mut surface);
        assert_eq!(outcome, FrameOutcome::Rendered { visible_faces: 6 });
        let strokes = surface.ops.iter().filter(|op| matches!(op, Op::Stroke(_))).count();
        assert_eq!(strokes, 6);
        assert!(!surface.ops.iter().any(|op| matches!(op, Op::Fill(_))));
    }

    #[test]
    fn hidden_style_strokes_only_front_faces() {
        let config = CubeConfig {
            style: RenderStyle::Hidden,
            ..CubeConfig::default()
        };
        let mut driver = driver(config);
        let mut surface = RecordingSurface::new(400, 400);
        let outcome = driver.advance_and_render(&mut surface);
        let FrameOutcome::Rendered { visible_faces } = outcome else {
            panic!("unexpected skip");
        };
        assert!(visible_faces < 6);
        let strokes = surface.ops.iter().filter(|op| matches!(op, Op::Stroke(_))).count();
        assert_eq!(strokes, visible_faces);
    }

    #[test]
    fn each_face_path_is_a_closed_quad() {
        let mut driver = driver(CubeConfig::default());
        let mut surface = RecordingSurface::new(400, 400);
        driver.advance_and_render(&mut surface);
        let mut index = 1; // skip the clear
        while index < surface.ops.len() {
            assert_eq!(surface.ops[index], Op::Begin);
            assert!(matches!(surface.ops[index + 1], Op::MoveTo(_, _)));
            for offset in 2..5 {
                assert!(matches!(surface.ops[index + offset], Op::LineTo(_, _)));
            }
            assert_eq!(surface.ops[index + 5], Op::Close);
            assert!(matches!(
                surface.ops[index + 6],
                Op::Stroke(_) | Op::Fill(_)
            ));
            index += 7;
        }
    }

    #[test]
    fn mirroring_matches_direct_rotation_of_all_vertices() {
        let mut driver = driver(CubeConfig::default());
        let mut surface = RecordingSurface::new(400, 400);
        for _ in 0..10 {
            driver.advance_and_render(&mut surface);
        }

        // Recompute every vertex and normal by direct rotation and compare
        // with the mirrored half the driver produced.
        let mut reference = Cube::new(driver.config.half_extent);
        for vertex in reference.vertices.iter_mut() {
            driver.engine.rotate_point(vertex);
        }
        for normal in reference.normals.iter_mut() {
            driver.engine.rotate_vector(normal);
        }
        for (direct, mirrored) in reference.vertices.iter().zip(&driver.cube.vertices) {
            assert!((direct - mirrored).norm() < 1e-3);
        }
        for (direct, mirrored) in reference.normals.iter().zip(&driver.cube.normals) {
            assert!((direct - mirrored).norm() < 1e-5);
        }
    }

    #[test]
    fn too_close_viewpoint_skips_the_frame() {
        // Half extent 100 rotated 45 degrees about X pushes a corner to
        // z = -141, past a view distance of 130.
        let config = CubeConfig {
            steps: AngleSteps::new(180, 0, 0),
            view_distance: 130.0,
            ..CubeConfig::default()
        };
        let mut driver = driver(config);
        let mut surface = RecordingSurface::new(400, 400);
        let outcome = driver.advance_and_render(&mut surface);
        assert_eq!(outcome, FrameOutcome::Skipped);
        assert_eq!(surface.ops, vec![Op::Clear]);
    }

    #[test]
    fn skipped_frames_still_advance_the_cursors() {
        let config = CubeConfig {
            steps: AngleSteps::new(180, 0, 0),
            view_distance: 130.0,
            ..CubeConfig::default()
        };
        let mut driver = driver(config);
        let mut surface = RecordingSurface::new(400, 400);
        driver.advance_and_render(&mut surface);
        driver.advance_and_render(&mut surface);
        assert_eq!(driver.engine.cursors(), [360, 0, 0]);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let config = CubeConfig {
            ramp_len: 0,
            ..CubeConfig::default()
        };
        assert!(FrameDriver::new(config).is_err());
    }
}
