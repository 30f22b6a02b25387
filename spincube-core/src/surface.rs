/// The drawing-target seam between the pipeline and its frontends
use crate::shade::Rgb;

/// A 2D drawing surface with a canvas-style path protocol.
///
/// The frame driver is the only caller: it clears once per frame, then for
/// each visible face builds one closed path and either strokes or fills it.
/// Implementations own all surface state; the pipeline holds none.
pub trait RenderSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Erase the whole surface.
    fn clear(&mut self);

    /// Start a fresh path, discarding any unfinished one.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    /// Join the current point back to the path start.
    fn close_path(&mut self);

    /// Stroke the current path's outline.
    fn stroke(&mut self, colour: Rgb, line_width: f32);
    /// Fill the current path's interior.
    fn fill(&mut self, colour: Rgb);
}
