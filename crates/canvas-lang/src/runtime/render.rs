/// The rendering collaborator consumed by the evaluator.
///
/// Implementations turn shape parameters, text, and color names into
/// displayable (usually multi-line, usually ANSI-colored) strings. Every
/// method is infallible from the evaluator's point of view: a glyph-font
/// failure inside `text` must be absorbed by falling back to plain colorized
/// text so the run continues.
///
/// Color arguments arrive as raw string literals with their quotes still
/// attached; implementations strip them before resolving the color.
pub trait Renderer {
    /// Rasterize a filled circle of the given radius.
    fn circle(&self, radius: f64, fill: &str) -> String;

    /// Rasterize a filled width x height block.
    fn rect(&self, width: f64, height: f64, fill: &str) -> String;

    /// Rasterize a line segment between two grid points.
    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> String;

    /// Render display text in a large glyph font, degrading to the plain
    /// colorized string when glyph rendering is unavailable.
    fn text(&self, text: &str, color: &str, size: u32) -> String;

    /// One iteration of the hue-rotating colorizer, `offset` degrees in.
    fn rainbow(&self, text: &str, offset: u64) -> String;

    /// Wash the full content with the scene background color. Applied once
    /// per displayed surface, never baked into drawn content.
    fn composite(&self, background: &str, content: &str) -> String;
}
