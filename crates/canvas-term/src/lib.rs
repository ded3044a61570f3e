//! Terminal rendering for canvas-lang scenes: the color/glyph render
//! collaborator plus the player that drives timed display plans.

pub mod color;
pub mod player;
pub mod shapes;
pub mod text;

pub use player::Player;

use canvas_lang::Renderer;
use text::GlyphFont;

/// ANSI truecolor renderer. Holds the glyph font for `text` commands; all
/// other rendering is stateless.
pub struct TermRenderer {
    font: GlyphFont,
}

impl TermRenderer {
    pub fn new() -> Self {
        Self { font: GlyphFont::load() }
    }
}

impl Default for TermRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermRenderer {
    fn circle(&self, radius: f64, fill: &str) -> String {
        shapes::draw_circle(radius, fill)
    }

    fn rect(&self, width: f64, height: f64, fill: &str) -> String {
        shapes::draw_rect(width, height, fill)
    }

    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> String {
        shapes::draw_line(x1, y1, x2, y2, color)
    }

    fn text(&self, text: &str, color: &str, _size: u32) -> String {
        // size is accepted by the grammar but the terminal font is fixed
        self.font.render(text, color)
    }

    fn rainbow(&self, text: &str, offset: u64) -> String {
        color::rainbow_color(text, offset)
    }

    fn composite(&self, background: &str, content: &str) -> String {
        color::bg(background, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_washes_with_the_background_color() {
        let renderer = TermRenderer::new();
        let washed = renderer.composite("\"red\"", "x");
        assert_eq!(washed, "\x1b[48;2;255;0;0mx\x1b[49m");
    }

    #[test]
    fn circle_accepts_quoted_fill_colors() {
        let renderer = TermRenderer::new();
        let out = renderer.circle(1.0, "\"blue\"");
        assert!(out.contains("\x1b[38;2;0;0;255m"), "output: {out:?}");
    }
}
