//! Large-glyph text rendering backed by a FIGlet font.

use figlet_rs::FIGfont;

use crate::color::fg;

/// Wraps the bundled FIGlet font, loaded once per renderer. Any failure,
/// whether loading the font or converting a particular string, degrades to
/// the plain colorized text so a scene never aborts over glyph art.
pub struct GlyphFont {
    font: Option<FIGfont>,
}

impl GlyphFont {
    pub fn load() -> Self {
        Self { font: FIGfont::standard().ok() }
    }

    pub fn render(&self, text: &str, color: &str) -> String {
        match self.font.as_ref().and_then(|font| font.convert(text)) {
            Some(figure) => fg(color, &figure.to_string()),
            None => fg(color, text),
        }
    }
}
