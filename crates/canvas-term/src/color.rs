//! Color resolution and ANSI truecolor styling.
//!
//! Color values arrive as raw source literals (quotes attached) or bare
//! names/hex strings; everything funnels through [`process_color`] into a
//! `#rrggbb` form before styling.

/// The fixed named-color palette.
const COLOR_MAP: &[(&str, &str)] = &[
    ("black",   "#000000"),
    ("red",     "#ff0000"),
    ("green",   "#00ff00"),
    ("blue",    "#0000ff"),
    ("yellow",  "#ffff00"),
    ("magenta", "#ff00ff"),
    ("cyan",    "#00ffff"),
    ("white",   "#ffffff"),
    ("gray",    "#808080"),
    ("orange",  "#ffa500"),
    ("purple",  "#800080"),
    ("pink",    "#ffc0cb"),
    ("brown",   "#a52a2a"),
    ("lime",    "#00ff00"),
    ("navy",    "#000080"),
    ("teal",    "#008080"),
];

/// Resolve a color value to a `#`-prefixed hex string. Quotes are stripped,
/// named colors are looked up case-insensitively, and anything else is
/// treated as a literal hex color, gaining a `#` prefix when missing.
pub fn process_color(color: &str) -> String {
    let color = color.trim_matches('"');

    let lower = color.to_lowercase();
    for (name, hex) in COLOR_MAP {
        if *name == lower {
            return (*hex).to_string();
        }
    }

    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

/// Parse a processed color into rgb components. `None` on malformed hex, in
/// which case styling degrades to leaving content unstyled.
fn rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = process_color(color);
    let hex = hex.strip_prefix('#')?;
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Foreground-color the content, line by line so partial redraws stay clean.
pub fn fg(color: &str, content: &str) -> String {
    style(content, rgb(color), 38, 39)
}

/// Background-wash the content, line by line.
pub fn bg(color: &str, content: &str) -> String {
    style(content, rgb(color), 48, 49)
}

fn style(content: &str, rgb: Option<(u8, u8, u8)>, open: u8, close: u8) -> String {
    let Some((r, g, b)) = rgb else {
        return content.to_string();
    };
    let prefix = format!("\x1b[{open};2;{r};{g};{b}m");
    let suffix = format!("\x1b[{close}m");
    content
        .split('\n')
        .map(|line| format!("{prefix}{line}{suffix}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ─── Rainbow ─────────────────────────────────────────────────────────────────

/// Hue-rotate the printable characters of `text`, starting `offset` degrees
/// into the wheel. Whitespace and other non-printable characters are emitted
/// unmodified and do not advance the hue.
pub fn rainbow_color(text: &str, offset: u64) -> String {
    let printable = text.chars().filter(|c| c.is_ascii_graphic()).count();
    if printable == 0 {
        return text.to_string();
    }

    let hue_step = 360.0 / printable as f64;
    let mut hue = (offset % 360) as f64;
    let mut out = String::new();

    for ch in text.chars() {
        if ch.is_ascii_graphic() {
            let (r, g, b) = hsl_to_rgb(hue, 100.0, 50.0);
            out.push_str(&format!("\x1b[38;2;{r};{g};{b}m{ch}\x1b[39m"));
            hue = (hue + hue_step) % 360.0;
        } else {
            out.push(ch);
        }
    }

    out
}

/// `h` in degrees, `s`/`l` in percent.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let h = (h.rem_euclid(360.0)) / 360.0;
    let s = s / 100.0;
    let l = l / 100.0;

    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f64| {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round() as u8
    };

    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_color_lookup() {
        assert_eq!(process_color("red"), "#ff0000");
        assert_eq!(process_color("teal"), "#008080");
        assert_eq!(process_color("RED"), "#ff0000");
    }

    #[test]
    fn quotes_are_stripped_before_lookup() {
        assert_eq!(process_color("\"red\""), "#ff0000");
    }

    #[test]
    fn bare_hex_gains_a_prefix() {
        assert_eq!(process_color("ABCDEF"), "#ABCDEF");
    }

    #[test]
    fn prefixed_hex_passes_through() {
        assert_eq!(process_color("#123456"), "#123456");
    }

    #[test]
    fn fg_wraps_in_truecolor_escapes() {
        assert_eq!(fg("red", "x"), "\x1b[38;2;255;0;0mx\x1b[39m");
    }

    #[test]
    fn bg_styles_every_line() {
        let washed = bg("black", "a\nb");
        assert_eq!(washed, "\x1b[48;2;0;0;0ma\x1b[49m\n\x1b[48;2;0;0;0mb\x1b[49m");
    }

    #[test]
    fn malformed_hex_leaves_content_unstyled() {
        assert_eq!(fg("notacolor", "x"), "x");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), (0, 0, 255));
    }

    #[test]
    fn hsl_grayscale_when_desaturated() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 50.0), (128, 128, 128));
    }

    #[test]
    fn rainbow_skips_whitespace_without_advancing_hue() {
        // "a b": 2 printable chars, hue step 180; the space stays bare
        let out = rainbow_color("a b", 0);
        let red = format!("\x1b[38;2;{};{};{}ma\x1b[39m", 255, 0, 0);
        let (r, g, b) = hsl_to_rgb(180.0, 100.0, 50.0);
        let cyan = format!("\x1b[38;2;{r};{g};{b}mb\x1b[39m");
        assert_eq!(out, format!("{red} {cyan}"));
    }

    #[test]
    fn rainbow_of_blank_text_is_unchanged() {
        assert_eq!(rainbow_color("", 10), "");
        assert_eq!(rainbow_color("   ", 10), "   ");
    }

    #[test]
    fn rainbow_offset_shifts_the_start_hue() {
        let (r, g, b) = hsl_to_rgb(90.0, 100.0, 50.0);
        assert_eq!(rainbow_color("a", 90), format!("\x1b[38;2;{r};{g};{b}ma\x1b[39m"));
        // offsets wrap at a full turn
        assert_eq!(rainbow_color("a", 450), rainbow_color("a", 90));
    }
}
