//! Shape rasterizers. Each returns a multi-line string of colorized glyphs;
//! placement on screen is up to the accumulated buffer, not the shape.

use crate::color::fg;

/// Filled circle: a `(2r+1)`-wide grid where cells strictly inside the
/// Euclidean radius are drawn. Fractional radii step the grid in whole cells
/// from `-radius`, mirroring how the coordinates are compared.
pub fn draw_circle(radius: f64, fill: &str) -> String {
    let dot = fg(fill, "●");
    let mut out = String::new();

    let mut y = -radius;
    while y <= radius {
        let mut x = -radius;
        while x <= radius {
            let distance = (x * x + y * y).sqrt();
            if distance < radius {
                out.push_str(&dot);
            } else {
                out.push(' ');
            }
            x += 1.0;
        }
        out.push('\n');
        y += 1.0;
    }

    out
}

/// Filled block of `width` x `height` cells.
pub fn draw_rect(width: f64, height: f64, fill: &str) -> String {
    let block = fg(fill, "█");
    let mut out = String::new();

    let mut y = 0.0;
    while y < height {
        let mut x = 0.0;
        while x < width {
            out.push_str(&block);
            x += 1.0;
        }
        out.push('\n');
        y += 1.0;
    }

    out
}

/// Line segment via integer Bresenham stepping, plotted into a grid padded
/// with a 2-cell margin on every side.
pub fn draw_line(x1: f64, y1: f64, x2: f64, y2: f64, color: &str) -> String {
    let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    let min_x = x1.min(x2);
    let min_y = y1.min(y2);
    let width = (x1.max(x2) - min_x + 5) as usize;
    let height = (y1.max(y2) - min_y + 5) as usize;

    let mut grid = vec![vec![false; width]; height];

    let (mut x, mut y) = (x1, y1);
    loop {
        grid[(y - min_y + 2) as usize][(x - min_x + 2) as usize] = true;
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    let dot = fg(color, "●");
    let mut out = String::new();
    for row in &grid {
        for &cell in row {
            if cell {
                out.push_str(&dot);
            } else {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop ANSI escape sequences so geometry can be asserted on directly.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c2 in chars.by_ref() {
                    if c2 == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn radius_one_circle_fills_only_the_center() {
        let grid = strip_ansi(&draw_circle(1.0, "red"));
        assert_eq!(grid, "   \n ● \n   \n");
    }

    #[test]
    fn radius_two_circle_is_a_diamondish_disc() {
        let grid = strip_ansi(&draw_circle(2.0, "red"));
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "     ");
        assert_eq!(rows[1], " ●●● ");
        assert_eq!(rows[2], " ●●● ");
        assert_eq!(rows[3], " ●●● ");
        assert_eq!(rows[4], "     ");
    }

    #[test]
    fn rect_is_a_solid_block() {
        let grid = strip_ansi(&draw_rect(3.0, 2.0, "blue"));
        assert_eq!(grid, "███\n███\n");
    }

    #[test]
    fn zero_height_rect_renders_nothing() {
        assert_eq!(draw_rect(3.0, 0.0, "blue"), "");
    }

    #[test]
    fn diagonal_line_with_margin() {
        let grid = strip_ansi(&draw_line(0.0, 0.0, 2.0, 2.0, "gray"));
        let rows: Vec<&str> = grid.lines().collect();
        // 2x2 extent plus the 5-cell padding
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[2], "  ●    ");
        assert_eq!(rows[3], "   ●   ");
        assert_eq!(rows[4], "    ●  ");
    }

    #[test]
    fn reversed_endpoints_draw_the_same_cells() {
        let a = strip_ansi(&draw_line(0.0, 0.0, 3.0, 0.0, "gray"));
        let b = strip_ansi(&draw_line(3.0, 0.0, 0.0, 0.0, "gray"));
        assert_eq!(a, b);
    }

    #[test]
    fn single_point_line() {
        let grid = strip_ansi(&draw_line(1.0, 1.0, 1.0, 1.0, "gray"));
        let rows: Vec<&str> = grid.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2], "  ●  ");
    }
}
