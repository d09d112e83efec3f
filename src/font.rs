//! A 3x5 bitmap font, just enough for axis ticks and legend labels.
//! Lowercase letters are drawn with the uppercase glyphs.

pub const GLYPH_WIDTH: usize = 3;
pub const GLYPH_HEIGHT: usize = 5;
/// horizontal distance between the starts of two characters
pub const ADVANCE: usize = GLYPH_WIDTH + 1;

// one byte per row, lowest three bits, leftmost pixel is the high bit
type Glyph = [u8; GLYPH_HEIGHT];

pub fn glyph(c: char) -> Option<&'static Glyph> {
    let g: &'static Glyph = match c.to_ascii_uppercase() {
        '0' => &[0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => &[0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => &[0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => &[0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => &[0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => &[0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => &[0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => &[0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => &[0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => &[0b111, 0b101, 0b111, 0b001, 0b111],
        '.' => &[0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => &[0b000, 0b000, 0b111, 0b000, 0b000],
        '=' => &[0b000, 0b111, 0b000, 0b111, 0b000],
        '(' => &[0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => &[0b100, 0b010, 0b010, 0b010, 0b100],
        ' ' => &[0; GLYPH_HEIGHT],
        'A' => &[0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => &[0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => &[0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => &[0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => &[0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => &[0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => &[0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => &[0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => &[0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => &[0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => &[0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => &[0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => &[0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => &[0b110, 0b101, 0b101, 0b101, 0b101],
        'O' => &[0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => &[0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => &[0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => &[0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => &[0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => &[0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => &[0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => &[0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => &[0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => &[0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => &[0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => &[0b111, 0b001, 0b010, 0b100, 0b111],
        _ => return None,
    };
    Some(g)
}

/// pixel width of `text` at scale 1, without the trailing gap
pub fn text_width(text: &str) -> usize {
    let n = text.chars().count();
    if n == 0 {
        0
    } else {
        n * ADVANCE - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_fit_in_three_bits() {
        for c in "0123456789.-=() ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars() {
            let rows = glyph(c).unwrap();
            assert!(rows.iter().all(|&r| r < 1 << GLYPH_WIDTH), "{}", c);
        }
    }

    #[test]
    fn lowercase_uses_uppercase_glyphs() {
        assert_eq!(glyph('e'), glyph('E'));
        assert!(glyph('~').is_none());
    }

    #[test]
    fn width_of_text() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("1"), 3);
        assert_eq!(text_width("True"), 15);
    }
}
