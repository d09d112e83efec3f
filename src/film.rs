use crate::font;

#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill: T) -> Film<T> {
        Film {
            buffer: vec![fill; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    pub fn fill(&mut self, value: T) {
        for pixel in self.buffer.iter_mut() {
            *pixel = value;
        }
    }

    // out of bounds writes are dropped, so shapes can hang off the edges
    pub fn attempt_write(&mut self, x: isize, y: isize, value: T) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.buffer[y as usize * self.width + x as usize] = value;
    }
}

pub fn rgb_to_u32(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) + ((g as u32) << 8) + (b as u32)
}

pub fn u32_to_rgb(c: u32) -> (u8, u8, u8) {
    ((c >> 16) as u8, (c >> 8) as u8, c as u8)
}

impl Film<u32> {
    pub fn draw_line(&mut self, from: (isize, isize), to: (isize, isize), c: u32) {
        for (x, y) in line_drawing::Bresenham::new(from, to) {
            self.attempt_write(x, y, c);
        }
    }

    pub fn blit_circle(&mut self, radius: f32, x: isize, y: isize, c: u32) {
        let approx_pixel_circumference = radius * std::f32::consts::TAU;
        for phi in 0..(approx_pixel_circumference.ceil() as usize) {
            let angle = phi as f32 * std::f32::consts::TAU / approx_pixel_circumference;
            let (sin, cos) = angle.sin_cos();
            self.attempt_write(
                x + (radius * cos).round() as isize,
                y + (radius * sin).round() as isize,
                c,
            );
        }
    }

    pub fn blit_square(&mut self, half_size: isize, x: isize, y: isize, c: u32) {
        for dy in -half_size..=half_size {
            for dx in -half_size..=half_size {
                self.attempt_write(x + dx, y + dy, c);
            }
        }
    }

    /// draws `text` with its top left corner at `(x, y)`, each font pixel blown up to `scale`.
    /// characters without a glyph are left blank.
    pub fn draw_text(&mut self, text: &str, x: isize, y: isize, scale: usize, c: u32) {
        let scale = scale.max(1) as isize;
        let mut cursor = x;
        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        for sy in 0..scale {
                            for sx in 0..scale {
                                self.attempt_write(
                                    cursor + col as isize * scale + sx,
                                    y + row as isize * scale + sy,
                                    c,
                                );
                            }
                        }
                    }
                }
            }
            cursor += font::ADVANCE as isize * scale;
        }
    }

    pub fn to_rgb_image(&self) -> image::RgbImage {
        let mut img: image::RgbImage =
            image::ImageBuffer::new(self.width as u32, self.height as u32);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let (r, g, b) = u32_to_rgb(self.at(x as usize, y as usize));
            *pixel = image::Rgb([r, g, b]);
        }
        img
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_packing() {
        let c = rgb_to_u32(12, 200, 255);
        assert_eq!(c, 0x0CC8FF);
        assert_eq!(u32_to_rgb(c), (12, 200, 255));
    }

    #[test]
    fn writes_outside_are_ignored() {
        let mut film = Film::new(4, 3, 0u32);
        film.attempt_write(-1, 0, 1);
        film.attempt_write(4, 0, 1);
        film.attempt_write(0, 3, 1);
        assert!(film.buffer.iter().all(|&p| p == 0));
        film.attempt_write(3, 2, 5);
        assert_eq!(film.at(3, 2), 5);
    }

    #[test]
    fn line_covers_endpoints() {
        let mut film = Film::new(10, 10, 0u32);
        film.draw_line((1, 1), (8, 5), 7);
        assert_eq!(film.at(1, 1), 7);
        assert_eq!(film.at(8, 5), 7);
    }

    #[test]
    fn circle_stays_on_its_radius() {
        let mut film = Film::new(21, 21, 0u32);
        film.blit_circle(5.0, 10, 10, 1);
        assert_eq!(film.at(10, 10), 0);
        assert_eq!(film.at(15, 10), 1);
        for y in 0..21 {
            for x in 0..21 {
                if film.at(x, y) == 1 {
                    let d = ((x as f32 - 10.0).powi(2) + (y as f32 - 10.0).powi(2)).sqrt();
                    assert!((d - 5.0).abs() < 1.0);
                }
            }
        }
    }

    #[test]
    fn text_leaves_unknown_characters_blank() {
        let mut film = Film::new(40, 10, 0u32);
        film.draw_text("~", 0, 0, 1, 1);
        assert!(film.buffer.iter().all(|&p| p == 0));
        film.draw_text("1", 0, 0, 2, 1);
        assert!(film.buffer.iter().any(|&p| p == 1));
    }

    #[test]
    fn rgb_image_matches_buffer() {
        let mut film = Film::new(3, 2, 0u32);
        film.attempt_write(2, 1, rgb_to_u32(1, 2, 3));
        let img = film.to_rgb_image();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1), &image::Rgb([1, 2, 3]));
        assert_eq!(img.get_pixel(0, 0), &image::Rgb([0, 0, 0]));
    }
}
