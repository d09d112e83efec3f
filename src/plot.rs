//! Scatter plots rasterized into a [`Film`].

use itertools::Itertools;

use crate::film::{rgb_to_u32, Film};
use crate::font;

pub const MARKER_RADIUS: f32 = 5.0;
const TICK_LENGTH: isize = 5;
const TEXT_SCALE: usize = 2;
const TARGET_TICKS: f64 = 8.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Marker {
    Circle,
    Square,
    Cross,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub marker: Marker,
    pub color: u32,
    pub points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(label: &str, marker: Marker, color: u32, points: Vec<(f64, f64)>) -> Self {
        Series {
            label: String::from(label),
            marker,
            color,
            points,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds1D {
    pub lower: f64,
    pub upper: f64,
}

impl Bounds1D {
    pub fn new(lower: f64, upper: f64) -> Self {
        Bounds1D { lower, upper }
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, v: f64) -> bool {
        self.lower <= v && v <= self.upper
    }

    /// widens both ends by `fraction` of the span, or by one unit if the span is empty
    pub fn padded(&self, fraction: f64) -> Self {
        let pad = if self.span() > 0.0 {
            self.span() * fraction
        } else {
            1.0
        };
        Bounds1D::new(self.lower - pad, self.upper + pad)
    }

    /// evenly spaced round values inside the bounds
    pub fn ticks(&self) -> (Vec<f64>, f64) {
        let step = nice_step(self.span() / TARGET_TICKS);
        let mut ticks = Vec::new();
        let mut v = (self.lower / step).ceil() * step;
        while v <= self.upper + step * 1e-9 {
            ticks.push(v);
            v += step;
        }
        (ticks, step)
    }
}

/// rounds `raw` up to 1, 2 or 5 times a power of ten
pub fn nice_step(raw: f64) -> f64 {
    if !(raw > 0.0) || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn format_tick(v: f64, step: f64) -> String {
    let decimals = (-step.log10().floor()).max(0.0) as usize;
    format!("{:.*}", decimals, v)
}

pub struct ScatterPlot {
    pub width: usize,
    pub height: usize,
    pub margin: usize,
    pub background: u32,
    pub foreground: u32,
    series: Vec<Series>,
}

impl ScatterPlot {
    pub fn new(width: usize, height: usize) -> Self {
        ScatterPlot {
            width,
            height,
            margin: 60,
            background: rgb_to_u32(255, 255, 255),
            foreground: rgb_to_u32(0, 0, 0),
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: Series) -> &mut Self {
        self.series.push(series);
        self
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// pixel rectangle the data is mapped into, as (left, top, right, bottom)
    pub fn area(&self) -> (isize, isize, isize, isize) {
        let m = self.margin as isize;
        (m, m / 2, self.width as isize - m / 2, self.height as isize - m)
    }

    /// padded data ranges over every series, None if there is nothing to plot.
    /// the y range starts at zero when all values are non-negative.
    pub fn bounds(&self) -> Option<(Bounds1D, Bounds1D)> {
        let points = || self.series.iter().flat_map(|s| s.points.iter());
        let (x0, x1) = points().map(|p| p.0).minmax().into_option()?;
        let (y0, y1) = points().map(|p| p.1).minmax().into_option()?;
        let x = Bounds1D::new(x0, x1).padded(0.05);
        let mut y = Bounds1D::new(y0, y1).padded(0.05);
        if y0 >= 0.0 {
            y.lower = 0.0;
        }
        Some((x, y))
    }

    pub fn to_pixel(&self, bounds: &(Bounds1D, Bounds1D), point: (f64, f64)) -> (isize, isize) {
        let (left, top, right, bottom) = self.area();
        let u = (point.0 - bounds.0.lower) / bounds.0.span();
        let v = (point.1 - bounds.1.lower) / bounds.1.span();
        (
            left + (u * (right - left) as f64).round() as isize,
            bottom - (v * (bottom - top) as f64).round() as isize,
        )
    }

    /// where the marker of the `index`th legend entry is drawn
    pub fn legend_anchor(&self, index: usize) -> (isize, isize) {
        let (left, top, _, _) = self.area();
        (left + 20, top + 20 + index as isize * 24)
    }

    pub fn render(&self) -> Film<u32> {
        let mut film = Film::new(self.width, self.height, self.background);
        let (left, top, right, bottom) = self.area();
        film.draw_line((left, top), (left, bottom), self.foreground);
        film.draw_line((left, bottom), (right, bottom), self.foreground);

        let bounds = match self.bounds() {
            Some(bounds) => bounds,
            None => return film,
        };
        self.draw_ticks(&mut film, &bounds);

        for series in self.series.iter() {
            for &point in series.points.iter() {
                let (px, py) = self.to_pixel(&bounds, point);
                draw_marker(&mut film, series.marker, px, py, series.color);
            }
        }

        self.draw_legend(&mut film);
        film
    }

    fn draw_ticks(&self, film: &mut Film<u32>, bounds: &(Bounds1D, Bounds1D)) {
        let (left, _, _, bottom) = self.area();
        let glyph_height = (font::GLYPH_HEIGHT * TEXT_SCALE) as isize;

        let (xs, x_step) = bounds.0.ticks();
        for x in xs {
            let (px, _) = self.to_pixel(bounds, (x, bounds.1.lower));
            film.draw_line((px, bottom), (px, bottom + TICK_LENGTH), self.foreground);
            let label = format_tick(x, x_step);
            let w = (font::text_width(&label) * TEXT_SCALE) as isize;
            film.draw_text(
                &label,
                px - w / 2,
                bottom + TICK_LENGTH + 4,
                TEXT_SCALE,
                self.foreground,
            );
        }

        let (ys, y_step) = bounds.1.ticks();
        for y in ys {
            let (_, py) = self.to_pixel(bounds, (bounds.0.lower, y));
            film.draw_line((left - TICK_LENGTH, py), (left, py), self.foreground);
            let label = format_tick(y, y_step);
            let w = (font::text_width(&label) * TEXT_SCALE) as isize;
            film.draw_text(
                &label,
                left - TICK_LENGTH - 4 - w,
                py - glyph_height / 2,
                TEXT_SCALE,
                self.foreground,
            );
        }
    }

    fn draw_legend(&self, film: &mut Film<u32>) {
        let glyph_height = (font::GLYPH_HEIGHT * TEXT_SCALE) as isize;
        for (i, series) in self.series.iter().enumerate() {
            let (x, y) = self.legend_anchor(i);
            draw_marker(film, series.marker, x, y, series.color);
            film.draw_text(
                &series.label,
                x + 14,
                y - glyph_height / 2,
                TEXT_SCALE,
                self.foreground,
            );
        }
    }
}

fn draw_marker(film: &mut Film<u32>, marker: Marker, x: isize, y: isize, c: u32) {
    match marker {
        Marker::Circle => {
            film.blit_circle(MARKER_RADIUS, x, y, c);
            film.blit_circle(MARKER_RADIUS - 1.0, x, y, c);
        }
        Marker::Square => film.blit_square(MARKER_RADIUS as isize - 1, x, y, c),
        Marker::Cross => {
            let r = MARKER_RADIUS as isize;
            film.draw_line((x - r, y - r), (x + r, y + r), c);
            film.draw_line((x - r, y + r), (x + r, y - r), c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: u32 = 0x1F77B4;
    const ORANGE: u32 = 0xFF7F0E;

    fn two_series() -> ScatterPlot {
        let mut plot = ScatterPlot::new(400, 300);
        plot.add_series(Series::new(
            "True",
            Marker::Circle,
            BLUE,
            vec![(1.0, 1.0), (2.0, 2.2), (3.0, 3.4)],
        ))
        .add_series(Series::new(
            "Expected",
            Marker::Square,
            ORANGE,
            vec![(1.0, 1.0), (2.0, 2.4), (3.0, 3.8)],
        ));
        plot
    }

    #[test]
    fn step_rounding() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(1.3), 2.0);
        assert_eq!(nice_step(3.0), 5.0);
        assert_eq!(nice_step(7.0), 10.0);
        assert!((nice_step(0.03) - 0.05).abs() < 1e-12);
        assert_eq!(nice_step(0.0), 1.0);
    }

    #[test]
    fn ticks_fall_inside_bounds() {
        let b = Bounds1D::new(0.55, 10.45);
        let (ticks, step) = b.ticks();
        assert_eq!(step, 2.0);
        assert_eq!(ticks, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(ticks.iter().all(|&t| b.contains(t)));
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(4.0, 2.0), "4");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
    }

    #[test]
    fn bounds_cover_all_series() {
        let plot = two_series();
        let (x, y) = plot.bounds().unwrap();
        assert!(x.lower < 1.0 && x.upper > 3.0);
        assert_eq!(y.lower, 0.0);
        assert!(y.upper > 3.8);
    }

    #[test]
    fn single_point_gets_a_nonempty_range() {
        let mut plot = ScatterPlot::new(100, 100);
        plot.add_series(Series::new("p", Marker::Cross, 1, vec![(2.0, -3.0)]));
        let (x, y) = plot.bounds().unwrap();
        assert_eq!(x, Bounds1D::new(1.0, 3.0));
        assert_eq!(y, Bounds1D::new(-4.0, -2.0));
    }

    #[test]
    fn points_map_into_the_plot_area() {
        let plot = two_series();
        let bounds = plot.bounds().unwrap();
        let (left, top, right, bottom) = plot.area();
        for series in plot.series() {
            for &p in series.points.iter() {
                let (px, py) = plot.to_pixel(&bounds, p);
                assert!(left < px && px < right);
                assert!(top < py && py < bottom);
            }
        }
        let (_, low) = plot.to_pixel(&bounds, (2.0, 1.0));
        let (_, high) = plot.to_pixel(&bounds, (2.0, 3.0));
        assert!(high < low);
    }

    #[test]
    fn markers_and_legend_use_series_colors() {
        let plot = two_series();
        let film = plot.render();
        let bounds = plot.bounds().unwrap();

        let (sx, sy) = plot.to_pixel(&bounds, (3.0, 3.8));
        assert_eq!(film.at(sx as usize, sy as usize), ORANGE);
        let (cx, cy) = plot.to_pixel(&bounds, (2.0, 2.2));
        assert_eq!(film.at((cx + 5) as usize, cy as usize), BLUE);

        let (lx, ly) = plot.legend_anchor(1);
        assert_eq!(film.at(lx as usize, ly as usize), ORANGE);
        let label_start = (lx + 14) as usize;
        let has_text = (label_start..label_start + 40)
            .any(|x| (ly as usize - 5..ly as usize + 5).any(|y| film.at(x, y) == plot.foreground));
        assert!(has_text);
    }

    #[test]
    fn empty_plot_is_just_axes() {
        let plot = ScatterPlot::new(200, 150);
        let film = plot.render();
        assert!(film
            .buffer
            .iter()
            .all(|&p| p == plot.background || p == plot.foreground));
        let (left, _, _, bottom) = plot.area();
        assert_eq!(film.at(left as usize, bottom as usize), plot.foreground);
    }
}
