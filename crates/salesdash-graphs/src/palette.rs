//! Colours for the dark dashboard theme and the sequential bar scale.

use plotters::style::{RGBAColor, RGBColor};

/// Stops of the Plasma sequential colour scale, dark to bright.
pub const PLASMA: [RGBColor; 10] = [
    RGBColor(13, 8, 135),
    RGBColor(70, 3, 159),
    RGBColor(114, 1, 168),
    RGBColor(156, 23, 158),
    RGBColor(189, 55, 134),
    RGBColor(216, 87, 107),
    RGBColor(237, 121, 83),
    RGBColor(251, 159, 58),
    RGBColor(253, 202, 38),
    RGBColor(240, 249, 33),
];

/// A continuous colour scale interpolated between evenly spaced stops.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<RGBColor>,
}

impl ColorScale {
    /// Creates a scale from at least one stop.
    pub fn new(stops: Vec<RGBColor>) -> Option<Self> {
        if stops.is_empty() {
            None
        } else {
            Some(Self { stops })
        }
    }

    /// The Plasma scale.
    pub fn plasma() -> Self {
        Self {
            stops: PLASMA.to_vec(),
        }
    }

    /// Colour at position `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> RGBColor {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = self.stops.len() - 1;
        if last == 0 {
            return self.stops[0];
        }

        #[allow(clippy::cast_precision_loss)]
        let scaled = t * last as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lower = (scaled.floor() as usize).min(last - 1);
        #[allow(clippy::cast_precision_loss)]
        let frac = scaled - lower as f64;

        let RGBColor(r0, g0, b0) = self.stops[lower];
        let RGBColor(r1, g1, b1) = self.stops[lower + 1];
        RGBColor(lerp(r0, r1, frac), lerp(g0, g1, frac), lerp(b0, b1, frac))
    }

    /// Colour for `value` normalised between `min` and `max`.
    ///
    /// A flat range maps to the middle of the scale.
    pub fn sample_between(&self, value: u64, min: u64, max: u64) -> RGBColor {
        if max <= min {
            return self.sample(0.5);
        }
        #[allow(clippy::cast_precision_loss)]
        let t = value.saturating_sub(min) as f64 / (max - min) as f64;
        self.sample(t)
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::plasma()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}

/// Fixed colours of the dark theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Chart and plot background.
    pub paper: RGBColor,
    /// Grid and axis lines.
    pub grid: RGBColor,
    /// Tick labels and chart title.
    pub accent: RGBColor,
    /// Value labels, axis titles, colour bar text.
    pub text: RGBColor,
    /// Bar outline.
    pub bar_outline: RGBAColor,
}

impl Theme {
    /// The dashboard's dark theme.
    pub const fn dark() -> Self {
        Self {
            paper: RGBColor(0x1e, 0x21, 0x30),
            grid: RGBColor(0x2a, 0x2f, 0x3d),
            accent: RGBColor(0xa6, 0xd8, 0xff),
            text: RGBColor(0xff, 0xff, 0xff),
            bar_outline: RGBAColor(255, 255, 255, 0.3),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Formats a colour as `#rrggbb`.
pub fn to_hex(color: RGBColor) -> String {
    let RGBColor(r, g, b) = color;
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints_hit_first_and_last_stop() {
        let scale = ColorScale::plasma();
        assert_eq!(scale.sample(0.0), PLASMA[0]);
        assert_eq!(scale.sample(1.0), PLASMA[9]);
    }

    #[test]
    fn test_sample_clamps() {
        let scale = ColorScale::plasma();
        assert_eq!(scale.sample(-3.0), PLASMA[0]);
        assert_eq!(scale.sample(7.5), PLASMA[9]);
        assert_eq!(scale.sample(f64::NAN), PLASMA[0]);
    }

    #[test]
    fn test_sample_interpolates_between_stops() {
        let scale = ColorScale::new(vec![RGBColor(0, 0, 0), RGBColor(200, 100, 50)]).unwrap();
        assert_eq!(scale.sample(0.5), RGBColor(100, 50, 25));
    }

    #[test]
    fn test_single_stop_scale() {
        let scale = ColorScale::new(vec![RGBColor(1, 2, 3)]).unwrap();
        assert_eq!(scale.sample(0.7), RGBColor(1, 2, 3));
        assert!(ColorScale::new(Vec::new()).is_none());
    }

    #[test]
    fn test_sample_between_flat_range() {
        let scale = ColorScale::plasma();
        assert_eq!(scale.sample_between(4, 4, 4), scale.sample(0.5));
        assert_eq!(scale.sample_between(10, 0, 10), PLASMA[9]);
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(to_hex(Theme::dark().paper), "#1e2130");
        assert_eq!(to_hex(Theme::dark().accent), "#a6d8ff");
    }
}
