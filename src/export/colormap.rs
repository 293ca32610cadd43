//! Predefined colormaps for per-vertex surface coloring
//!
//! Each map is a short list of RGB control points sampled by piecewise
//! linear interpolation over t ∈ [0, 1]. Inversion flips the
//! parameterization, not the control points.

use std::fmt;

/// Named colormap presets selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColormapName {
    Viridis,
    Grayscale,
    BlueRed,
    Jet,
}

impl fmt::Display for ColormapName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColormapName::Viridis => "viridis",
            ColormapName::Grayscale => "grayscale",
            ColormapName::BlueRed => "blue-red",
            ColormapName::Jet => "jet",
        };
        f.write_str(s)
    }
}

/// A sampleable colormap.
#[derive(Debug, Clone)]
pub struct Colormap {
    controls: &'static [[f64; 3]],
    inverted: bool,
}

const VIRIDIS: &[[f64; 3]] = &[
    [0.267, 0.005, 0.329],
    [0.283, 0.141, 0.458],
    [0.254, 0.265, 0.530],
    [0.207, 0.372, 0.553],
    [0.164, 0.471, 0.558],
    [0.128, 0.567, 0.551],
    [0.135, 0.659, 0.518],
    [0.267, 0.749, 0.441],
    [0.478, 0.821, 0.318],
    [0.741, 0.873, 0.150],
    [0.993, 0.906, 0.144],
];

const GRAYSCALE: &[[f64; 3]] = &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];

const BLUE_RED: &[[f64; 3]] = &[
    [0.231, 0.298, 0.753],
    [0.865, 0.865, 0.865],
    [0.706, 0.016, 0.150],
];

const JET: &[[f64; 3]] = &[
    [0.0, 0.0, 0.5],
    [0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.5, 0.0, 0.0],
];

impl Colormap {
    pub fn new(name: ColormapName, inverted: bool) -> Self {
        let controls = match name {
            ColormapName::Viridis => VIRIDIS,
            ColormapName::Grayscale => GRAYSCALE,
            ColormapName::BlueRed => BLUE_RED,
            ColormapName::Jet => JET,
        };
        Self { controls, inverted }
    }

    /// RGB color at fraction t; t is clamped to [0, 1] and NaN maps to 0.
    pub fn sample(&self, t: f64) -> [f64; 3] {
        let mut t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if self.inverted {
            t = 1.0 - t;
        }

        let segments = self.controls.len() - 1;
        let scaled = t * segments as f64;
        let idx = (scaled.floor() as usize).min(segments - 1);
        let frac = scaled - idx as f64;

        let lo = self.controls[idx];
        let hi = self.controls[idx + 1];
        [
            lo[0] + frac * (hi[0] - lo[0]),
            lo[1] + frac * (hi[1] - lo[1]),
            lo[2] + frac * (hi[2] - lo[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn grayscale_endpoints() {
        let m = Colormap::new(ColormapName::Grayscale, false);
        assert_eq!(m.sample(0.0), [0.0, 0.0, 0.0]);
        assert_eq!(m.sample(1.0), [1.0, 1.0, 1.0]);
        let mid = m.sample(0.5);
        assert_relative_eq!(mid[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn invert_flips_parameterization() {
        let m = Colormap::new(ColormapName::Viridis, false);
        let inv = Colormap::new(ColormapName::Viridis, true);
        assert_eq!(m.sample(0.0), inv.sample(1.0));
        assert_eq!(m.sample(1.0), inv.sample(0.0));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let m = Colormap::new(ColormapName::Jet, false);
        assert_eq!(m.sample(-1.0), m.sample(0.0));
        assert_eq!(m.sample(2.0), m.sample(1.0));
        assert_eq!(m.sample(f64::NAN), m.sample(0.0));
    }
}
