//! Linear scales, tick generation and tick formatting.
//!
//! Tick steps are powers of ten times 1, 2 or 5. The thresholds that choose
//! between them (√50, √10, √2) split each decade geometrically, which is also
//! what `nice` relies on to converge.

use crate::color::Rgb;

const E10: f64 = 7.0710678118654755;
const E5: f64 = 3.1622776601683795;
const E2: f64 = std::f64::consts::SQRT_2;

const NICE_MAX_ITERATIONS: usize = 10;

pub const DEFAULT_TICK_COUNT: usize = 10;

/// `[min, max]` of the finite values, or `None` if there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });
    }
    bounds
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Unclamped; values outside the domain extrapolate.
    pub fn map(&self, value: f64) -> f64 {
        let t = normalize(self.domain, value);
        lerp(self.range, t)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let t = normalize(self.range, pixel);
        lerp(self.domain, t)
    }

    /// Extends the domain outward so both ends land on multiples of the tick step.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        if !d0.is_finite() || !d1.is_finite() || d0 == d1 {
            return self;
        }
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut prestep: Option<f64> = None;

        for _ in 0..NICE_MAX_ITERATIONS {
            let step = tick_increment(start, stop, count as f64);
            if prestep == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }

        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count as f64)
    }

    pub fn tick_format(&self, count: usize) -> TickFormat {
        let step = tick_step(self.domain.0, self.domain.1, count as f64);
        TickFormat {
            precision: precision_fixed(step),
        }
    }
}

/// Maps a numeric domain onto an RGB ramp between two colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    domain: (f64, f64),
    from: Rgb,
    to: Rgb,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), from: Rgb, to: Rgb) -> Self {
        Self { domain, from, to }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> Rgb {
        Rgb::interpolate(self.from, self.to, normalize(self.domain, value))
    }
}

/// Fixed-precision formatter for tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    precision: usize,
}

impl TickFormat {
    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let digits = format!("{:.*}", self.precision, value.abs());
        let negative = value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9'));
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (digits.as_str(), None),
        };

        let mut out = String::with_capacity(digits.len() + 4);
        if negative {
            out.push('\u{2212}');
        }
        out.push_str(&group_thousands(int_part));
        if let Some(frac) = frac_part {
            out.push('.');
            out.push_str(frac);
        }
        out
    }
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn normalize((a, b): (f64, f64), value: f64) -> f64 {
    let span = b - a;
    if span == 0.0 || span.is_nan() {
        return if span.is_nan() { f64::NAN } else { 0.5 };
    }
    (value - a) / span
}

fn lerp((a, b): (f64, f64), t: f64) -> f64 {
    a + (b - a) * t
}

// Math.round semantics: halves round toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Returns `(i1, i2, inc)`. A negative `inc` means the step is `1 / -inc`,
/// which keeps fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * scale);
        i2 = round_half_up(stop * scale);
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let scale = 10f64.powf(power) * factor;
        i1 = round_half_up(start / scale);
        i2 = round_half_up(stop / scale);
        if i1 * scale < start {
            i1 += 1.0;
        }
        if i2 * scale > stop {
            i2 -= 1.0;
        }
        inc = scale;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    tick_spec(start, stop, count).2
}

pub fn tick_step(start: f64, stop: f64, count: f64) -> f64 {
    let reversed = stop < start;
    let inc = if reversed {
        tick_increment(stop, start, count)
    } else {
        tick_increment(start, stop, count)
    };
    let magnitude = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reversed { -magnitude } else { magnitude }
}

pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reversed = stop < start;
    let (i1, i2, inc) = if reversed {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            let i = i as f64;
            if reversed { value(i2 - i) } else { value(i1 + i) }
        })
        .collect()
}

fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.log10().floor() as i32;
    (-exponent).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn extent_skips_non_finite() {
        assert_eq!(extent([3.0, f64::NAN, -1.0, 7.5]), Some((-1.0, 7.5)));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent(std::iter::empty()), None);
    }

    #[test]
    fn map_and_invert() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 500.0));
        assert_eq!(scale.map(5.0), 250.0);
        assert_eq!(scale.map(12.0), 600.0);
        assert_eq!(scale.invert(100.0), 2.0);
    }

    #[test]
    fn inverted_range_puts_large_values_on_top() {
        let scale = LinearScale::new((0.2, 1.0), (400.0, 0.0));
        assert!(approx(scale.map(0.2), 400.0));
        assert!(approx(scale.map(1.0), 0.0));
        assert!(approx(scale.map(0.6), 200.0));
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let scale = LinearScale::new((4.0, 4.0), (0.0, 300.0));
        assert_eq!(scale.map(4.0), 150.0);
        assert_eq!(scale.map(-100.0), 150.0);
    }

    #[test]
    fn nice_extends_to_round_bounds() {
        let x = LinearScale::new((-9.3, 74.2), (0.0, 100.0)).nice(DEFAULT_TICK_COUNT);
        assert_eq!(x.domain(), (-10.0, 80.0));

        let y = LinearScale::new((0.27, 0.97), (100.0, 0.0)).nice(DEFAULT_TICK_COUNT);
        assert_eq!(y.domain(), (0.2, 1.0));
    }

    #[test]
    fn nice_keeps_reversed_and_degenerate_domains() {
        let reversed = LinearScale::new((74.2, -9.3), (0.0, 1.0)).nice(10);
        assert_eq!(reversed.domain(), (80.0, -10.0));

        let flat = LinearScale::new((3.0, 3.0), (0.0, 1.0)).nice(10);
        assert_eq!(flat.domain(), (3.0, 3.0));
    }

    #[test]
    fn ticks_use_one_two_five_steps() {
        assert_eq!(
            ticks(0.0, 10.0, 10.0),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
        );
        assert_eq!(
            ticks(-10.0, 80.0, 10.0),
            vec![-10.0, 0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]
        );
        assert_eq!(ticks(0.2, 1.0, 4.0), vec![0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(1.0, 0.0, 2.0), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn ticks_edge_cases() {
        assert!(ticks(0.0, 1.0, 0.0).is_empty());
        assert_eq!(ticks(2.5, 2.5, 10.0), vec![2.5]);
    }

    #[test]
    fn tick_format_precision_follows_step() {
        let humidity = LinearScale::new((0.2, 1.0), (0.0, 1.0));
        let fmt = humidity.tick_format(4);
        assert_eq!(fmt.precision(), 1);
        assert_eq!(fmt.format(0.6), "0.6");
        assert_eq!(fmt.format(1.0), "1.0");

        let dew = LinearScale::new((-10.0, 80.0), (0.0, 1.0));
        let fmt = dew.tick_format(DEFAULT_TICK_COUNT);
        assert_eq!(fmt.precision(), 0);
        assert_eq!(fmt.format(-10.0), "\u{2212}10");
        assert_eq!(fmt.format(0.0), "0");
    }

    #[test]
    fn tick_format_groups_thousands_and_drops_negative_zero() {
        let fmt = TickFormat { precision: 0 };
        assert_eq!(fmt.format(1_234_567.0), "1,234,567");
        assert_eq!(fmt.format(-0.2), "0");
        assert_eq!(fmt.format(999.0), "999");
    }

    #[test]
    fn color_scale_interpolates_rgb() {
        let scale = ColorScale::new((0.0, 1.0), Rgb::new(0, 0, 0), Rgb::new(200, 100, 50));
        assert_eq!(scale.map(0.0), Rgb::new(0, 0, 0));
        assert_eq!(scale.map(0.5), Rgb::new(100, 50, 25));
        assert_eq!(scale.map(1.0), Rgb::new(200, 100, 50));
    }
}
