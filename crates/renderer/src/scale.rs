//! Position scales mapping data values onto screen coordinates.

/// Continuous linear mapping from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range. Values outside the domain are
    /// extrapolated, not clamped.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Categorical scale dividing a range into evenly spaced, padded bands.
///
/// With `n` labels, inner padding `pi` and outer padding `po`:
///
/// ```text
/// step      = extent / (n - pi + 2 * po)
/// bandwidth = step * (1 - pi)
/// start     = r0 + (extent - step * (n - pi)) * align
/// band(i)   = start + step * i
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    labels: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Build a centered band scale using the same padding inside and out.
    pub fn new<I, S>(labels: I, range: (f64, f64), padding: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_padding(labels, range, padding, padding, 0.5)
    }

    pub fn with_padding<I, S>(
        labels: I,
        range: (f64, f64),
        padding_inner: f64,
        padding_outer: f64,
        align: f64,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let padding_inner = padding_inner.clamp(0.0, 1.0);
        let padding_outer = padding_outer.max(0.0);
        let align = align.clamp(0.0, 1.0);

        let (r0, r1) = range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };
        let n = labels.len() as f64;
        let step = (hi - lo) / (n - padding_inner + padding_outer * 2.0).max(1.0);
        let start = lo + (hi - lo - step * (n - padding_inner)) * align;
        let bandwidth = step * (1.0 - padding_inner);

        Self {
            labels,
            range,
            padding_inner,
            padding_outer,
            align,
            step,
            bandwidth,
            start,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Start of the band at `index`, if the index is in the domain.
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if index >= self.labels.len() {
            return None;
        }
        // Reversed ranges run from the high end down.
        let slot = if self.range.1 < self.range.0 {
            self.labels.len() - 1 - index
        } else {
            index
        };
        Some(self.start + self.step * slot as f64)
    }

    /// Start of the band for `label`, if the label is in the domain.
    pub fn position(&self, label: &str) -> Option<f64> {
        let index = self.labels.iter().position(|l| l == label)?;
        self.position_at(index)
    }

    /// Middle of the band at `index`, used for axis ticks.
    pub fn center_at(&self, index: usize) -> Option<f64> {
        self.position_at(index).map(|p| p + self.bandwidth / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_linear_endpoints() {
        let x = LinearScale::new((1754.0, 2015.0), (0.0, 900.0));
        assert_eq!(x.scale(1754.0), 0.0);
        assert!((x.scale(2015.0) - 900.0).abs() < EPS);
        assert!((x.scale(1884.5) - 450.0).abs() < EPS);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let x = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(x.scale(5.0), 50.0);
    }

    #[test]
    fn test_band_months() {
        let y = BandScale::new((1..=12).map(|m| m.to_string()), (0.0, 300.0), 0.1);
        let step = 300.0 / 12.1;
        assert!((y.step() - step).abs() < EPS);
        assert!((y.bandwidth() - step * 0.9).abs() < EPS);

        let start = (300.0 - step * 11.9) / 2.0;
        assert!((y.position_at(0).unwrap() - start).abs() < EPS);
        assert!((y.position("12").unwrap() - (start + step * 11.0)).abs() < EPS);
        assert_eq!(y.position("13"), None);
        assert_eq!(y.position_at(12), None);
    }

    #[test]
    fn test_band_symmetric_outer_padding() {
        let y = BandScale::new(["a", "b", "c"], (0.0, 100.0), 0.2);
        let first = y.position_at(0).unwrap();
        let last_end = y.position_at(2).unwrap() + y.bandwidth();
        assert!((first - (100.0 - last_end)).abs() < EPS);
    }

    #[test]
    fn test_band_without_padding_fills_range() {
        let y = BandScale::new(["a", "b", "c", "d"], (0.0, 100.0), 0.0);
        assert_eq!(y.bandwidth(), 25.0);
        assert_eq!(y.position("c"), Some(50.0));
        assert_eq!(y.center_at(0), Some(12.5));
    }
}
