use derive_more::{Display, From, Into};

/// Value Object - Vertical scale of one bar, in `[floor, 1.0]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Display)]
#[display(fmt = "scaleY({})", _0)]
pub struct BarScale(f64);

impl BarScale {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// CSS `transform` value for the bar element.
    pub fn css_transform(&self) -> String {
        self.to_string()
    }
}

/// Scale each point against the series maximum, clamped up to `floor` so that
/// small values stay visible. A series without a positive maximum renders every
/// bar at the floor.
pub fn bar_scales(series: &[f64], floor: f64) -> Vec<BarScale> {
    let max = series.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(max.is_finite() && max > 0.0) {
        return series.iter().map(|_| BarScale(floor)).collect();
    }
    series
        .iter()
        .map(|v| BarScale((v / max).max(floor)))
        .collect()
}
