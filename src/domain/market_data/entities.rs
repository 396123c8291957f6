pub use super::value_objects::{AssetId, Category};

/// Domain entity - Tracked instrument with its simulated trajectory
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub id: AssetId,
    pub name: &'static str,
    pub label: &'static str,
    pub ticker: &'static str,
    pub value: f64,
    /// Daily change in percent, signed.
    pub change_pct: f64,
    pub category: Category,
    pub tags: &'static [&'static str],
    pub comment: &'static str,
    pub series: &'static [f64],
}
