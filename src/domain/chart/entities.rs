use super::value_objects::{BarScale, bar_scales};
use crate::domain::market_data::{Asset, AssetId};

pub const PLACEHOLDER_TITLE: &str = "Sélectionne un actif";
pub const PLACEHOLDER_COMMENT: &str =
    "Clique sur un actif du board pour voir une trajectoire pédagogique simulée.";

/// What the chart panel shows: a selected asset, or the invitation placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub asset_id: Option<AssetId>,
    pub title: &'static str,
    pub ticker: &'static str,
    pub comment: &'static str,
    pub tags: &'static [&'static str],
    pub bars: Vec<BarScale>,
}

impl ChartView {
    pub fn placeholder() -> Self {
        Self {
            asset_id: None,
            title: PLACEHOLDER_TITLE,
            ticker: "",
            comment: PLACEHOLDER_COMMENT,
            tags: &[],
            bars: Vec::new(),
        }
    }

    pub fn for_asset(asset: &Asset, bar_floor: f64) -> Self {
        Self {
            asset_id: Some(asset.id),
            title: asset.name,
            ticker: asset.ticker,
            comment: asset.comment,
            tags: asset.tags,
            bars: bar_scales(asset.series, bar_floor),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.asset_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market_data::catalog::ASSETS;

    #[test]
    fn asset_view_has_one_bar_per_point_and_one_chip_per_tag() {
        let btc = &ASSETS[3];
        let view = ChartView::for_asset(btc, 0.15);
        assert_eq!(view.title, "Bitcoin");
        assert_eq!(view.ticker, "BTC");
        assert_eq!(view.tags.len(), btc.tags.len());
        assert_eq!(view.bars.len(), btc.series.len());
        assert!(!view.is_placeholder());
    }

    #[test]
    fn placeholder_is_empty() {
        let view = ChartView::placeholder();
        assert!(view.is_placeholder());
        assert_eq!(view.title, PLACEHOLDER_TITLE);
        assert!(view.ticker.is_empty());
        assert!(view.tags.is_empty() && view.bars.is_empty());
    }
}
