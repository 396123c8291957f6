use crate::domain::{
    chart::ChartView,
    logging::LogComponent,
    market_data::{Asset, AssetId, CategoryFilter, catalog},
};
use crate::{log_debug, log_info, log_warn};

/// Result of a filter change, so the view knows whether the chart was reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    SelectionKept,
    SelectionCleared,
    NothingSelected,
}

/// Board filter × chart selection.
///
/// The selection, when set, always names an asset of the catalog that passes
/// the active filter. `set_filter` clears it in the same call that hides it.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    catalog: &'static [Asset],
    filter: CategoryFilter,
    selection: Option<AssetId>,
    bar_floor: f64,
}

impl BoardState {
    /// Initial state: no filter, `preferred` selected (or the first asset).
    pub fn new(catalog: &'static [Asset], preferred: &str, bar_floor: f64) -> Self {
        let selection = catalog::default_asset(catalog, preferred).map(|asset| asset.id);
        Self { catalog, filter: CategoryFilter::All, selection, bar_floor }
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn selection(&self) -> Option<AssetId> {
        self.selection
    }

    pub fn selected_asset(&self) -> Option<&'static Asset> {
        self.selection
            .and_then(|id| catalog::find_asset(self.catalog, id.as_str()))
    }

    /// Catalog rows passing the active filter, in catalog order.
    pub fn visible_assets(&self) -> impl Iterator<Item = &'static Asset> + '_ {
        let catalog: &'static [Asset] = self.catalog;
        catalog.iter().filter(move |asset| self.filter.matches(asset.category))
    }

    /// Select an asset by id. Unknown ids leave the state untouched and return false.
    pub fn select_asset(&mut self, id: &str) -> bool {
        match catalog::find_asset(self.catalog, id) {
            Some(asset) => {
                self.selection = Some(asset.id);
                log_debug!(LogComponent::Application("Board"), "Selected {}", asset.id);
                true
            }
            None => {
                log_warn!(LogComponent::Application("Board"), "Ignoring selection of unknown asset '{}'", id);
                false
            }
        }
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) -> FilterOutcome {
        self.filter = filter;
        let Some(asset) = self.selected_asset() else {
            return FilterOutcome::NothingSelected;
        };
        if filter.matches(asset.category) {
            return FilterOutcome::SelectionKept;
        }
        self.selection = None;
        log_info!(
            LogComponent::Application("Board"),
            "Filter '{}' hides {}, chart reset",
            filter.key(),
            asset.id
        );
        FilterOutcome::SelectionCleared
    }

    pub fn chart_view(&self) -> ChartView {
        self.selected_asset()
            .map_or_else(ChartView::placeholder, |asset| ChartView::for_asset(asset, self.bar_floor))
    }
}
