use derive_more::{Deref, Display};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Value Object - Stable asset identifier (`sp500`, `bitcoin`, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, Display)]
#[display(fmt = "{}", _0)]
pub struct AssetId(&'static str);

impl AssetId {
    pub const fn from_static(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Value Object - Asset class shown in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum Category {
    #[strum(serialize = "equity")]
    Equity,
    #[strum(serialize = "crypto")]
    Crypto,
}

impl Category {
    /// Button caption in the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Equity => "Actions",
            Category::Crypto => "Crypto",
        }
    }
}

/// Value Object - Active board filter: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_KEY: &'static str = "all";

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Filter values in filter-bar order: `all` first, then each category.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::iter().map(CategoryFilter::Only))
    }

    pub fn key(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_KEY,
            CategoryFilter::Only(category) => (*category).into(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "Tous",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() || raw == Self::ALL_KEY {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(raw).map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_keys_and_falls_back_to_all_on_empty() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "crypto".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Crypto)
        );
        assert!("bonds".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn choices_start_with_all() {
        let keys: Vec<_> = CategoryFilter::choices().map(|f| f.key()).collect();
        assert_eq!(keys, vec!["all", "equity", "crypto"]);
    }

    #[test]
    fn only_filter_matches_its_category() {
        let filter = CategoryFilter::Only(Category::Equity);
        assert!(filter.matches(Category::Equity));
        assert!(!filter.matches(Category::Crypto));
        assert!(CategoryFilter::All.matches(Category::Crypto));
    }
}
