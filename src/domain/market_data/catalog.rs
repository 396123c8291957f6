use super::entities::{Asset, AssetId, Category};

/// Static board content. Order here is the display order of the board.
pub static ASSETS: &[Asset] = &[
    Asset {
        id: AssetId::from_static("sp500"),
        name: "S&P 500",
        label: "Large cap US",
        ticker: "^GSPC",
        value: 5098.42,
        change_pct: -0.27,
        category: Category::Equity,
        tags: &["US", "Large cap", "Référence portefeuille"],
        comment: "Indice actions large US, souvent au cœur d’une poche ETF diversifiée.",
        series: &[100.0, 99.0, 101.0, 102.0, 103.0, 101.0, 104.0, 105.0],
    },
    Asset {
        id: AssetId::from_static("cac40"),
        name: "CAC 40",
        label: "Actions France",
        ticker: "^FCHI",
        value: 7420.15,
        change_pct: 0.32,
        category: Category::Equity,
        tags: &["France", "Indice domestique"],
        comment: "Indice actions français, utile pour relier les annonces économiques locales au marché.",
        series: &[95.0, 96.0, 94.0, 97.0, 98.0, 99.0, 100.0, 101.0],
    },
    Asset {
        id: AssetId::from_static("msciworld"),
        name: "MSCI World",
        label: "ETF monde développé",
        ticker: "URTH",
        value: 3220.7,
        change_pct: 0.18,
        category: Category::Equity,
        tags: &["Monde développé", "ETF coeur"],
        comment: "Indice monde développé, utilisé comme base de portefeuille long terme.",
        series: &[90.0, 91.0, 92.0, 93.0, 94.0, 95.0, 96.0, 97.0],
    },
    Asset {
        id: AssetId::from_static("bitcoin"),
        name: "Bitcoin",
        label: "Crypto labo",
        ticker: "BTC",
        value: 68440.0,
        change_pct: 1.25,
        category: Category::Crypto,
        tags: &["Crypto", "Volatilité forte"],
        comment: "Suivi comme laboratoire de volatilité. Poids limité dans une poche risque.",
        series: &[100.0, 103.0, 98.0, 105.0, 110.0, 108.0, 112.0, 115.0],
    },
    Asset {
        id: AssetId::from_static("ethereum"),
        name: "Ethereum",
        label: "Réseau / smart contracts",
        ticker: "ETH",
        value: 3905.0,
        change_pct: -0.8,
        category: Category::Crypto,
        tags: &["Crypto", "Smart contracts"],
        comment: "Actif lié à un réseau de contrats intelligents. Analyse centrée sur le risque et la technologie.",
        series: &[95.0, 97.0, 96.0, 98.0, 97.0, 99.0, 101.0, 100.0],
    },
];

pub fn find_asset<'a>(catalog: &'a [Asset], id: &str) -> Option<&'a Asset> {
    catalog.iter().find(|asset| asset.id.as_str() == id)
}

/// Asset preselected on load: `preferred` when present, else the first entry.
pub fn default_asset<'a>(catalog: &'a [Asset], preferred: &str) -> Option<&'a Asset> {
    find_asset(catalog, preferred).or_else(|| catalog.first())
}
