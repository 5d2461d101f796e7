use serde::Serialize;

/// A cryptocurrency the dashboard can track, with its Yahoo Finance
/// pair symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAsset {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// The fixed set of supported cryptocurrencies.
pub const SUPPORTED_ASSETS: &[CryptoAsset] = &[
    CryptoAsset { name: "Bitcoin", symbol: "BTC-USD" },
    CryptoAsset { name: "Ethereum", symbol: "ETH-USD" },
    CryptoAsset { name: "XRP", symbol: "XRP-USD" },
    CryptoAsset { name: "Cardano", symbol: "ADA-USD" },
    CryptoAsset { name: "Solana", symbol: "SOL-USD" },
    CryptoAsset { name: "Polkadot", symbol: "DOT-USD" },
    CryptoAsset { name: "Dogecoin", symbol: "DOGE-USD" },
    CryptoAsset { name: "Polygon", symbol: "MATIC-USD" },
    CryptoAsset { name: "Litecoin", symbol: "LTC-USD" },
    CryptoAsset { name: "Chainlink", symbol: "LINK-USD" },
    CryptoAsset { name: "Uniswap", symbol: "UNI-USD" },
    CryptoAsset { name: "Shiba Inu", symbol: "SHIB-USD" },
    CryptoAsset { name: "Avalanche", symbol: "AVAX-USD" },
    CryptoAsset { name: "Cosmos", symbol: "ATOM-USD" },
    CryptoAsset { name: "Algorand", symbol: "ALGO-USD" },
    CryptoAsset { name: "VeChain", symbol: "VET-USD" },
    CryptoAsset { name: "Tezos", symbol: "XTZ-USD" },
    CryptoAsset { name: "Filecoin", symbol: "FIL-USD" },
    CryptoAsset { name: "Stellar", symbol: "XLM-USD" },
];

/// Look up a supported asset by display name.
pub fn find_by_name(name: &str) -> Option<&'static CryptoAsset> {
    SUPPORTED_ASSETS.iter().find(|a| a.name == name)
}

/// Look up a supported asset by Yahoo symbol.
pub fn find_by_symbol(symbol: &str) -> Option<&'static CryptoAsset> {
    SUPPORTED_ASSETS.iter().find(|a| a.symbol == symbol)
}

/// The assets preselected when the dashboard first loads.
pub fn default_selection() -> Vec<&'static CryptoAsset> {
    ["Bitcoin", "Ethereum", "Solana"]
        .iter()
        .filter_map(|name| find_by_name(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbols_are_unique() {
        let symbols: HashSet<&str> = SUPPORTED_ASSETS.iter().map(|a| a.symbol).collect();
        assert_eq!(symbols.len(), SUPPORTED_ASSETS.len());
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find_by_name("Bitcoin").map(|a| a.symbol), Some("BTC-USD"));
        assert_eq!(find_by_name("NotACoin"), None);
    }

    #[test]
    fn test_find_by_symbol() {
        assert_eq!(find_by_symbol("ETH-USD").map(|a| a.name), Some("Ethereum"));
        assert_eq!(find_by_symbol("ETH"), None);
    }

    #[test]
    fn test_default_selection_is_supported() {
        let selection = default_selection();
        assert_eq!(selection.len(), 3);
        assert!(selection.iter().all(|a| find_by_symbol(a.symbol).is_some()));
    }
}
