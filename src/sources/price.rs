// =============================================================================
// Price Source - Synthetic jittered quotes
// =============================================================================
//
// No market connection. Each symbol has a fixed base price (1.0 when unknown)
// and every read adds independent uniform noise in [-0.0025, 0.0025].
// =============================================================================

use std::collections::HashMap;
use std::sync::Arc;

use crate::sources::EntropySource;

/// Base price used for symbols missing from the table.
pub const DEFAULT_BASE_PRICE: f64 = 1.0;

/// Half-width of the uniform noise added to every quote.
pub const PRICE_JITTER: f64 = 0.0025;

/// Produces the latest price for a symbol.
pub trait PriceSource: Send + Sync {
    fn latest_price(&self, symbol: &str) -> f64;
}

/// Default base-price table.
pub fn default_base_prices() -> HashMap<String, f64> {
    HashMap::from([
        ("EUR/USD".to_string(), 1.1000),
        ("GBP/USD".to_string(), 1.2600),
    ])
}

pub struct SyntheticPriceFeed {
    base_prices: HashMap<String, f64>,
    entropy: Arc<EntropySource>,
}

impl SyntheticPriceFeed {
    pub fn new(base_prices: HashMap<String, f64>, entropy: Arc<EntropySource>) -> Self {
        Self {
            base_prices,
            entropy,
        }
    }

    /// Base price before noise.
    pub fn base_price(&self, symbol: &str) -> f64 {
        self.base_prices
            .get(symbol)
            .copied()
            .unwrap_or(DEFAULT_BASE_PRICE)
    }
}

impl PriceSource for SyntheticPriceFeed {
    fn latest_price(&self, symbol: &str) -> f64 {
        self.base_price(symbol) + self.entropy.uniform(-PRICE_JITTER, PRICE_JITTER)
    }
}
