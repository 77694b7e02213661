// =============================================================================
// Shared types used across the Oracle signal service
// =============================================================================

use serde::{Deserialize, Serialize};

/// Direction of a trade signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Positive sentiment buys, anything else sells.
    pub fn from_sentiment(sentiment: f64) -> Self {
        if sentiment > 0.0 {
            Self::Buy
        } else {
            Self::Sell
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}
