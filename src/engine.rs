// =============================================================================
// Signal Engine - Strongest signal across the configured symbols
// =============================================================================
//
// For every symbol, independently:
//   1. Read a synthetic price
//   2. Read a sentiment score
//   3. Compute the cosmic modifier for the evaluation time
//   4. Run the blend strategy
// then keep the candidate with the highest confidence.
//
// Tie-break: the first symbol in configured order wins. A later candidate
// replaces the current best only when its confidence is strictly greater.
// =============================================================================

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::sources::{CosmicModifier, PriceSource, SentimentSource};
use crate::strategy::{BlendStrategy, Verdict};
use crate::types::Side;

/// A verdict bound to the symbol and price it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub symbol: String,
    pub side: Side,
    pub price: f64,
    pub confidence: f64,
    pub reason: String,
}

impl Decision {
    fn from_verdict(symbol: &str, price: f64, verdict: Verdict) -> Self {
        Self {
            symbol: symbol.to_string(),
            side: verdict.side,
            price,
            confidence: verdict.confidence,
            reason: verdict.reason,
        }
    }
}

pub struct SignalEngine {
    symbols: Vec<String>,
    prices: Arc<dyn PriceSource>,
    sentiment: Arc<dyn SentimentSource>,
    cosmic: CosmicModifier,
}

impl SignalEngine {
    pub fn new(
        symbols: Vec<String>,
        prices: Arc<dyn PriceSource>,
        sentiment: Arc<dyn SentimentSource>,
        cosmic: CosmicModifier,
    ) -> Self {
        Self {
            symbols,
            prices,
            sentiment,
            cosmic,
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Evaluate all symbols at the current UTC time.
    pub fn generate_signal_now(&self) -> Option<Decision> {
        self.generate_signal_at(Utc::now())
    }

    /// Evaluate all symbols with the cosmic modifier pinned to `when`.
    pub fn generate_signal_at(&self, when: DateTime<Utc>) -> Option<Decision> {
        let mut best: Option<Decision> = None;

        for symbol in &self.symbols {
            let Some(candidate) = self.evaluate_symbol(symbol, when) else {
                continue;
            };

            let replace = match &best {
                Some(current) => candidate.confidence > current.confidence,
                None => true,
            };
            if replace {
                best = Some(candidate);
            }
        }

        match &best {
            Some(d) => info!(
                symbol = %d.symbol,
                side = %d.side,
                confidence = d.confidence,
                "signal selected"
            ),
            None => debug!(symbols = self.symbols.len(), "no symbol left the dead zone"),
        }

        best
    }

    /// Run the full pipeline for one symbol.
    pub fn evaluate_symbol(&self, symbol: &str, when: DateTime<Utc>) -> Option<Decision> {
        let price = self.prices.latest_price(symbol);
        let sentiment = self.sentiment.sentiment(symbol);
        let cosmic = self.cosmic.modifier(symbol, Some(when));

        let verdict = BlendStrategy::decide(price, sentiment, cosmic);
        debug!(
            symbol,
            price,
            sentiment,
            cosmic,
            signal = verdict.is_some(),
            "symbol evaluated"
        );

        verdict.map(|v| Decision::from_verdict(symbol, price, v))
    }
}
