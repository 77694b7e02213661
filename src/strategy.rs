// =============================================================================
// Blend Strategy - Sentiment-driven side, blended confidence
// =============================================================================
//
// Two pure stages:
//   1. compute_confidence: weighted blend of three sub-scores
//        price_score     = 0.5                 (no momentum signal yet)
//        sentiment_score = 0.5 + 0.5 * sentiment
//        cosmic_score    = cosmic - 0.9        (not rescaled to [0, 1])
//        raw = 0.4 * price + 0.4 * sentiment + 0.2 * cosmic
//      clamped to [0.05, 0.99].
//   2. decide: no verdict inside the sentiment dead zone (|s| < 0.15),
//      otherwise the sign of sentiment picks the side.
// =============================================================================

use serde::Serialize;

use crate::types::Side;

/// |sentiment| below this emits no signal.
pub const SENTIMENT_DEAD_ZONE: f64 = 0.15;

pub const MIN_CONFIDENCE: f64 = 0.05;
pub const MAX_CONFIDENCE: f64 = 0.99;

const PRICE_WEIGHT: f64 = 0.4;
const SENTIMENT_WEIGHT: f64 = 0.4;
const COSMIC_WEIGHT: f64 = 0.2;

/// Placeholder until a momentum score is computed from price history.
const PRICE_SCORE: f64 = 0.5;

/// Offset subtracted from the cosmic modifier.
const COSMIC_BASELINE: f64 = 0.9;

/// Output of the decision function for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub side: Side,
    pub confidence: f64,
    pub reason: String,
}

pub struct BlendStrategy;

impl BlendStrategy {
    /// Blend price, sentiment and cosmic inputs into a confidence score.
    pub fn compute_confidence(_price: f64, sentiment: f64, cosmic: f64) -> f64 {
        let sentiment_score = 0.5 + 0.5 * sentiment;
        let cosmic_score = cosmic - COSMIC_BASELINE;

        let raw = PRICE_SCORE * PRICE_WEIGHT
            + sentiment_score * SENTIMENT_WEIGHT
            + cosmic_score * COSMIC_WEIGHT;

        raw.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }

    /// Return a verdict, or `None` when sentiment sits in the dead zone.
    pub fn decide(price: f64, sentiment: f64, cosmic: f64) -> Option<Verdict> {
        if sentiment.abs() < SENTIMENT_DEAD_ZONE {
            return None;
        }

        Some(Verdict {
            side: Side::from_sentiment(sentiment),
            confidence: Self::compute_confidence(price, sentiment, cosmic),
            reason: format!("sentiment={sentiment:.2}, cosmic={cosmic:.3}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_buy() {
        let v = BlendStrategy::decide(1.10, 0.5, 1.03).unwrap();
        assert_eq!(v.side, Side::Buy);
        assert!((v.confidence - 0.526).abs() < 1e-9);
        assert_eq!(v.reason, "sentiment=0.50, cosmic=1.030");
    }

    #[test]
    fn dead_zone_emits_nothing() {
        assert!(BlendStrategy::decide(1.10, 0.10, 1.03).is_none());
        for s in [-0.149, -0.1, -0.01, 0.0, 0.01, 0.1, 0.149] {
            for cosmic in [0.0, 0.94, 1.12, 50.0] {
                for price in [-5.0, 0.0, 1.1, 1e6] {
                    assert!(BlendStrategy::decide(price, s, cosmic).is_none());
                }
            }
        }
    }

    #[test]
    fn dead_zone_boundary_is_inclusive_of_signal() {
        let buy = BlendStrategy::decide(1.0, 0.15, 1.0).unwrap();
        assert_eq!(buy.side, Side::Buy);
        let sell = BlendStrategy::decide(1.0, -0.15, 1.0).unwrap();
        assert_eq!(sell.side, Side::Sell);
    }

    #[test]
    fn sign_picks_side() {
        for s in [0.16, 0.3, 0.75, 1.0] {
            assert_eq!(BlendStrategy::decide(1.0, s, 1.0).unwrap().side, Side::Buy);
            assert_eq!(BlendStrategy::decide(1.0, -s, 1.0).unwrap().side, Side::Sell);
        }
    }

    #[test]
    fn sell_example() {
        // 0.2 + 0.4 * 0.25 + 0.2 * 0.1 = 0.32
        let v = BlendStrategy::decide(1.26, -0.5, 1.0).unwrap();
        assert_eq!(v.side, Side::Sell);
        assert!((v.confidence - 0.32).abs() < 1e-9);
        assert_eq!(v.reason, "sentiment=-0.50, cosmic=1.000");
    }

    #[test]
    fn confidence_is_always_clamped() {
        let inputs = [-1e9, -100.0, -1.0, -0.5, 0.0, 0.5, 1.0, 100.0, 1e9];
        for &p in &inputs {
            for &s in &inputs {
                for &c in &inputs {
                    let conf = BlendStrategy::compute_confidence(p, s, c);
                    assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&conf));
                }
            }
        }
    }

    #[test]
    fn extreme_inputs_hit_the_bounds() {
        assert_eq!(BlendStrategy::compute_confidence(1.0, 1.0, 100.0), MAX_CONFIDENCE);
        assert_eq!(BlendStrategy::compute_confidence(1.0, -1.0, -100.0), MIN_CONFIDENCE);
    }

    #[test]
    fn price_does_not_move_confidence() {
        let a = BlendStrategy::compute_confidence(0.5, 0.3, 1.01);
        let b = BlendStrategy::compute_confidence(2.5, 0.3, 1.01);
        assert_eq!(a, b);
    }

    #[test]
    fn reason_rounds_to_fixed_precision() {
        let v = BlendStrategy::decide(1.0, 0.23456, 1.0345678).unwrap();
        assert_eq!(v.reason, "sentiment=0.23, cosmic=1.035");
    }
}
