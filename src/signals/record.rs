// =============================================================================
// Signal Record - Stamped, client-facing signal
// =============================================================================
//
// The engine never assigns identity or time. Every decision that leaves the
// service is wrapped here with a UUID v4 and a UTC timestamp
// (ISO 8601, microseconds, trailing `Z`).
// =============================================================================

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::Decision;
use crate::types::Side;

/// A generated signal as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Generation time, e.g. `2024-05-01T12:34:56.789012Z`.
    pub timestamp: String,

    pub symbol: String,

    /// "buy" or "sell".
    pub side: Side,

    pub price: f64,

    /// Blended confidence in [0.05, 0.99].
    pub confidence: f64,

    /// Diagnostic string with the inputs that produced the signal.
    #[serde(default)]
    pub reason: String,
}

impl SignalRecord {
    /// Stamp a decision with a fresh id and the current UTC time.
    pub fn stamp(decision: Decision) -> Self {
        Self::stamp_at(decision, Utc::now())
    }

    pub fn stamp_at(decision: Decision, at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, true),
            symbol: decision.symbol,
            side: decision.side,
            price: decision.price,
            confidence: decision.confidence,
            reason: decision.reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn decision() -> Decision {
        Decision {
            symbol: "EUR/USD".into(),
            side: Side::Buy,
            price: 1.1012,
            confidence: 0.526,
            reason: "sentiment=0.50, cosmic=1.030".into(),
        }
    }

    #[test]
    fn stamp_copies_decision_fields() {
        let r = SignalRecord::stamp(decision());
        assert_eq!(r.symbol, "EUR/USD");
        assert_eq!(r.side, Side::Buy);
        assert!((r.price - 1.1012).abs() < f64::EPSILON);
        assert!((r.confidence - 0.526).abs() < f64::EPSILON);
        assert_eq!(r.reason, "sentiment=0.50, cosmic=1.030");
        assert!(uuid::Uuid::parse_str(&r.id).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let a = SignalRecord::stamp(decision());
        let b = SignalRecord::stamp(decision());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn timestamp_is_utc_with_micros() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap();
        let r = SignalRecord::stamp_at(decision(), at);
        assert_eq!(r.timestamp, "2024-05-01T12:34:56.000000Z");
    }

    #[test]
    fn wire_shape() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let r = SignalRecord::stamp_at(decision(), at);
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["side"], "buy");
        assert_eq!(v["symbol"], "EUR/USD");
        for key in ["id", "timestamp", "symbol", "side", "price", "confidence", "reason"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
    }
}
