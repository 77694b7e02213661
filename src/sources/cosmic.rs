// =============================================================================
// Cosmic Modifier - Time-of-day cycle
// =============================================================================
//
// A slow daily sine wave standing in for an exogenous adjustment feed:
//
//   h        = hour + minute / 60          (UTC, seconds ignored)
//   modifier = 1.0 + 0.06 * sin(h / 24 * 2π + phase)
//
// The phase comes from a small lookup table. Only the anchor pair has its own
// entry (phase 0); every other symbol shares the default phase of 0.5 rad.
// =============================================================================

use std::collections::HashMap;
use std::f64::consts::PI;

use chrono::{DateTime, Timelike, Utc};

/// Peak deviation from 1.0.
pub const COSMIC_AMPLITUDE: f64 = 0.06;

/// Phase shared by all symbols without a table entry.
pub const DEFAULT_PHASE: f64 = 0.5;

/// The one symbol with its own phase.
pub const ANCHOR_SYMBOL: &str = "EUR/USD";

#[derive(Debug, Clone)]
pub struct CosmicModifier {
    phases: HashMap<String, f64>,
    default_phase: f64,
}

impl CosmicModifier {
    pub fn new(phases: HashMap<String, f64>, default_phase: f64) -> Self {
        Self {
            phases,
            default_phase,
        }
    }

    /// Phase offset (radians) for a symbol.
    pub fn phase(&self, symbol: &str) -> f64 {
        self.phases
            .get(symbol)
            .copied()
            .unwrap_or(self.default_phase)
    }

    /// Modifier at `when`, or at the current UTC time when omitted.
    pub fn modifier(&self, symbol: &str, when: Option<DateTime<Utc>>) -> f64 {
        self.modifier_at(symbol, when.unwrap_or_else(Utc::now))
    }

    pub fn modifier_at(&self, symbol: &str, when: DateTime<Utc>) -> f64 {
        let h = when.hour() as f64 + when.minute() as f64 / 60.0;
        1.0 + COSMIC_AMPLITUDE * (h / 24.0 * 2.0 * PI + self.phase(symbol)).sin()
    }
}

impl Default for CosmicModifier {
    fn default() -> Self {
        Self::new(
            HashMap::from([(ANCHOR_SYMBOL.to_string(), 0.0)]),
            DEFAULT_PHASE,
        )
    }
}
