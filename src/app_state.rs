// =============================================================================
// Central Application State - Oracle Signal Service
// =============================================================================
//
// Ties the configuration, the signal engine and the signal store together.
// Shared across request handlers via `Arc<AppState>`.
//
// Thread safety:
//   - Atomic counter for lock-free version tracking.
//   - The engine is immutable; its sources guard their RNG internally.
//   - The store guards its history with a parking_lot::RwLock.
// =============================================================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use crate::engine::SignalEngine;
use crate::runtime_config::RuntimeConfig;
use crate::signals::{SignalRecord, SignalStore};
use crate::sources::{CosmicModifier, EntropySource, GaussianSentiment, SyntheticPriceFeed};

pub struct AppState {
    /// Incremented every time a signal is stored.
    pub state_version: AtomicU64,

    pub runtime_config: RuntimeConfig,

    pub engine: SignalEngine,

    pub store: SignalStore,

    /// Instant when the service was started. Used for uptime reporting.
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Build the engine and store described by `config`.
    pub fn new(config: RuntimeConfig) -> Self {
        let entropy = Arc::new(EntropySource::from_seed(config.rng_seed));

        let engine = SignalEngine::new(
            config.symbols.clone(),
            Arc::new(SyntheticPriceFeed::new(
                config.base_prices.clone(),
                entropy.clone(),
            )),
            Arc::new(GaussianSentiment::new(entropy)),
            CosmicModifier::default(),
        );

        Self::with_engine(config, engine)
    }

    /// Use a pre-built engine (tests inject deterministic sources here).
    pub fn with_engine(config: RuntimeConfig, engine: SignalEngine) -> Self {
        Self {
            state_version: AtomicU64::new(1),
            store: SignalStore::new(config.store_capacity),
            runtime_config: config,
            engine,
            start_time: std::time::Instant::now(),
        }
    }

    // ── Version Management ──────────────────────────────────────────────

    pub fn increment_version(&self) -> u64 {
        self.state_version.fetch_add(1, Ordering::SeqCst)
    }

    pub fn current_state_version(&self) -> u64 {
        self.state_version.load(Ordering::SeqCst)
    }

    // ── Signal Generation ───────────────────────────────────────────────

    /// Run the engine once. A decision is stamped, stored at the front of
    /// the history and returned; `None` means no symbol produced a signal.
    pub fn generate_and_record(&self) -> Option<SignalRecord> {
        let decision = self.engine.generate_signal_now()?;
        let record = SignalRecord::stamp(decision);

        self.store.push(record.clone());
        self.increment_version();

        Some(record)
    }

    // ── Health ──────────────────────────────────────────────────────────

    pub fn health(&self) -> HealthSnapshot {
        HealthSnapshot {
            status: "ok",
            state_version: self.current_state_version(),
            stored_signals: self.store.len(),
            store_capacity: self.store.capacity(),
            uptime_secs: self.start_time.elapsed().as_secs(),
            server_time: Utc::now().timestamp_millis(),
        }
    }
}

/// Liveness payload for `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    pub status: &'static str,
    pub state_version: u64,
    pub stored_signals: usize,
    pub store_capacity: usize,
    pub uptime_secs: u64,
    pub server_time: i64,
}
