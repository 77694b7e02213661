// =============================================================================
// Signals Module
// =============================================================================
//
// What happens to a decision once the engine has produced it:
// - Stamping with id + timestamp
// - Bounded most-recent-first history

pub mod record;
pub mod store;

pub use record::SignalRecord;
pub use store::SignalStore;
