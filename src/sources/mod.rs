// =============================================================================
// Synthetic Sources
// =============================================================================
//
// Stub inputs for the signal engine:
// - Shared seedable entropy
// - Jittered price feed
// - Gaussian sentiment
// - Time-of-day cosmic modifier

pub mod cosmic;
pub mod entropy;
pub mod price;
pub mod sentiment;

pub use cosmic::CosmicModifier;
pub use entropy::EntropySource;
pub use price::{PriceSource, SyntheticPriceFeed};
pub use sentiment::{GaussianSentiment, SentimentSource};
