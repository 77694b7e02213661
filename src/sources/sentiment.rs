// =============================================================================
// Sentiment Source - Gaussian stub
// =============================================================================
//
// Placeholder for a news/NLP feed. Scores are drawn from N(0, 0.15) and
// clamped to [-1, 1]. The symbol is accepted but does not influence the draw.
// =============================================================================

use std::sync::Arc;

use crate::sources::EntropySource;

/// Standard deviation of the sentiment stub.
pub const SENTIMENT_STD_DEV: f64 = 0.15;

/// Produces a sentiment score in `[-1.0, 1.0]` for a symbol.
pub trait SentimentSource: Send + Sync {
    fn sentiment(&self, symbol: &str) -> f64;
}

pub struct GaussianSentiment {
    entropy: Arc<EntropySource>,
}

impl GaussianSentiment {
    pub fn new(entropy: Arc<EntropySource>) -> Self {
        Self { entropy }
    }
}

impl SentimentSource for GaussianSentiment {
    fn sentiment(&self, _symbol: &str) -> f64 {
        self.entropy.normal(0.0, SENTIMENT_STD_DEV).clamp(-1.0, 1.0)
    }
}
