//! Token bucket admission primitive.

use tokio::time::Instant;

/// A single counter-and-refill token bucket.
///
/// Tokens are real-valued internally even though requests consume whole
/// units, so bursts after idle periods are bounded exactly by `burst` and
/// steady-state admission converges exactly to `rate` per second. Refill is
/// lazy: computed on access, never by a ticking clock.
#[derive(Debug)]
pub struct TokenBucket {
    rate: f64,
    burst: u32,
    tokens: f64,
    last_refill: Instant,
}

impl TokenBucket {
    /// Create a full bucket refilling at `rate` tokens per second, holding
    /// at most `burst` tokens.
    pub fn new(rate: f64, burst: u32) -> Self {
        Self {
            rate,
            burst,
            tokens: burst as f64,
            last_refill: Instant::now(),
        }
    }

    /// Consume one token if available. Binary admit/reject, no queueing.
    pub fn allow(&mut self) -> bool {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * self.rate).min(self.burst as f64);
        self.last_refill = now;

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            true
        } else {
            false
        }
    }
}
