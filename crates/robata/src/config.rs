//! Configuration surface for the batching scheduler.

/// Tuning knobs for a [`BatchInference`](crate::batcher::BatchInference)
/// instance.
///
/// There is deliberately no time-based batching window: the scheduler waits
/// for the first item and then drains greedily up to `max_batch_size`, so
/// batch size is demand-driven.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Maximum number of items dispatched to the processor in one call.
    /// Must be at least 1; a value of 0 is treated as 1.
    pub max_batch_size: usize,

    /// Optional bound on the pending queue. `None` (the default) accepts
    /// every submission; `Some(n)` rejects submissions once `n` items are
    /// waiting.
    pub queue_capacity: Option<usize>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 8,
            queue_capacity: None,
        }
    }
}

impl BatchConfig {
    /// Create a config with the given batch size cap and no queue bound.
    pub fn new(max_batch_size: usize) -> Self {
        Self {
            max_batch_size,
            ..Self::default()
        }
    }

    /// Bound the pending queue, rejecting submissions when full.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    /// Create a config from environment variables, falling back to defaults
    /// for anything unset or unparseable.
    ///
    /// * `ROBATA_MAX_BATCH_SIZE` - batch size cap
    /// * `ROBATA_QUEUE_CAPACITY` - pending queue bound
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ROBATA_MAX_BATCH_SIZE") {
            if let Ok(n) = val.parse() {
                config.max_batch_size = n;
            }
        }

        if let Ok(val) = std::env::var("ROBATA_QUEUE_CAPACITY") {
            if let Ok(n) = val.parse() {
                config.queue_capacity = Some(n);
            }
        }

        config
    }

    /// The batch size cap with the zero case clamped away.
    pub(crate) fn effective_max_batch_size(&self) -> usize {
        self.max_batch_size.max(1)
    }
}
