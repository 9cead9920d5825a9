use async_trait::async_trait;

use crate::error::BatchError;
use super::item::Item;

/// Error type a [`Processor`] may fail a batch with.
pub type ProcessorError = Box<dyn std::error::Error + Send + Sync>;

/// The downstream processing function invoked once per batch.
///
/// Implementations must return exactly one output per input, in input
/// order; the scheduler pairs outputs with waiting callers positionally.
/// A call may be arbitrarily slow (real or simulated inference latency)
/// without stalling submitters, since it runs on the worker task.
///
/// A returned error fails the whole batch: every caller whose item was in
/// it receives [`BatchError::Processing`](crate::BatchError::Processing).
///
/// # Example
///
/// ```ignore
/// struct Suffixer;
///
/// #[async_trait]
/// impl Processor<String, String> for Suffixer {
///     async fn process(&self, inputs: Vec<String>) -> Result<Vec<String>, ProcessorError> {
///         Ok(inputs.into_iter().map(|s| format!("{s}-result")).collect())
///     }
/// }
/// ```
#[async_trait]
pub trait Processor<I, O> {
    /// Processes an ordered batch of payloads into an ordered,
    /// same-length batch of outputs.
    async fn process(&self, inputs: Vec<I>) -> Result<Vec<O>, ProcessorError>;
}

/// The submission side of the scheduler.
#[async_trait]
pub trait Batcher<I, O> {
    /// Queues a payload for batched processing and returns an [`Item`]
    /// that resolves with its result.
    ///
    /// Fails immediately only with
    /// [`BatchError::QueueFull`](crate::BatchError::QueueFull) when a
    /// queue bound is configured and reached; every accepted submission
    /// eventually resolves with a value or a failure.
    async fn run(&self, input: I) -> Result<Item<O>, BatchError>;
}
