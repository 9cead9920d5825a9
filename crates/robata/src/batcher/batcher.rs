use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::oneshot::channel;

use crate::communication::{Pill, QueueItem};
use crate::config::BatchConfig;
use crate::core::batch::batching_loop;
use crate::core::queue::PendingQueue;
use crate::core::worker::BatchWorkerHandle;
use crate::error::BatchError;
use super::core_trait::{Batcher, Processor};
use super::item::Item;

/// The micro-batching scheduler.
///
/// Owns the pending queue and the single worker task that drains it.
/// Submissions from arbitrarily many concurrent tasks are accumulated into
/// batches of at most `max_batch_size` and dispatched to the processor one
/// batch at a time; each caller is woken with exactly the output that
/// corresponds to its own payload.
///
/// Dropping the batcher shuts the worker down; items still queued at that
/// point resolve with [`BatchError::WorkerGone`].
pub struct BatchInference<I, O> {
    queue: Arc<PendingQueue<QueueItem<I, O>>>,
    config: BatchConfig,
    handle: BatchWorkerHandle,
}

impl<I, O> BatchInference<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    /// Spawns the worker loop over `processor` and returns the scheduler.
    pub fn new<P>(processor: P, config: BatchConfig) -> Self
    where
        P: Processor<I, O> + Send + Sync + 'static,
    {
        let queue = Arc::new(PendingQueue::new(config.queue_capacity));
        let max_batch_size = config.effective_max_batch_size();

        let pill = Pill::new();
        let handle = BatchWorkerHandle::new({
            let queue = queue.clone();
            move |running| {
                tokio::spawn(async move {
                    let _pill = pill;
                    batching_loop(processor, running, queue, max_batch_size).await;
                })
            }
        });

        Self {
            queue,
            config,
            handle,
        }
    }

    /// Submits a payload and awaits its result in one call.
    ///
    /// Suspends only the calling task; other submitters and the transport
    /// keep running while the batch is formed and processed.
    pub async fn submit(&self, input: I) -> Result<O, BatchError> {
        self.run(input).await?.await
    }

    /// Stops the worker loop.
    ///
    /// The in-flight batch (if any) completes and its callers are
    /// resolved; items still queued afterwards are dropped and their
    /// callers observe [`BatchError::WorkerGone`].
    pub fn shutdown(&mut self) {
        self.handle.shutdown();
    }
}

#[async_trait]
impl<I, O> Batcher<I, O> for BatchInference<I, O>
where
    I: Send + 'static,
    O: Send + 'static,
{
    async fn run(&self, input: I) -> Result<Item<O>, BatchError> {
        let (tx, rx) = channel();
        let queue_item = QueueItem::new(input, tx);

        if self.queue.push(queue_item).await.is_err() {
            // push only rejects when a capacity bound is configured
            return Err(BatchError::QueueFull {
                capacity: self.config.queue_capacity.unwrap_or(0),
            });
        }

        Ok(Item::new(rx))
    }
}
