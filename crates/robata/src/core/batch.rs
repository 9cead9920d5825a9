use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, trace, warn};

use crate::batcher::Processor;
use crate::communication::QueueItem;
use crate::error::BatchError;
use super::queue::PendingQueue;

/// How long an idle wait for work may run before the stop flag is
/// re-checked. Bounds shutdown latency; does not delay batch formation.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Collects the next batch: block until at least one item is available,
/// then greedily drain without blocking until the queue is empty or the
/// batch holds `max_size` items.
///
/// There is no time-based window, so under light load this returns
/// immediately with a batch of one, and under saturation it fills to the
/// cap. Returns `None` only when `running` was cleared while idle; a
/// non-empty batch is always in `1..=max_size`.
pub(crate) async fn collect_batch<T>(
    queue: &PendingQueue<T>,
    max_size: usize,
    running: &AtomicBool,
) -> Option<Vec<T>> {
    let first = loop {
        if !running.load(Ordering::SeqCst) {
            return None;
        }
        match tokio::time::timeout(POLL_INTERVAL, queue.pop_blocking()).await {
            Ok(item) => break item,
            // Still idle; loop back to re-check the stop flag.
            Err(_) => continue,
        }
    };

    let mut batch = vec![first];
    while batch.len() < max_size {
        match queue.pop_nonblocking().await {
            Some(item) => batch.push(item),
            None => break,
        }
    }
    Some(batch)
}

/// The batch worker loop: collect, process once, fan results back out.
///
/// Runs on its own spawned task until the stop flag clears. Outputs are
/// paired with items positionally, so the k-th output reaches the k-th
/// submitter of the batch. On processor failure every item in the batch is
/// resolved with the failure instead of being left pending.
pub(crate) async fn batching_loop<I, O, P>(
    processor: P,
    running: Arc<AtomicBool>,
    queue: Arc<PendingQueue<QueueItem<I, O>>>,
    max_batch_size: usize,
) where
    P: Processor<I, O> + Send + Sync,
    I: Send,
    O: Send,
{
    loop {
        let batch = match collect_batch(&queue, max_batch_size, &running).await {
            Some(batch) => batch,
            None => break,
        };

        let mut payloads = Vec::with_capacity(batch.len());
        let mut senders = Vec::with_capacity(batch.len());
        for item in batch {
            trace!(
                id = %item.id(),
                wait_ms = item.enqueued_at().elapsed().as_millis() as u64,
                "item joined batch"
            );
            let (payload, sender) = item.into_parts();
            payloads.push(payload);
            senders.push(sender);
        }

        let expected = senders.len();
        debug!(batch_size = expected, "dispatching batch");

        match processor.process(payloads).await {
            Ok(outputs) if outputs.len() == expected => {
                for (sender, output) in senders.into_iter().zip(outputs) {
                    // The submitter may have gone away; the work is done
                    // either way.
                    let _ = sender.send(Ok(output));
                }
            }
            Ok(outputs) => {
                warn!(
                    expected,
                    got = outputs.len(),
                    "processor returned a wrong-length batch"
                );
                let err = BatchError::OutputMismatch {
                    expected,
                    got: outputs.len(),
                };
                for sender in senders {
                    let _ = sender.send(Err(err.clone()));
                }
            }
            Err(e) => {
                warn!(batch_size = expected, error = %e, "batch processing failed");
                let err = BatchError::Processing(e.to_string());
                for sender in senders {
                    let _ = sender.send(Err(err.clone()));
                }
            }
        }
    }
}
