use std::time::Instant;
use tokio::sync::oneshot::Sender;
use uuid::Uuid;

use crate::error::BatchError;

/// # QueueItem
///
/// One submitted unit of work awaiting batching.
///
/// `QueueItem` pairs the caller's payload with the oneshot sender through
/// which its result (or failure) is delivered. The sender is consumed by
/// value when the result is sent, so an item can be resolved at most once.
///
/// The `id` and enqueue timestamp exist for log correlation only and never
/// influence scheduling.
pub struct QueueItem<I, O> {
    /// Unique identifier for this item
    id: Uuid,

    /// The payload to be processed
    payload: I,

    /// When this item was submitted
    enqueued_at: Instant,

    /// Channel for delivering the result back to the submitter
    sender: Sender<Result<O, BatchError>>,
}

impl<I, O> QueueItem<I, O> {
    /// Creates a new `QueueItem` with a fresh id and enqueue timestamp.
    pub fn new(payload: I, sender: Sender<Result<O, BatchError>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            payload,
            enqueued_at: Instant::now(),
            sender,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn enqueued_at(&self) -> Instant {
        self.enqueued_at
    }

    /// Splits the item into its payload and result sender, preserving
    /// nothing else. The worker loop uses this to keep payload order and
    /// sender order aligned.
    pub fn into_parts(self) -> (I, Sender<Result<O, BatchError>>) {
        (self.payload, self.sender)
    }
}
