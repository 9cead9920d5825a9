use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

use crate::error::BatchError;

/// # Item
///
/// The pending result of one batched submission.
///
/// Awaiting it suspends the calling task until the worker delivers the
/// output (or the batch's failure). A result channel that closes without
/// delivering - the worker panicked, was shut down, or the batcher was
/// dropped with the item still queued - resolves to
/// [`BatchError::WorkerGone`] rather than hanging.
pub struct Item<T> {
    /// The underlying channel receiver
    receiver: oneshot::Receiver<Result<T, BatchError>>,
}

impl<T> Item<T> {
    pub(crate) fn new(receiver: oneshot::Receiver<Result<T, BatchError>>) -> Self {
        Self { receiver }
    }
}

impl<T> Future for Item<T> {
    type Output = Result<T, BatchError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_closed)) => Poll::Ready(Err(BatchError::WorkerGone)),
            Poll::Pending => Poll::Pending,
        }
    }
}
