use std::collections::VecDeque;
use tokio::sync::{Mutex, Notify};

/// # PendingQueue
///
/// FIFO queue of submitted work awaiting batching.
///
/// Safe for arbitrarily many concurrent producers and the single worker
/// consumer. Insertion order is the only ordering guarantee, and each item
/// is handed out exactly once.
///
/// The queue is unbounded unless constructed with a capacity, in which
/// case `push` rejects once the bound is reached.
pub struct PendingQueue<T> {
    items: Mutex<VecDeque<T>>,
    notify: Notify,
    capacity: Option<usize>,
}

impl<T> PendingQueue<T> {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
            capacity,
        }
    }

    /// Appends an item and wakes the consumer.
    ///
    /// Returns the item back to the caller when a capacity bound is
    /// configured and already reached; nothing is enqueued in that case.
    pub async fn push(&self, item: T) -> Result<(), T> {
        {
            let mut items = self.items.lock().await;
            if let Some(capacity) = self.capacity {
                if items.len() >= capacity {
                    return Err(item);
                }
            }
            items.push_back(item);
        }
        self.notify.notify_one();
        Ok(())
    }

    /// Removes and returns the head of the queue, or `None` when empty.
    pub async fn pop_nonblocking(&self) -> Option<T> {
        self.items.lock().await.pop_front()
    }

    /// Waits until an item is available, then removes and returns it.
    ///
    /// The wait is a cooperative `Notify` suspension. A wakeup that loses
    /// the race for the item simply goes back to waiting, so this never
    /// returns an empty marker.
    pub async fn pop_blocking(&self) -> T {
        loop {
            if let Some(item) = self.pop_nonblocking().await {
                return item;
            }
            self.notify.notified().await;
        }
    }

    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.items.lock().await.len()
    }

    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.items.lock().await.is_empty()
    }
}
