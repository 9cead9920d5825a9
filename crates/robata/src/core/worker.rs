//! Handle management for the background batch worker task.

use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
use tokio::task::JoinHandle;

/// A handle owning the background task that runs the batch loop.
///
/// Construction spawns the task; the handle retains the shared stop flag
/// and the join handle. Shutdown is cooperative: the flag is cleared and
/// the loop observes it at the top of its next collection cycle, so exit
/// latency is bounded by the collector's poll interval. Dropping the
/// handle shuts the worker down.
pub struct BatchWorkerHandle {
    /// Flag indicating whether the background task should continue running
    running: Arc<AtomicBool>,

    /// Handle to the spawned background task, becomes `None` after shutdown
    handle: Option<JoinHandle<()>>,
}

impl BatchWorkerHandle {
    /// Spawns the worker via `task`, which receives the shared running
    /// flag and must return the `JoinHandle` of the spawned loop.
    pub fn new<F>(task: F) -> Self
    where
        F: FnOnce(Arc<AtomicBool>) -> JoinHandle<()> + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let handle = task(running.clone());

        Self {
            running,
            handle: Some(handle),
        }
    }

    /// Returns a clone of the stop flag.
    #[allow(dead_code)]
    pub fn running(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }

    /// Initiates a graceful shutdown of the worker.
    ///
    /// Clears the stop flag and detaches a task to await the loop's exit.
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = self.handle.take() {
            tokio::spawn(async move {
                let _ = handle.await;
            });
        }
    }
}

impl Drop for BatchWorkerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time;

    fn spin_until_stopped(running: Arc<AtomicBool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            while running.load(Ordering::SeqCst) {
                time::sleep(Duration::from_millis(10)).await;
            }
        })
    }

    #[tokio::test]
    async fn test_worker_starts_running() {
        let worker = BatchWorkerHandle::new(spin_until_stopped);
        assert!(worker.running().load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_worker_shutdown() {
        let stopped = Arc::new(AtomicBool::new(false));
        let stopped_clone = stopped.clone();

        let mut worker = BatchWorkerHandle::new(move |running| {
            tokio::spawn(async move {
                while running.load(Ordering::SeqCst) {
                    time::sleep(Duration::from_millis(10)).await;
                }
                stopped_clone.store(true, Ordering::SeqCst);
            })
        });

        worker.shutdown();
        time::sleep(Duration::from_millis(100)).await;

        assert!(!worker.running().load(Ordering::SeqCst));
        assert!(stopped.load(Ordering::SeqCst));
        assert!(worker.handle.is_none());
    }

    #[tokio::test]
    async fn test_drop_triggers_shutdown() {
        let stopped = Arc::new(AtomicBool::new(false));
        let stopped_clone = stopped.clone();

        {
            let _worker = BatchWorkerHandle::new(move |running| {
                tokio::spawn(async move {
                    while running.load(Ordering::SeqCst) {
                        time::sleep(Duration::from_millis(10)).await;
                    }
                    stopped_clone.store(true, Ordering::SeqCst);
                })
            });
        }

        time::sleep(Duration::from_millis(100)).await;
        assert!(stopped.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_multiple_shutdowns() {
        let mut worker = BatchWorkerHandle::new(spin_until_stopped);

        worker.shutdown();
        worker.shutdown();
        worker.shutdown();

        assert!(!worker.running().load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_shutdown_after_handle_already_taken() {
        let mut worker = BatchWorkerHandle::new(spin_until_stopped);

        let _ = worker.handle.take();
        worker.shutdown();

        assert!(!worker.running().load(Ordering::SeqCst));
    }
}
