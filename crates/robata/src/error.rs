use thiserror::Error;

/// Errors surfaced to a caller waiting on a batched submission.
///
/// Every submitted item eventually resolves with either its output or one
/// of these variants; a handle is never left pending. The error is `Clone`
/// because a single processing failure is fanned out to every caller in
/// the same batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// The processing function failed for the whole batch.
    #[error("batch processing failed: {0}")]
    Processing(String),

    /// The processing function broke the one-output-per-input contract.
    #[error("processor returned {got} outputs for a batch of {expected}")]
    OutputMismatch { expected: usize, got: usize },

    /// The result channel closed before a result was delivered. The worker
    /// was shut down, panicked, or the batcher was dropped.
    #[error("batch worker is no longer running")]
    WorkerGone,

    /// Rejected at submission because the bounded queue is at capacity.
    #[error("pending queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BatchError::Processing("boom".into()).to_string(),
            "batch processing failed: boom"
        );
        assert_eq!(
            BatchError::OutputMismatch { expected: 4, got: 2 }.to_string(),
            "processor returned 2 outputs for a batch of 4"
        );
        assert_eq!(
            BatchError::QueueFull { capacity: 16 }.to_string(),
            "pending queue is full (capacity 16)"
        );
    }

    #[test]
    fn test_clone_fans_out() {
        let err = BatchError::Processing("shared".into());
        let copies = vec![err.clone(), err.clone(), err];
        assert!(copies.iter().all(|e| matches!(e, BatchError::Processing(m) if m == "shared")));
    }
}
