//! # Robata
//!
//! An asynchronous micro-batching request scheduler.
//!
//! ## Overview
//!
//! Client requests arrive one at a time, but downstream processing (an
//! inference call, typically) is far more efficient when invoked on a
//! batch of inputs. Robata accepts individual submissions from any number
//! of concurrent tasks, accumulates them into bounded batches, dispatches
//! each batch to a processing function on a single dedicated worker, and
//! wakes each original caller with exactly its own result - without
//! blocking the caller's task while it waits.
//!
//! Key components include:
//!
//! - A thread-safe FIFO handoff between many producers and the one worker
//! - A demand-driven batch formation policy: block for the first item,
//!   then drain greedily up to the configured cap, with no timing window
//! - A oneshot result bridge that completes each caller's pending future
//!   from the worker's task, exactly once
//! - Failure fan-out: a processing error resolves every caller in the
//!   batch instead of leaving anyone waiting forever
//!
//! ## Usage
//!
//! Implement [`Processor`] for whatever does the batch work, construct a
//! [`BatchInference`] with a [`BatchConfig`], and call
//! [`submit`](BatchInference::submit) from as many tasks as you like:
//!
//! ```ignore
//! use robata::{BatchConfig, BatchInference, Processor, ProcessorError};
//!
//! struct Model;
//!
//! #[async_trait::async_trait]
//! impl Processor<String, String> for Model {
//!     async fn process(&self, inputs: Vec<String>) -> Result<Vec<String>, ProcessorError> {
//!         Ok(inputs.into_iter().map(|s| format!("{s}-result")).collect())
//!     }
//! }
//!
//! # async fn demo() {
//! let batcher = BatchInference::new(Model, BatchConfig::new(8));
//! let out = batcher.submit("hello".to_string()).await.unwrap();
//! assert_eq!(out, "hello-result");
//! # }
//! ```
//!
//! ## Batching behavior
//!
//! Batch size is demand-driven: under light load batches are size 1 (the
//! greedy drain after the first item finds nothing), under heavy
//! concurrent load they approach `max_batch_size`. Outputs are paired with
//! waiting callers positionally, and batches complete in formation order
//! because there is exactly one worker.
//!
//! The pending queue is unbounded by default, matching the scheduler's
//! original design; [`BatchConfig::with_queue_capacity`] turns on
//! reject-when-full backpressure.

mod communication;
mod config;
mod core;
mod error;

pub mod batcher;

pub use batcher::{BatchInference, Batcher, Item, Processor, ProcessorError};
pub use config::BatchConfig;
pub use error::BatchError;
