//! Batching machinery: the pending queue, the collection policy, the
//! worker loop, and the handle that owns the worker task.
//!
//! * [`queue`] - FIFO handoff between many submitters and the single
//!   worker consumer.
//! * [`batch`] - batch formation (block for the first item, greedy
//!   non-blocking drain up to the cap) and the processing loop.
//! * [`worker`] - spawning and cooperative shutdown of the loop task.

pub mod batch;
pub mod queue;
pub mod worker;
