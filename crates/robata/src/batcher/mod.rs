mod batcher;
mod core_trait;
mod item;

pub use batcher::BatchInference;
pub use core_trait::{Batcher, Processor, ProcessorError};
pub use item::Item;
