mod pill;
mod queue_item;

pub(crate) use pill::Pill;
pub(crate) use queue_item::QueueItem;
