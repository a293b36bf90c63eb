//! Allocation domain module.
//!
//! Assigns order lines to the most appropriate batch of stock. Everything
//! here is deterministic, in-memory domain logic (no IO, no HTTP, no storage).

pub mod allocator;
pub mod batch;
pub mod order_line;
pub mod pool;

pub use allocator::{allocate, by_priority};
pub use batch::Batch;
pub use order_line::OrderLine;
pub use pool::BatchPool;
