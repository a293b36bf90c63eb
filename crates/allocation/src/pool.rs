//! Lock-guarded batch collection for concurrent callers.
//!
//! `allocate` is a check-then-mutate sequence, so two callers racing on the
//! same batches could both pass `can_allocate` before either commits. The
//! pool serializes every allocation per SKU: each SKU partition sits behind
//! its own `Mutex`, and the partition map behind an `RwLock`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use stockwise_core::{BatchRef, DomainError, DomainResult, Sku};

use crate::allocator::{allocate, by_priority};
use crate::batch::Batch;
use crate::order_line::OrderLine;

type Partition = Arc<Mutex<Vec<Batch>>>;

/// In-memory, thread-safe collection of batches partitioned by SKU.
#[derive(Debug, Default)]
pub struct BatchPool {
    partitions: RwLock<HashMap<Sku, Partition>>,
}

impl BatchPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a batch. Fails if its reference is already registered.
    pub fn add_batch(&self, batch: Batch) -> DomainResult<()> {
        let mut partitions = self
            .partitions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let duplicate = partitions
            .values()
            .any(|p| lock(p).iter().any(|b| b.reference() == batch.reference()));
        if duplicate {
            return Err(DomainError::conflict(format!(
                "batch {} already registered",
                batch.reference()
            )));
        }

        let partition = partitions.entry(batch.sku().clone()).or_default();
        tracing::debug!(batch = %batch.reference(), sku = %batch.sku(), "batch registered");
        lock(partition).push(batch);
        Ok(())
    }

    /// Allocate `line` while holding the lock of its SKU partition.
    pub fn allocate(&self, line: &OrderLine) -> DomainResult<BatchRef> {
        let Some(partition) = self.partition(line.sku()) else {
            tracing::warn!(
                order_id = %line.order_id(),
                sku = %line.sku(),
                "no batches registered for sku"
            );
            return Err(DomainError::out_of_stock(line.sku().clone()));
        };

        let mut batches = lock(&partition);
        allocate(line, batches.iter_mut())
    }

    /// Release `line` from the batch named by `reference`.
    ///
    /// The batch must belong to the line's SKU partition; releasing a line
    /// that batch does not hold is a no-op.
    pub fn deallocate(&self, line: &OrderLine, reference: &BatchRef) -> DomainResult<()> {
        let unknown = || {
            DomainError::conflict(format!(
                "batch {reference} is not registered for sku {}",
                line.sku()
            ))
        };

        let partition = self.partition(line.sku()).ok_or_else(unknown)?;
        let mut batches = lock(&partition);
        let batch = batches
            .iter_mut()
            .find(|b| b.reference() == reference)
            .ok_or_else(unknown)?;
        batch.deallocate(line);
        Ok(())
    }

    /// Snapshot of one SKU's batches, in allocation priority order.
    pub fn batches(&self, sku: &Sku) -> Vec<Batch> {
        let Some(partition) = self.partition(sku) else {
            return Vec::new();
        };
        let mut snapshot = lock(&partition).clone();
        snapshot.sort_by(by_priority);
        snapshot
    }

    /// Snapshot of a single batch.
    pub fn get(&self, reference: &BatchRef) -> Option<Batch> {
        let partitions = self
            .partitions
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        partitions.values().find_map(|p| {
            lock(p)
                .iter()
                .find(|b| b.reference() == reference)
                .cloned()
        })
    }

    fn partition(&self, sku: &Sku) -> Option<Partition> {
        let partitions = self
            .partitions
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        partitions.get(sku).cloned()
    }
}

// A panicking holder can only interrupt a single set insert or remove, so the
// guarded batches remain consistent.
fn lock(partition: &Mutex<Vec<Batch>>) -> MutexGuard<'_, Vec<Batch>> {
    partition.lock().unwrap_or_else(PoisonError::into_inner)
}
