use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockwise_core::{BatchRef, DomainError, Entity, Sku};

use crate::order_line::OrderLine;

/// Entity: a discrete lot of purchased stock for one SKU.
///
/// A batch without an `eta` is already in a warehouse; one with an `eta`
/// arrives on that date. The only mutable state is the set of allocated
/// lines, and every derived quantity is recomputed from that set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BatchRecord", into = "BatchRecord")]
pub struct Batch {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: u64,
    eta: Option<NaiveDate>,
    allocations: HashSet<OrderLine>,
}

impl Batch {
    pub fn new(
        reference: impl Into<BatchRef>,
        sku: impl Into<Sku>,
        purchased_quantity: u64,
        eta: Option<NaiveDate>,
    ) -> Self {
        Self {
            reference: reference.into(),
            sku: sku.into(),
            purchased_quantity,
            eta,
            allocations: HashSet::new(),
        }
    }

    pub fn reference(&self) -> &BatchRef {
        &self.reference
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn eta(&self) -> Option<NaiveDate> {
        self.eta
    }

    pub fn purchased_quantity(&self) -> u64 {
        self.purchased_quantity
    }

    /// Currently allocated lines, in no particular order.
    pub fn allocations(&self) -> impl Iterator<Item = &OrderLine> {
        self.allocations.iter()
    }

    pub fn is_allocated(&self, line: &OrderLine) -> bool {
        self.allocations.contains(line)
    }

    pub fn allocated_quantity(&self) -> u64 {
        self.allocations.iter().map(OrderLine::qty).sum()
    }

    pub fn available_quantity(&self) -> u64 {
        // allocate() never lets allocated exceed purchased.
        self.purchased_quantity.saturating_sub(self.allocated_quantity())
    }

    pub fn can_allocate(&self, line: &OrderLine) -> bool {
        self.sku == *line.sku() && self.available_quantity() >= line.qty()
    }

    /// Reserve `line` against this batch.
    ///
    /// Ineligible lines (wrong SKU, not enough stock) are ignored, as are lines
    /// that are already allocated here.
    pub fn allocate(&mut self, line: &OrderLine) {
        if self.allocations.contains(line) {
            return;
        }
        if !self.can_allocate(line) {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                sku = %line.sku(),
                qty = line.qty(),
                available = self.available_quantity(),
                "ignoring ineligible allocation"
            );
            return;
        }

        self.allocations.insert(line.clone());
        tracing::debug!(
            batch = %self.reference,
            order_id = %line.order_id(),
            sku = %line.sku(),
            qty = line.qty(),
            "line allocated"
        );
    }

    /// Release `line` if it is allocated here; otherwise do nothing.
    pub fn deallocate(&mut self, line: &OrderLine) {
        if self.allocations.remove(line) {
            tracing::debug!(
                batch = %self.reference,
                order_id = %line.order_id(),
                sku = %line.sku(),
                qty = line.qty(),
                "line deallocated"
            );
        }
    }
}

impl Entity for Batch {
    type Id = BatchRef;

    fn id(&self) -> &Self::Id {
        &self.reference
    }
}

impl PartialEq for Batch {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Batch {}

impl core::hash::Hash for Batch {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

/// Wire shape of a batch handed to (or loaded from) storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct BatchRecord {
    reference: BatchRef,
    sku: Sku,
    purchased_quantity: u64,
    eta: Option<NaiveDate>,
    #[serde(default)]
    allocations: Vec<OrderLine>,
}

impl From<Batch> for BatchRecord {
    fn from(batch: Batch) -> Self {
        let mut allocations: Vec<OrderLine> = batch.allocations.into_iter().collect();
        allocations.sort();
        Self {
            reference: batch.reference,
            sku: batch.sku,
            purchased_quantity: batch.purchased_quantity,
            eta: batch.eta,
            allocations,
        }
    }
}

impl TryFrom<BatchRecord> for Batch {
    type Error = DomainError;

    fn try_from(record: BatchRecord) -> Result<Self, Self::Error> {
        let mut allocations = HashSet::with_capacity(record.allocations.len());
        let mut allocated: u64 = 0;

        for line in record.allocations {
            if *line.sku() != record.sku {
                return Err(DomainError::validation(format!(
                    "batch {} (sku {}) holds a line for sku {}",
                    record.reference,
                    record.sku,
                    line.sku()
                )));
            }
            let qty = line.qty();
            if allocations.insert(line) {
                allocated = allocated.checked_add(qty).ok_or_else(|| {
                    DomainError::validation(format!(
                        "batch {} allocated quantity overflows",
                        record.reference
                    ))
                })?;
            }
        }

        if allocated > record.purchased_quantity {
            return Err(DomainError::validation(format!(
                "batch {} allocates {} of {} purchased",
                record.reference, allocated, record.purchased_quantity
            )));
        }

        Ok(Self {
            reference: record.reference,
            sku: record.sku,
            purchased_quantity: record.purchased_quantity,
            eta: record.eta,
            allocations,
        })
    }
}
