//! First-fit-by-priority allocation across a collection of batches.

use core::cmp::Ordering;

use stockwise_core::{BatchRef, DomainError, DomainResult};

use crate::batch::Batch;
use crate::order_line::OrderLine;

/// Allocation priority between two batches.
///
/// In-warehouse stock (no `eta`) ranks ahead of any shipment; shipments rank
/// by arrival date. Two in-warehouse batches compare `Equal`, so a stable sort
/// keeps their input order.
pub fn by_priority(a: &Batch, b: &Batch) -> Ordering {
    match (a.eta(), b.eta()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

/// Allocate `line` to the highest-priority batch that can take it.
///
/// Exactly one batch is mutated on success and its reference returned. When
/// no batch qualifies (unknown SKU or not enough stock anywhere) nothing is
/// mutated and `OutOfStock` is returned. A line is never split across
/// batches.
pub fn allocate<'a, I>(line: &OrderLine, batches: I) -> DomainResult<BatchRef>
where
    I: IntoIterator<Item = &'a mut Batch>,
{
    let mut candidates: Vec<&'a mut Batch> = batches.into_iter().collect();
    candidates.sort_by(|a, b| by_priority(a, b));

    match candidates.into_iter().find(|batch| batch.can_allocate(line)) {
        Some(batch) => {
            batch.allocate(line);
            tracing::debug!(
                batch = %batch.reference(),
                order_id = %line.order_id(),
                sku = %line.sku(),
                qty = line.qty(),
                "allocation committed"
            );
            Ok(batch.reference().clone())
        }
        None => {
            tracing::warn!(
                order_id = %line.order_id(),
                sku = %line.sku(),
                qty = line.qty(),
                "no batch can satisfy order line"
            );
            Err(DomainError::out_of_stock(line.sku().clone()))
        }
    }
}
