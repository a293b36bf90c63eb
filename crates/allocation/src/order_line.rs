use serde::{Deserialize, Serialize};

use stockwise_core::{OrderId, Sku, ValueObject};

/// A customer's request for a quantity of one SKU.
///
/// Immutable; two lines with the same order, SKU and quantity are equal and
/// hash identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderLine {
    order_id: OrderId,
    sku: Sku,
    qty: u64,
}

impl OrderLine {
    pub fn new(order_id: impl Into<OrderId>, sku: impl Into<Sku>, qty: u64) -> Self {
        Self {
            order_id: order_id.into(),
            sku: sku.into(),
            qty,
        }
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn qty(&self) -> u64 {
        self.qty
    }
}

impl ValueObject for OrderLine {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lines_with_identical_fields_are_equal() {
        let a = OrderLine::new("order-ref", "SMALL-TABLE", 2);
        let b = OrderLine::new("order-ref", "SMALL-TABLE", 2);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn any_differing_field_breaks_equality() {
        let base = OrderLine::new("o1", "LAMP", 2);
        assert_ne!(base, OrderLine::new("o2", "LAMP", 2));
        assert_ne!(base, OrderLine::new("o1", "DESK", 2));
        assert_ne!(base, OrderLine::new("o1", "LAMP", 3));
    }

    #[test]
    fn serializes_as_flat_record() {
        let line = OrderLine::new("o1", "LAMP", 2);
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "order_id": "o1", "sku": "LAMP", "qty": 2 })
        );
    }
}
