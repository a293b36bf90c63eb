//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are
//! interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (an order line for 10 lamps on order
///   `o1` is equal to any other such line)
/// - **Entity**: has identity (a batch stays the same batch while its
///   allocations change)
///
/// Value objects are immutable: to "modify" one, build a new one. The
/// `Eq + Hash` bounds let them live in sets keyed by their full value.
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
