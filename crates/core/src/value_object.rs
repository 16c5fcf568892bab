//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// To "modify" one, build a new one. `Money` is the canonical example here:
/// two amounts of 250 cents are the same amount regardless of where they came
/// from.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
