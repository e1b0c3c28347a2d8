//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by the value
//! they represent, so two value objects representing the same value are equal
//! even when they are built differently.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**.
///
/// ## Immutability
///
/// Once created, a value object never changes. Every "modifying" operation
/// returns a new instance, which makes instances safe to share across threads
/// and to hold in process-wide statics.
///
/// ## Equality
///
/// `PartialEq` compares what the object *means*, not how it is laid out in
/// memory. For a cash amount that means the total value: one 5.00 note is
/// equal to five 1.00 notes. Implementors that also implement `Hash` must
/// hash the same representation they compare.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values are copied, never shared mutably
/// - **PartialEq**: compared by value
/// - **Debug**: debuggable (helpful for logging, testing)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Amount {
///     parts: Vec<(u32, u32)>,
/// }
///
/// impl PartialEq for Amount {
///     fn eq(&self, other: &Self) -> bool {
///         self.total() == other.total()
///     }
/// }
///
/// impl ValueObject for Amount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
