//! Shared traits for fixed-layout arithmetic types

/// Trait for types that have a fixed size
///
/// For field elements this is the canonical encoding size. For curve points
/// it is the size of the stored coordinates.
pub trait FixedSize {
    /// Get the size in bytes
    fn size() -> usize;
}
