use varmix_core::SequencingType;

/// A record shape the sort-merge can unify.
///
/// Each dataset version carries its own record shape; implementing this
/// trait is all a shape needs for [`merge`](crate::merge::merge) to work
/// over it. The merger compares records by `(position, variant_id)` only
/// and otherwise treats them as opaque.
pub trait Unify: Clone {
    /// Genomic position, the primary ordering key.
    fn position(&self) -> u32;

    /// Variant identifier, the secondary ordering key, compared bytewise.
    fn variant_id(&self) -> &str;

    /// Record that `source` contributed to this record.
    #[must_use]
    fn tag(self, source: SequencingType) -> Self;

    /// Fold `other`, a record for the same variant, into this one.
    ///
    /// Implementations must be pure and must not lose data from either
    /// side; both records' provenance carries into the result.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}
