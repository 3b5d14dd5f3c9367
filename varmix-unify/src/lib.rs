//! Merge-aggregation of exome and genome variant summary sequences.
//!
//! Given two sequences of per-variant statistics, independently aggregated
//! from exome and genome sequencing and each sorted by
//! `(position, variant id)`, this crate produces one unified, still-sorted
//! sequence. A variant present in both inputs comes out as a single record
//! with its counts summed; a variant present in only one comes out
//! unchanged. Every output record is tagged with the sequencing types that
//! contributed to it.
//!
//! The merge is a single-pass two-pointer scan with no I/O, no re-sorting
//! and no shared state, so it is safe to call concurrently for different
//! variant batches.
//!
//! ## Quick Start
//!
//! ```rust
//! use varmix_core::{SequencingType, VariantSummary};
//! use varmix_unify::merge;
//!
//! let mut exome = VariantSummary::from_variant_id("1-100-A-C").unwrap();
//! exome.allele_count = Some(5);
//! exome.allele_number = Some(20);
//!
//! let mut genome = VariantSummary::from_variant_id("1-100-A-C").unwrap();
//! genome.allele_count = Some(3);
//! genome.allele_number = Some(10);
//!
//! let merged = merge(
//!     &[exome],
//!     &[genome],
//!     SequencingType::Exome,
//!     SequencingType::Genome,
//! );
//!
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].allele_count, Some(8));
//! assert_eq!(merged[0].allele_number, Some(30));
//! ```

/// Field-by-field combination of two records for the same variant.
///
/// See [`combine_summaries`] for the rules.
pub mod combine;

/// The two-pointer sort-merge over ordered record sequences.
///
/// See [`merge()`] for the entry point.
pub mod merge;

/// The seam between the generic merger and version-specific record shapes.
///
/// See [`Unify`] for the trait.
pub mod traits;

// re-exports
pub use self::combine::combine_summaries;
pub use self::merge::{is_merge_ordered, merge};
pub use self::traits::Unify;
