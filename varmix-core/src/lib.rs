//! Core data model for varmix: variant summary records aggregated per
//! sequencing type (exome or genome), ready to be unified into a single
//! browser-facing sequence.
//!
//! This crate holds only the record shapes and their identity/ordering
//! rules. The merge algorithm itself lives in `varmix-unify`; everything
//! here is plain in-memory data with no I/O.

pub mod errors;
pub mod models;

pub use errors::VariantIdError;
pub use models::population::PopulationCount;
pub use models::provenance::{Provenance, SequencingType};
pub use models::variant::{VariantKey, VariantSummary};
pub use models::variant_id::VariantId;
