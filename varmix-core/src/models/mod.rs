pub mod population;
pub mod provenance;
pub mod variant;
pub mod variant_id;

// re-export for cleaner imports
pub use self::population::PopulationCount;
pub use self::provenance::{Provenance, SequencingType};
pub use self::variant::{VariantKey, VariantSummary};
pub use self::variant_id::VariantId;
