use std::cmp::Ordering;
use std::str::FromStr;

use crate::errors::VariantIdError;
use crate::models::population::PopulationCount;
use crate::models::provenance::Provenance;
use crate::models::variant_id::VariantId;

///
/// The merge ordering key: position ascending, then variant id by byte
/// comparison. Both input sequences to the merge must already be sorted by
/// this key; nothing in this crate re-sorts.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantKey {
    pub position: u32,
    pub variant_id: String,
}

impl Ord for VariantKey {
    fn cmp(&self, other: &VariantKey) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| self.variant_id.cmp(&other.variant_id))
    }
}

impl PartialOrd for VariantKey {
    fn partial_cmp(&self, other: &VariantKey) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// Summary statistics for one variant within one sequencing type, as
/// returned by the fetch layer.
///
/// `None` in a count field means "not observed in this sequencing type",
/// never "observed with an unknown value". Combination treats absent as
/// zero, so absent and present-with-zero are indistinguishable downstream
/// of a merge; this is a known modeling limitation, carried through
/// unchanged.
///
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantSummary {
    pub chrom: String,
    pub position: u32,
    pub variant_id: String,
    pub ref_allele: String,
    pub alt_allele: String,

    pub allele_count: Option<u32>,
    pub allele_number: Option<u32>,
    pub homozygote_count: Option<u32>,
    pub hemizygote_count: Option<u32>,

    /// Filter flags in reported order. Duplicates are permitted: combining
    /// two records concatenates their flag lists without deduplication.
    pub filters: Vec<String>,
    /// Per-ancestry-group breakdowns, ids unique within one record.
    pub populations: Vec<PopulationCount>,
    pub provenance: Provenance,
}

impl VariantSummary {
    ///
    /// An empty summary for the site identified by a `chrom-pos-ref-alt`
    /// variant id, with all counts absent.
    ///
    pub fn from_variant_id(id: &str) -> Result<VariantSummary, VariantIdError> {
        let parsed = VariantId::from_str(id)?;
        Ok(VariantSummary {
            chrom: parsed.chrom,
            position: parsed.position,
            variant_id: id.to_string(),
            ref_allele: parsed.ref_allele,
            alt_allele: parsed.alt_allele,
            allele_count: None,
            allele_number: None,
            homozygote_count: None,
            hemizygote_count: None,
            filters: Vec::new(),
            populations: Vec::new(),
            provenance: Provenance::EMPTY,
        })
    }

    pub fn key(&self) -> VariantKey {
        VariantKey {
            position: self.position,
            variant_id: self.variant_id.clone(),
        }
    }

    ///
    /// Overall alternate allele frequency, `None` when the allele number is
    /// absent or zero.
    ///
    pub fn allele_frequency(&self) -> Option<f64> {
        match (self.allele_count, self.allele_number) {
            (Some(ac), Some(an)) if an > 0 => Some(f64::from(ac) / f64::from(an)),
            _ => None,
        }
    }
}
