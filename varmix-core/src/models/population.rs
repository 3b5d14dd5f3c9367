///
/// Count statistics for one ancestry group within a single variant record.
///
/// Within one [`VariantSummary`](super::variant::VariantSummary) the `id`
/// values are unique; cross-record combination matches by `id`.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationCount {
    pub id: String,
    pub allele_count: u32,
    pub allele_number: u32,
    pub homozygote_count: u32,
    pub hemizygote_count: u32,
}

impl PopulationCount {
    pub fn new(id: impl Into<String>) -> PopulationCount {
        PopulationCount {
            id: id.into(),
            allele_count: 0,
            allele_number: 0,
            homozygote_count: 0,
            hemizygote_count: 0,
        }
    }

    ///
    /// Alternate allele frequency for this group, `None` when no alleles
    /// were observed.
    ///
    pub fn allele_frequency(&self) -> Option<f64> {
        if self.allele_number == 0 {
            None
        } else {
            Some(f64::from(self.allele_count) / f64::from(self.allele_number))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_allele_frequency() {
        let pop = PopulationCount {
            allele_count: 3,
            allele_number: 12,
            ..PopulationCount::new("afr")
        };
        assert_eq!(pop.allele_frequency(), Some(0.25));
        assert_eq!(PopulationCount::new("eas").allele_frequency(), None);
    }
}
