use fxhash::FxHashMap;

use varmix_core::{PopulationCount, SequencingType, VariantSummary};

use crate::traits::Unify;

impl Unify for VariantSummary {
    #[inline]
    fn position(&self) -> u32 {
        self.position
    }

    #[inline]
    fn variant_id(&self) -> &str {
        &self.variant_id
    }

    fn tag(mut self, source: SequencingType) -> Self {
        self.provenance = self.provenance.with(source);
        self
    }

    fn combine(self, other: Self) -> Self {
        combine_summaries(self, other)
    }
}

/// Combine two summaries known to describe the same variant.
///
/// Count fields are summed null-safely (absent counts as zero, so the
/// result is always present). Filter flags are concatenated in `a`-then-`b`
/// order with no deduplication; downstream consumers may rely on flag
/// counts, so duplicates are kept on purpose. Populations are matched by
/// id, never by array position. Identity fields come from `a`; the two
/// sources are presumed to agree on them.
pub fn combine_summaries(a: VariantSummary, b: VariantSummary) -> VariantSummary {
    debug_assert_eq!(
        a.variant_id, b.variant_id,
        "combine_summaries called on records for different variants"
    );

    let mut filters = a.filters;
    filters.extend(b.filters);

    VariantSummary {
        chrom: a.chrom,
        position: a.position,
        variant_id: a.variant_id,
        ref_allele: a.ref_allele,
        alt_allele: a.alt_allele,
        allele_count: null_safe_sum(a.allele_count, b.allele_count),
        allele_number: null_safe_sum(a.allele_number, b.allele_number),
        homozygote_count: null_safe_sum(a.homozygote_count, b.homozygote_count),
        hemizygote_count: null_safe_sum(a.hemizygote_count, b.hemizygote_count),
        filters,
        populations: combine_populations(a.populations, b.populations),
        provenance: a.provenance.union(b.provenance),
    }
}

/// Absent means "not observed", so it sums as zero. The output is always
/// present; absent and present-with-zero are indistinguishable after a
/// combine.
#[inline]
fn null_safe_sum(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    Some(a.unwrap_or(0) + b.unwrap_or(0))
}

/// Union-with-sum of two population breakdowns, matched by population id.
///
/// Output order is `a`'s ids in `a`'s order, then ids unique to `b` in
/// `b`'s order. An id present on only one side keeps its counts as-is.
fn combine_populations(
    a: Vec<PopulationCount>,
    b: Vec<PopulationCount>,
) -> Vec<PopulationCount> {
    let b_index: FxHashMap<String, usize> = b
        .iter()
        .enumerate()
        .map(|(idx, pop)| (pop.id.clone(), idx))
        .collect();
    let mut b_slots: Vec<Option<PopulationCount>> = b.into_iter().map(Some).collect();

    let mut combined = Vec::with_capacity(a.len() + b_slots.len());
    for pop_a in a {
        match b_index.get(pop_a.id.as_str()).and_then(|&idx| b_slots[idx].take()) {
            Some(pop_b) => combined.push(sum_population(pop_a, pop_b)),
            None => combined.push(pop_a),
        }
    }
    combined.extend(b_slots.into_iter().flatten());
    combined
}

fn sum_population(a: PopulationCount, b: PopulationCount) -> PopulationCount {
    PopulationCount {
        id: a.id,
        allele_count: a.allele_count + b.allele_count,
        allele_number: a.allele_number + b.allele_number,
        homozygote_count: a.homozygote_count + b.homozygote_count,
        hemizygote_count: a.hemizygote_count + b.hemizygote_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    use varmix_core::Provenance;

    fn summary(id: &str, ac: Option<u32>, an: Option<u32>) -> VariantSummary {
        let mut summary = VariantSummary::from_variant_id(id).unwrap();
        summary.allele_count = ac;
        summary.allele_number = an;
        summary
    }

    fn population(id: &str, ac: u32, an: u32) -> PopulationCount {
        PopulationCount {
            allele_count: ac,
            allele_number: an,
            ..PopulationCount::new(id)
        }
    }

    #[fixture]
    fn exome() -> VariantSummary {
        let mut exome = summary("1-100-A-C", Some(5), Some(20));
        exome.homozygote_count = Some(1);
        exome.filters = vec!["RF".to_string()];
        exome.populations = vec![population("afr", 1, 10)];
        exome.provenance = Provenance::single(SequencingType::Exome);
        exome
    }

    #[fixture]
    fn genome() -> VariantSummary {
        let mut genome = summary("1-100-A-C", Some(3), Some(10));
        genome.homozygote_count = Some(0);
        genome.filters = vec!["RF".to_string(), "AC0".to_string()];
        genome.populations = vec![population("afr", 2, 20), population("eas", 1, 5)];
        genome.provenance = Provenance::single(SequencingType::Genome);
        genome
    }

    #[rstest]
    fn test_counts_sum(exome: VariantSummary, genome: VariantSummary) {
        let combined = combine_summaries(exome, genome);

        assert_eq!(combined.allele_count, Some(8));
        assert_eq!(combined.allele_number, Some(30));
        assert_eq!(combined.homozygote_count, Some(1));
        // absent on both sides comes out as zero, not absent
        assert_eq!(combined.hemizygote_count, Some(0));
    }

    #[rstest]
    fn test_null_safe_sum_one_side_absent(exome: VariantSummary) {
        let genome = summary("1-100-A-C", None, Some(10));
        let combined = combine_summaries(exome, genome);

        assert_eq!(combined.allele_count, Some(5));
        assert_eq!(combined.allele_number, Some(30));
    }

    #[rstest]
    fn test_filters_concatenate_without_dedup(exome: VariantSummary, genome: VariantSummary) {
        let combined = combine_summaries(exome, genome);

        // "RF" appears twice: concatenation, not set union
        assert_eq!(combined.filters, vec!["RF", "RF", "AC0"]);
    }

    #[rstest]
    fn test_populations_match_by_id(exome: VariantSummary, genome: VariantSummary) {
        let combined = combine_summaries(exome, genome);

        assert_eq!(
            combined.populations,
            vec![population("afr", 3, 30), population("eas", 1, 5)]
        );
    }

    #[rstest]
    fn test_population_order_a_first_then_b_unique(genome: VariantSummary) {
        let mut exome = summary("1-100-A-C", None, None);
        exome.populations = vec![population("nfe", 4, 40), population("afr", 1, 10)];

        let combined = combine_summaries(exome, genome);
        let ids: Vec<&str> = combined.populations.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["nfe", "afr", "eas"]);
    }

    #[rstest]
    fn test_provenance_union(exome: VariantSummary, genome: VariantSummary) {
        let combined = combine_summaries(exome, genome);

        assert_eq!(combined.provenance.contains(SequencingType::Exome), true);
        assert_eq!(combined.provenance.contains(SequencingType::Genome), true);
    }

    #[rstest]
    fn test_identity_fields_from_a(exome: VariantSummary, genome: VariantSummary) {
        let combined = combine_summaries(exome.clone(), genome);

        assert_eq!(combined.chrom, exome.chrom);
        assert_eq!(combined.position, exome.position);
        assert_eq!(combined.variant_id, exome.variant_id);
        assert_eq!(combined.ref_allele, exome.ref_allele);
        assert_eq!(combined.alt_allele, exome.alt_allele);
    }

    #[rstest]
    fn test_inputs_not_required_to_be_tagged(exome: VariantSummary) {
        // combine is pure over whatever provenance the inputs carry
        let mut untagged = exome.clone();
        untagged.provenance = Provenance::EMPTY;

        let combined = combine_summaries(untagged, exome);
        assert_eq!(combined.provenance, Provenance::single(SequencingType::Exome));
    }
}
