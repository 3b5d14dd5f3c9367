use std::fmt::{self, Display};

/// One of the two independently aggregated data sources describing the
/// same underlying variant catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SequencingType {
    Exome,
    Genome,
}

impl Display for SequencingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequencingType::Exome => write!(f, "exome"),
            SequencingType::Genome => write!(f, "genome"),
        }
    }
}

/// The set of sequencing types that contributed to a record.
///
/// Records coming out of the fetch layer start empty; the merge tags every
/// record it emits, so downstream consumers may assume a non-empty set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Provenance {
    exome: bool,
    genome: bool,
}

impl Provenance {
    pub const EMPTY: Provenance = Provenance {
        exome: false,
        genome: false,
    };

    pub fn single(source: SequencingType) -> Provenance {
        Provenance::EMPTY.with(source)
    }

    pub fn with(mut self, source: SequencingType) -> Provenance {
        match source {
            SequencingType::Exome => self.exome = true,
            SequencingType::Genome => self.genome = true,
        }
        self
    }

    pub fn union(self, other: Provenance) -> Provenance {
        Provenance {
            exome: self.exome || other.exome,
            genome: self.genome || other.genome,
        }
    }

    pub fn contains(&self, source: SequencingType) -> bool {
        match source {
            SequencingType::Exome => self.exome,
            SequencingType::Genome => self.genome,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.exome && !self.genome
    }

    /// The contributing sequencing types, exome first.
    pub fn sources(&self) -> impl Iterator<Item = SequencingType> + '_ {
        [
            (self.exome, SequencingType::Exome),
            (self.genome, SequencingType::Genome),
        ]
        .into_iter()
        .filter_map(|(present, source)| present.then_some(source))
    }
}

impl Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for source in self.sources() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", source)?;
            first = false;
        }
        Ok(())
    }
}
