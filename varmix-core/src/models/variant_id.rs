use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::VariantIdError;

///
/// A variant identifier in `chrom-pos-ref-alt` form (e.g. `1-55516888-G-GA`),
/// parsed into its four components.
///
/// The merge core compares ids as opaque byte strings and never parses them;
/// this type exists for the record constructors and for callers that need
/// the components back out.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantId {
    pub chrom: String,
    pub position: u32,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl FromStr for VariantId {
    type Err = VariantIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('-').collect();
        if fields.len() != 4 {
            return Err(VariantIdError::WrongFieldCount {
                id: s.to_string(),
                found: fields.len(),
            });
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(VariantIdError::EmptyField(s.to_string()));
        }
        let position = fields[1]
            .parse::<u32>()
            .map_err(|_| VariantIdError::InvalidPosition(s.to_string()))?;

        Ok(VariantId {
            chrom: fields[0].to_string(),
            position,
            ref_allele: fields[2].to_string(),
            alt_allele: fields[3].to_string(),
        })
    }
}

impl Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.chrom, self.position, self.ref_allele, self.alt_allele
        )
    }
}
