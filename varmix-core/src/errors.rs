use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VariantIdError {
    #[error("Expected 4 dash-separated fields (chrom-pos-ref-alt), found {found} in: {id}")]
    WrongFieldCount { id: String, found: usize },

    #[error("Can't parse position in variant id: {0}")]
    InvalidPosition(String),

    #[error("Empty field in variant id: {0}")]
    EmptyField(String),
}
