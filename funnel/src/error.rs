use thiserror::Error;

use crate::lead::LeadField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeadError {
    /// One or more fields were blank after trimming. `missing` is in form order.
    #[error("Please fill in all fields.")]
    MissingFields { missing: Vec<LeadField> },
}

impl LeadError {
    pub fn missing_fields(&self) -> &[LeadField] {
        match self {
            LeadError::MissingFields { missing } => missing,
        }
    }
}
