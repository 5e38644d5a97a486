use std::collections::BTreeMap;

/// Kind of a field-level validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    InvalidDate,
    PastDate,
}

impl ErrorKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            ErrorKind::Required => "react.default.error.requiredField.label",
            ErrorKind::InvalidDate => "react.stockMovement.error.invalidDate.label",
            ErrorKind::PastDate => "react.stockMovement.error.pastDate.label",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::Required => "This field is required",
            ErrorKind::InvalidDate => "Date is before the minimum allowed date",
            ErrorKind::PastDate => "Date cannot be earlier than the shipment date",
        }
    }
}

/// Errors keyed by field path. Empty means valid.
pub type FieldErrors = BTreeMap<String, ErrorKind>;
