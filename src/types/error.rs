use thiserror::Error;

/// Authoring-time schema validation findings.
///
/// The evaluation engine itself tolerates all of these silently (a broken
/// rule must never break a live form); this error exists for schema-authoring
/// tooling that wants strictness before saving.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate field id '{id}'")]
    DuplicateFieldId { id: String },

    #[error("choice field '{id}' has no options")]
    MissingOptions { id: String },

    #[error("rule '{rule}' targets unknown field '{field}'")]
    UnknownRuleTarget { rule: String, field: String },

    #[error("rule '{rule}' condition references unknown field '{field}'")]
    UnknownConditionField { rule: String, field: String },

    #[error("calculation '{calculation}' targets unknown field '{field}'")]
    UnknownCalculationTarget { calculation: String, field: String },

    #[error("calculation '{calculation}' formula references unknown field '{field}'")]
    UnknownFormulaRef { calculation: String, field: String },

    #[error("calculation '{calculation}' references '{field}' missing from sourceFieldIds")]
    UndeclaredDependency { calculation: String, field: String },
}

/// Per-field value validation failures, produced by
/// [`Field::validate`](super::Field::validate).
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("field '{field}' is required")]
    Required { field: String },

    #[error("field '{field}' expects a numeric value")]
    NotANumber { field: String },

    #[error("field '{field}' value {value} is below the minimum {min}")]
    BelowMinimum { field: String, value: f64, min: f64 },

    #[error("field '{field}' value {value} is above the maximum {max}")]
    AboveMaximum { field: String, value: f64, max: f64 },

    #[error("field '{field}' value is not one of the configured options")]
    UnknownOption { field: String },

    #[error("field '{field}' expects a valid email address")]
    InvalidEmail { field: String },

    #[error("field '{field}' expects an absolute http(s) URL")]
    InvalidUrl { field: String },

    #[error("field '{field}' expects a list of selected options")]
    NotAList { field: String },

    #[error("field '{field}' is shorter than the minimum length {min}")]
    TooShort { field: String, min: usize },

    #[error("field '{field}' is longer than the maximum length {max}")]
    TooLong { field: String, max: usize },
}
