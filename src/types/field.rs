use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::Value;

/// The closed set of input widget kinds a form can carry.
///
/// Serialized as lowercase strings (`"text"`, `"select"`, ...) to match the
/// persisted schema shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Select,
    Radio,
    Checkbox,
    Textarea,
    Date,
    Phone,
    Url,
    File,
    Signature,
    Rating,
}

impl FieldType {
    /// Choice-type fields carry an options list and validate against it.
    #[must_use]
    pub fn is_choice(self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }

    /// Fields whose values are numbers rather than text.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Number | FieldType::Rating)
    }
}

/// One entry of a choice field's options list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Optional per-field validation bounds.
///
/// `min`/`max` bound the numeric value for number-like fields and the string
/// length otherwise. `pattern` is carried for interface fidelity but enforced
/// by the rendering host, which owns regex support.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A single form input definition.
///
/// `label`, `placeholder`, and `help_text` are display-only; `hidden` and
/// `disabled` are the *static defaults* that logic rules override per
/// evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

impl Field {
    /// Minimal constructor; everything else at its default.
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            required: false,
            validation: None,
            default_value: None,
            help_text: None,
            hidden: false,
            disabled: false,
            options: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_choice_type(&self) -> bool {
        self.field_type.is_choice()
    }

    /// The value a fresh form seeds for this field: the configured
    /// `defaultValue` if any, otherwise an empty selection for checkboxes and
    /// null for everything else.
    #[must_use]
    pub fn default_value(&self) -> Value {
        match &self.default_value {
            Some(v) => v.clone(),
            None => match self.field_type {
                FieldType::Checkbox => Value::List(Vec::new()),
                _ => Value::Null,
            },
        }
    }

    /// Validate a submitted value against this field's type and bounds.
    ///
    /// Emptiness is only an error for required fields; all other checks apply
    /// to non-empty values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if value.is_empty() {
            if self.required {
                return Err(ValidationError::Required {
                    field: self.id.clone(),
                });
            }
            return Ok(());
        }

        match self.field_type {
            FieldType::Number | FieldType::Rating => self.validate_number(value),
            FieldType::Email => self.validate_email(value),
            FieldType::Url => self.validate_url(value),
            FieldType::Select | FieldType::Radio => self.validate_option(value),
            FieldType::Checkbox => self.validate_selection(value),
            _ => self.validate_text(value),
        }
    }

    fn validate_number(&self, value: &Value) -> Result<(), ValidationError> {
        let n = match value {
            Value::Number(n) => *n,
            // HTML inputs deliver numbers as strings; accept those too.
            Value::Str(s) => s.trim().parse().map_err(|_| ValidationError::NotANumber {
                field: self.id.clone(),
            })?,
            _ => {
                return Err(ValidationError::NotANumber {
                    field: self.id.clone(),
                })
            }
        };
        if let Some(v) = &self.validation {
            if let Some(min) = v.min {
                if n < min {
                    return Err(ValidationError::BelowMinimum {
                        field: self.id.clone(),
                        value: n,
                        min,
                    });
                }
            }
            if let Some(max) = v.max {
                if n > max {
                    return Err(ValidationError::AboveMaximum {
                        field: self.id.clone(),
                        value: n,
                        max,
                    });
                }
            }
        }
        Ok(())
    }

    fn validate_email(&self, value: &Value) -> Result<(), ValidationError> {
        let ok = value.as_str().is_some_and(|s| {
            s.split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
        });
        if ok {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail {
                field: self.id.clone(),
            })
        }
    }

    fn validate_url(&self, value: &Value) -> Result<(), ValidationError> {
        let ok = value
            .as_str()
            .is_some_and(|s| s.starts_with("http://") || s.starts_with("https://"));
        if ok {
            Ok(())
        } else {
            Err(ValidationError::InvalidUrl {
                field: self.id.clone(),
            })
        }
    }

    fn validate_option(&self, value: &Value) -> Result<(), ValidationError> {
        let ok = value
            .as_str()
            .is_some_and(|s| self.options.iter().any(|o| o.value == s));
        if ok {
            Ok(())
        } else {
            Err(ValidationError::UnknownOption {
                field: self.id.clone(),
            })
        }
    }

    fn validate_selection(&self, value: &Value) -> Result<(), ValidationError> {
        let Value::List(items) = value else {
            return Err(ValidationError::NotAList {
                field: self.id.clone(),
            });
        };
        let all_known = items.iter().all(|item| {
            item.as_str()
                .is_some_and(|s| self.options.iter().any(|o| o.value == s))
        });
        if all_known {
            Ok(())
        } else {
            Err(ValidationError::UnknownOption {
                field: self.id.clone(),
            })
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn validate_text(&self, value: &Value) -> Result<(), ValidationError> {
        let Some(s) = value.as_str() else {
            return Ok(());
        };
        if let Some(v) = &self.validation {
            let len = s.chars().count();
            if let Some(min) = v.min {
                if len < min as usize {
                    return Err(ValidationError::TooShort {
                        field: self.id.clone(),
                        min: min as usize,
                    });
                }
            }
            if let Some(max) = v.max {
                if len > max as usize {
                    return Err(ValidationError::TooLong {
                        field: self.id.clone(),
                        max: max as usize,
                    });
                }
            }
        }
        Ok(())
    }
}
