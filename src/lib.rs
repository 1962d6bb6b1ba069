mod error;
mod evaluate;
mod formula;
mod types;
mod validate;

pub use error::FormError;
pub use evaluate::{compute_field_states, evaluate_condition, resolve_rule};
pub use formula::{compute_derived_values, evaluate_formula, parse_formula};
pub use types::{
    Calculation, Condition, ConditionMode, ConditionOperator, Field, FieldOption, FieldState,
    FieldStateMap, FieldType, FieldValidation, FormSchema, FormSettings, LogicAction, LogicRule,
    SchemaError, ValidationError, Value, Values,
};
pub use validate::validate_schema;
