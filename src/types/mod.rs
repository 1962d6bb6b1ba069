mod calculation;
mod condition;
mod error;
mod field;
mod rule;
mod schema;
mod state;
mod value;
mod values;

pub use calculation::Calculation;
pub use condition::{Condition, ConditionOperator};
pub use error::{SchemaError, ValidationError};
pub use field::{Field, FieldOption, FieldType, FieldValidation};
pub use rule::{ConditionMode, LogicAction, LogicRule};
pub use schema::{FormSchema, FormSettings};
pub use state::{FieldState, FieldStateMap};
pub use value::Value;
pub(crate) use value::fmt_number;
pub use values::Values;
