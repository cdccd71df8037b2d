//! Declarative validation schema for user records.
//!
//! The schema is the single place that knows the complete shape and
//! constraint set of a registration. It consumes a raw
//! [`UserDraft`](crate::user::UserDraft) and produces either a typed
//! [`UserRecord`](crate::user::UserRecord) or a field-keyed error list.

mod model;
mod rules;

pub use model::{FieldError, RuleCode, ValidationErrors};
pub use rules::{MIN_AGE_YEARS, MIN_PASSWORD_LEN, validate, validate_at, validate_login};
