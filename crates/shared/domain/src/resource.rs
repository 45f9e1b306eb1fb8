//! Resource kinds and the request body rules shared by both routers.

use std::fmt;

use serde_json::{Map, Value};

use crate::constants::*;
use crate::error::{DomainError, DomainResult};

/// The two resources exposed over HTTP.
///
/// Every per-resource difference in validation (mandatory field, message
/// texts) is answered here, so the validators themselves stay generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Post,
}

impl Resource {
    /// Field whose absence yields the "missing required field" error
    pub const fn required_field(self) -> &'static str {
        match self {
            Resource::User => "name",
            Resource::Post => "text",
        }
    }

    pub const fn missing_data_message(self) -> &'static str {
        match self {
            Resource::User => USER_MISSING_DATA,
            Resource::Post => POST_MISSING_DATA,
        }
    }

    pub const fn missing_field_message(self) -> &'static str {
        match self {
            Resource::User => USER_MISSING_NAME,
            Resource::Post => POST_MISSING_TEXT,
        }
    }

    pub const fn invalid_id_message(self) -> &'static str {
        match self {
            Resource::User => USER_INVALID_ID,
            Resource::Post => POST_INVALID_ID,
        }
    }

    pub const fn id_lookup_failed_message(self) -> &'static str {
        match self {
            Resource::User => USER_ID_LOOKUP_FAILED,
            Resource::Post => POST_ID_LOOKUP_FAILED,
        }
    }

    /// Check the shape of a create/update body.
    ///
    /// An object without keys is rejected as missing data; otherwise the
    /// mandatory field must be present with a truthy value.
    pub fn check_body(self, body: &Map<String, Value>) -> DomainResult<()> {
        if body.is_empty() {
            return Err(DomainError::MissingData(self.missing_data_message()));
        }

        match body.get(self.required_field()) {
            Some(value) if is_truthy(value) => Ok(()),
            _ => Err(DomainError::MissingField(self.missing_field_message())),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User => write!(f, "user"),
            Resource::Post => write!(f, "post"),
        }
    }
}

/// Loose truthiness of a JSON value: `null`, `false`, zero and the empty
/// string count as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
