//! Search query validation
//!
//! The search endpoint accepts exactly `{username, age, gender}` as query
//! parameters. Validation works on the raw key/value pairs rather than a
//! deserialized struct so that an unrecognized key is a hard failure
//! instead of being silently dropped by the deserializer.

use crate::core::error::ValidationError;
use crate::core::filter::UserFilter;
use crate::core::user::Gender;
use crate::core::validation::validators;

/// The closed set of accepted search parameters
const ALLOWED_FIELDS: [&str; 3] = ["username", "age", "gender"];

/// Validate raw query pairs into a [`UserFilter`]
///
/// All three parameters are required. Any key outside the accepted set
/// fails validation regardless of the other values; `age` must be a
/// strictly positive integer and `gender` a valid enum value. When a key
/// repeats, the last occurrence wins.
pub fn parse_search_query(pairs: &[(String, String)]) -> Result<UserFilter, ValidationError> {
    for (key, _) in pairs {
        if !ALLOWED_FIELDS.contains(&key.as_str()) {
            return Err(ValidationError::UnknownField { field: key.clone() });
        }
    }

    let mut username = None;
    let mut age_raw = None;
    let mut gender_raw = None;
    for (key, value) in pairs {
        match key.as_str() {
            "username" => username = Some(value.clone()),
            "age" => age_raw = Some(value.clone()),
            "gender" => gender_raw = Some(value.clone()),
            _ => {}
        }
    }

    let username = username.ok_or_else(|| ValidationError::MissingField {
        field: "username".to_string(),
    })?;
    let age_raw = age_raw.ok_or_else(|| ValidationError::MissingField {
        field: "age".to_string(),
    })?;
    let gender_raw = gender_raw.ok_or_else(|| ValidationError::MissingField {
        field: "gender".to_string(),
    })?;

    let age: i64 = age_raw
        .parse()
        .map_err(|_| ValidationError::Field {
            field: "age".to_string(),
            message: format!("must be an integer (got '{}')", age_raw),
        })?;
    validators::positive("age", age)?;

    let gender = Gender::parse(&gender_raw).ok_or_else(|| ValidationError::Field {
        field: "gender".to_string(),
        message: format!("must be one of 'male' or 'female' (got '{}')", gender_raw),
    })?;

    Ok(UserFilter {
        username,
        age,
        gender,
    })
}
