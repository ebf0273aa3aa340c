use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Fields cannot be blank: {}", .0.join(", "))]
    BlankFields(Vec<&'static str>),
    #[error("Invalid value for '{name}': {value}")]
    InvalidArgument { name: &'static str, value: String },
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Every field must be present and non-blank. Reports all offenders at once.
pub fn require_fields(fields: &[(&'static str, Option<&str>)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(is_blank))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Absent fields are fine (partial updates), but a present field must not be blank.
pub fn reject_blank(fields: &[(&'static str, Option<&str>)]) -> Result<(), ValidationError> {
    let blank: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.is_some_and(is_blank))
        .map(|(name, _)| *name)
        .collect();

    if blank.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::BlankFields(blank))
    }
}

/// Parse an integer query parameter. Missing or empty input yields `default`.
pub fn parse_integer(
    name: &'static str,
    raw: Option<&str>,
    default: i64,
) -> Result<i64, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidArgument {
                name,
                value: value.to_string(),
            }),
    }
}
