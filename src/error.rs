use thiserror::Error;

/// Errors in the shape of a palette or theme configuration.
///
/// Colors that cannot be recognized are not errors: they are dropped
/// from the output.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config should be an object, found {0}")]
    NotAnObject(&'static str),
    #[error("rem factor must be a positive number, got {0}")]
    InvalidRemFactor(f64),
    #[error("invalid theme config: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Name of the JSON type of `v`, for error messages.
pub(crate) fn json_type(v: &serde_json::Value) -> &'static str {
    use serde_json::Value::*;
    match v {
        Null => "null",
        Bool(_) => "a boolean",
        Number(_) => "a number",
        String(_) => "a string",
        Array(_) => "an array",
        Object(_) => "an object",
    }
}
