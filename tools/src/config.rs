// Reading theme configurations written in Hjson.

use anyhow::{Context, Result};
use serde_hjson::Value::{self, *};
use theme_shades::ThemeConfig;

/// Convert an Hjson value into the equivalent JSON value.  Floats that
/// JSON cannot represent (NaN, infinities) become `null`.
pub(crate) fn to_json(v: &Value) -> serde_json::Value {
    match v {
        Null => serde_json::Value::Null,
        Bool(b) => serde_json::Value::Bool(*b),
        I64(i) => serde_json::Value::from(*i),
        U64(u) => serde_json::Value::from(*u),
        F64(f) => serde_json::Number::from_f64(*f)
            .map_or(serde_json::Value::Null, serde_json::Value::Number),
        String(s) => serde_json::Value::String(s.clone()),
        Array(a) => serde_json::Value::Array(a.iter().map(to_json).collect()),
        Object(m) => serde_json::Value::Object(
            m.iter().map(|(k, v)| (k.clone(), to_json(v))).collect()),
    }
}

/// Parse the Hjson text of a theme configuration.
pub(crate) fn parse_config(text: &str) -> Result<ThemeConfig> {
    let hjson: Value = serde_hjson::from_str(text)
        .context("not an Hjson document")?;
    Ok(ThemeConfig::from_value(to_json(&hjson))?)
}
