use std::collections::BTreeMap;

use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny};

/// Decode `null` the same way as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any JSON value, reduced to what truthiness needs.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<IgnoredAny>),
    Object(BTreeMap<String, IgnoredAny>),
}

impl Flag {
    fn is_truthy(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Number(value) => *value != 0.0 && !value.is_nan(),
            Flag::Text(value) => !value.is_empty(),
            Flag::List(_) | Flag::Object(_) => true,
        }
    }
}

/// Decode any JSON value into its truthiness.
///
/// `false`, `null`, `0`, `NaN` and `""` are falsy; every other value,
/// including empty arrays and objects, is truthy.
pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Flag> = Option::deserialize(deserializer)?;
    Ok(raw.as_ref().is_some_and(Flag::is_truthy))
}
