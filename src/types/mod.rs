use serde::{de::Error as _, Deserialize, Deserializer};
use std::str::FromStr;

pub mod department;
pub mod employee;
pub mod employee_department;
pub mod error;
pub mod response;

/// Keeps "field absent" (`None`) apart from "field sent as null" (`Some(None)`).
/// Use together with `#[serde(default)]`.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Required columns left unset are omitted from the INSERT, so the store
/// rejects the row instead of the handler.
pub(crate) fn set_if_present<T>(value: Option<T>) -> sea_orm::ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => sea_orm::ActiveValue::Set(v),
        None => sea_orm::ActiveValue::NotSet,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<T> {
    Number(T),
    Text(String),
}

/// Numeric column that also takes its value as a string, e.g. `"age": "30"`.
/// Text that does not parse is still a bad request.
pub(crate) fn numeric<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de> + FromStr,
    D: Deserializer<'de>,
{
    match Option::<NumberOrText<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(raw)) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a number, got {:?}", raw))),
    }
}

/// `numeric` for PUT bodies, keeping absent apart from null like `present`.
pub(crate) fn present_numeric<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de> + FromStr,
    D: Deserializer<'de>,
{
    numeric(deserializer).map(Some)
}
