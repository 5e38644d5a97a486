use serde::{Deserialize, Deserializer};

/// `null` reads as the type's default, like a missing key does with
/// `#[serde(default)]`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
