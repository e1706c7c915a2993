use serde::{Deserialize, Deserializer};

/// Reads a field that the Grand Lyon feeds may send as `null`, falling back
/// to the type's default instead of failing the whole table.
///
/// Use with `#[serde(default, deserialize_with = "null_as_default")]` so that
/// missing and `null` fields behave alike.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
