use std::result;

use serde::de::{Deserialize, Deserializer};

// An explicit `null` decodes to `T::default()`, same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
