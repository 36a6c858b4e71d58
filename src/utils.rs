use super::*;

/// Reads an explicit `null` as the field's zero value, the same as if the
/// field were absent.
pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn encode_path_segment(segment: &str) -> String {
  url::form_urlencoded::byte_serialize(segment.as_bytes()).collect()
}
