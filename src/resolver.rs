use super::*;

/// Decodes any non-item payload. The API answers `null` for ids it does not
/// know, which becomes [`Error::NotFound`].
pub(crate) fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T> {
  serde_json::from_slice::<Option<T>>(payload)?.ok_or(Error::NotFound)
}

/// Decodes a payload into the full superset record without narrowing it.
pub fn decode_generic(payload: &[u8]) -> Result<GenericItem> {
  decode(payload)
}

/// Decodes a payload into the variant its `type` field names.
///
/// The payload is decoded once into a [`GenericItem`] and then narrowed with
/// [`GenericItem::to_item`], so both entry points agree on every input.
/// Types the API does not document, along with a missing, `null` or empty
/// `type`, fail with [`Error::UnknownItemType`].
pub fn resolve(payload: &[u8]) -> Result<Item> {
  decode_generic(payload)?.to_item()
}
