use super::*;

/// Item ids and user handles that changed since the previous snapshot.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Updates {
  #[serde(deserialize_with = "deserialize_null_default")]
  pub items: HashSet<u64>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub profiles: HashSet<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_as_sets() {
    let updates = serde_json::from_str::<Updates>(
      r#"{"items":[8423305,8420805,8423305],"profiles":["thefox","mdda"]}"#,
    )
    .unwrap();

    assert_eq!(updates.items, HashSet::from([8_423_305, 8_420_805]));
    assert_eq!(
      updates.profiles,
      HashSet::from(["thefox".to_string(), "mdda".to_string()])
    );
  }
}
