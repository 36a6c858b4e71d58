use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct User {
  pub about: Option<String>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub created: Timestamp,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub delay: u64,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub id: String,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub karma: i64,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub submitted: Vec<u64>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_profile() {
    let user = serde_json::from_str::<User>(
      r#"{
        "about": "This is a test",
        "created": 1173923446,
        "delay": 0,
        "id": "jl",
        "karma": 2937,
        "submitted": [8265435, 8168423, 8090946]
      }"#,
    )
    .unwrap();

    assert_eq!(user.id, "jl");
    assert_eq!(user.about.as_deref(), Some("This is a test"));
    assert_eq!(user.created.seconds(), 1_173_923_446);
    assert_eq!(user.created.datetime().year(), 2007);
    assert_eq!(user.karma, 2937);
    assert_eq!(user.submitted, vec![8_265_435, 8_168_423, 8_090_946]);
  }

  #[test]
  fn missing_optional_fields_default() {
    let user =
      serde_json::from_str::<User>(r#"{"id":"new","created":0}"#).unwrap();

    assert_eq!(user.about, None);
    assert_eq!(user.delay, 0);
    assert!(user.submitted.is_empty());
  }

  #[test]
  fn null_fields_default() {
    let user = serde_json::from_str::<User>(
      r#"{"id":"new","created":null,"karma":null,"submitted":null}"#,
    )
    .unwrap();

    assert_eq!(user.created, Timestamp::default());
    assert_eq!(user.karma, 0);
    assert!(user.submitted.is_empty());
  }
}
