use super::*;

/// A reply. Only built from a [`GenericItem`] whose `type` is checked, so it
/// serializes its discriminator but never decodes one.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "comment")]
pub struct Comment {
  pub by: Option<String>,
  pub id: u64,
  pub kids: Vec<u64>,
  pub parent: u64,
  pub text: Option<String>,
  pub time: Timestamp,
}

impl TryFrom<&GenericItem> for Comment {
  type Error = Error;

  fn try_from(item: &GenericItem) -> Result<Self> {
    if item.r#type != ItemKind::Comment {
      return Err(Error::TypeMismatch {
        actual: item.r#type.clone(),
        expected: "comment",
      });
    }

    Ok(Self {
      by: item.by.clone(),
      id: item.id,
      kids: item.kids.clone(),
      parent: item.parent,
      text: item.text.clone(),
      time: item.time,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_with_type_tag() {
    let comment = Comment {
      by: Some("alice".into()),
      id: 1,
      kids: vec![2],
      parent: 0,
      text: Some("hi".into()),
      time: Timestamp::from_unix(1_173_677_760).unwrap(),
    };

    let value = serde_json::to_value(&comment).unwrap();

    assert_eq!(value["type"], "comment");
    assert_eq!(value["by"], "alice");
    assert_eq!(value["time"]["unix"], 1_173_677_760);
    assert_eq!(value["time"]["utc"], "2007-03-12T05:36:00Z");
  }
}
