use super::*;

/// A poll. Its options are referenced by id in `parts`, never embedded.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "poll")]
pub struct Poll {
  pub by: Option<String>,
  pub descendants: u64,
  pub id: u64,
  pub kids: Vec<u64>,
  pub parts: Vec<u64>,
  pub score: i64,
  pub text: Option<String>,
  pub time: Timestamp,
  pub title: Option<String>,
}

impl TryFrom<&GenericItem> for Poll {
  type Error = Error;

  fn try_from(item: &GenericItem) -> Result<Self> {
    if item.r#type != ItemKind::Poll {
      return Err(Error::TypeMismatch {
        actual: item.r#type.clone(),
        expected: "poll",
      });
    }

    Ok(Self {
      by: item.by.clone(),
      descendants: item.descendants,
      id: item.id,
      kids: item.kids.clone(),
      parts: item.parts.clone(),
      score: item.score,
      text: item.text.clone(),
      time: item.time,
      title: item.title.clone(),
    })
  }
}
