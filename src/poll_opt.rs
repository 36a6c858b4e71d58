use super::*;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "type", rename = "pollopt")]
pub struct PollOpt {
  pub by: Option<String>,
  pub id: u64,
  pub poll: u64,
  pub score: i64,
  pub text: Option<String>,
  pub time: Timestamp,
}

impl TryFrom<&GenericItem> for PollOpt {
  type Error = Error;

  fn try_from(item: &GenericItem) -> Result<Self> {
    if item.r#type != ItemKind::PollOpt {
      return Err(Error::TypeMismatch {
        actual: item.r#type.clone(),
        expected: "pollopt",
      });
    }

    Ok(Self {
      by: item.by.clone(),
      id: item.id,
      poll: item.poll,
      score: item.score,
      text: item.text.clone(),
      time: item.time,
    })
  }
}
