use super::*;

/// A submission. Jobs and Ask HN posts share this shape and are told apart
/// by `type`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Story {
  pub by: Option<String>,
  pub descendants: u64,
  pub id: u64,
  pub kids: Vec<u64>,
  pub score: i64,
  pub time: Timestamp,
  pub title: Option<String>,
  pub r#type: StoryKind,
  pub url: Option<String>,
}

impl TryFrom<&GenericItem> for Story {
  type Error = Error;

  fn try_from(item: &GenericItem) -> Result<Self> {
    Ok(Self {
      r#type: StoryKind::try_from(&item.r#type)?,
      by: item.by.clone(),
      descendants: item.descendants,
      id: item.id,
      kids: item.kids.clone(),
      score: item.score,
      time: item.time,
      title: item.title.clone(),
      url: item.url.clone(),
    })
  }
}
