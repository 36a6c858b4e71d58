use super::*;

/// Every field any item can carry. Which ones are meaningful depends on
/// `type`; the rest decode to their zero value and should not be relied on.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GenericItem {
  pub by: Option<String>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub dead: bool,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub deleted: bool,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub descendants: u64,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub id: u64,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub kids: Vec<u64>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub parent: u64,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub parts: Vec<u64>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub poll: u64,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub score: i64,
  pub text: Option<String>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub time: Timestamp,
  pub title: Option<String>,
  #[serde(deserialize_with = "deserialize_null_default")]
  pub r#type: ItemKind,
  pub url: Option<String>,
}

impl GenericItem {
  pub fn to_comment(&self) -> Result<Comment> {
    Comment::try_from(self)
  }

  /// Narrows to whichever variant `type` names, failing on unknown types
  /// exactly as [`resolve`] does.
  pub fn to_item(&self) -> Result<Item> {
    match &self.r#type {
      ItemKind::Ask | ItemKind::Job | ItemKind::Story => {
        self.to_story().map(Item::Story)
      }
      ItemKind::Comment => self.to_comment().map(Item::Comment),
      ItemKind::Poll => self.to_poll().map(Item::Poll),
      ItemKind::PollOpt => self.to_poll_opt().map(Item::PollOpt),
      ItemKind::Unknown(kind) => Err(Error::UnknownItemType(kind.clone())),
    }
  }

  pub fn to_poll(&self) -> Result<Poll> {
    Poll::try_from(self)
  }

  pub fn to_poll_opt(&self) -> Result<PollOpt> {
    PollOpt::try_from(self)
  }

  pub fn to_story(&self) -> Result<Story> {
    Story::try_from(self)
  }
}
