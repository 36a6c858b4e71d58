use super::*;

/// The discriminators that decode to a [`Story`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryKind {
  Ask,
  Job,
  #[default]
  Story,
}

impl From<StoryKind> for ItemKind {
  fn from(kind: StoryKind) -> Self {
    match kind {
      StoryKind::Ask => Self::Ask,
      StoryKind::Job => Self::Job,
      StoryKind::Story => Self::Story,
    }
  }
}

impl TryFrom<&ItemKind> for StoryKind {
  type Error = Error;

  fn try_from(kind: &ItemKind) -> Result<Self> {
    match kind {
      ItemKind::Ask => Ok(Self::Ask),
      ItemKind::Job => Ok(Self::Job),
      ItemKind::Story => Ok(Self::Story),
      other => Err(Error::TypeMismatch {
        actual: other.clone(),
        expected: "story, job or ask",
      }),
    }
  }
}
