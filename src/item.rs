use super::*;

/// An item narrowed to the shape its discriminator names.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
  Comment(Comment),
  Poll(Poll),
  PollOpt(PollOpt),
  Story(Story),
}

impl Item {
  #[must_use]
  pub fn by(&self) -> Option<&str> {
    match self {
      Self::Comment(comment) => comment.by.as_deref(),
      Self::Poll(poll) => poll.by.as_deref(),
      Self::PollOpt(poll_opt) => poll_opt.by.as_deref(),
      Self::Story(story) => story.by.as_deref(),
    }
  }

  #[must_use]
  pub fn id(&self) -> u64 {
    match self {
      Self::Comment(comment) => comment.id,
      Self::Poll(poll) => poll.id,
      Self::PollOpt(poll_opt) => poll_opt.id,
      Self::Story(story) => story.id,
    }
  }

  #[must_use]
  pub fn kind(&self) -> ItemKind {
    match self {
      Self::Comment(_) => ItemKind::Comment,
      Self::Poll(_) => ItemKind::Poll,
      Self::PollOpt(_) => ItemKind::PollOpt,
      Self::Story(story) => story.r#type.into(),
    }
  }

  #[must_use]
  pub fn time(&self) -> Timestamp {
    match self {
      Self::Comment(comment) => comment.time,
      Self::Poll(poll) => poll.time,
      Self::PollOpt(poll_opt) => poll_opt.time,
      Self::Story(story) => story.time,
    }
  }
}
