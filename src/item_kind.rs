use super::*;

/// The `type` discriminator of an item.
///
/// Values outside the six the API documents are kept verbatim in `Unknown`
/// so they can be reported back to the caller.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ItemKind {
  Ask,
  Comment,
  Job,
  Poll,
  PollOpt,
  Story,
  Unknown(String),
}

impl Default for ItemKind {
  fn default() -> Self {
    Self::Unknown(String::new())
  }
}

impl Display for ItemKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<&str> for ItemKind {
  fn from(kind: &str) -> Self {
    match kind {
      "ask" => Self::Ask,
      "comment" => Self::Comment,
      "job" => Self::Job,
      "poll" => Self::Poll,
      "pollopt" => Self::PollOpt,
      "story" => Self::Story,
      _ => Self::Unknown(kind.to_string()),
    }
  }
}

impl From<ItemKind> for String {
  fn from(kind: ItemKind) -> Self {
    match kind {
      ItemKind::Unknown(kind) => kind,
      known => known.as_str().to_string(),
    }
  }
}

impl From<String> for ItemKind {
  fn from(kind: String) -> Self {
    match Self::from(kind.as_str()) {
      Self::Unknown(_) => Self::Unknown(kind),
      known => known,
    }
  }
}

impl ItemKind {
  #[must_use]
  pub fn as_str(&self) -> &str {
    match self {
      Self::Ask => "ask",
      Self::Comment => "comment",
      Self::Job => "job",
      Self::Poll => "poll",
      Self::PollOpt => "pollopt",
      Self::Story => "story",
      Self::Unknown(kind) => kind,
    }
  }

  /// Whether items of this kind share the story shape.
  #[must_use]
  pub fn is_story(&self) -> bool {
    matches!(self, Self::Ask | Self::Job | Self::Story)
  }
}
