use super::*;

/// The client call an [`Error::Operation`] was raised from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Operation {
  Comment(u64),
  GenericItem(u64),
  Item(u64),
  MaxId,
  Poll(u64),
  PollOpt(u64),
  Story(u64),
  TopIds(Category),
  Updates,
  User(String),
}

impl Display for Operation {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Comment(id) => write!(f, "fetch comment {id}"),
      Self::GenericItem(id) | Self::Item(id) => write!(f, "fetch item {id}"),
      Self::MaxId => write!(f, "fetch max item id"),
      Self::Poll(id) => write!(f, "fetch poll {id}"),
      Self::PollOpt(id) => write!(f, "fetch poll option {id}"),
      Self::Story(id) => write!(f, "fetch story {id}"),
      Self::TopIds(category) => write!(f, "fetch {category} ids"),
      Self::Updates => write!(f, "fetch updates"),
      Self::User(handle) => write!(f, "fetch user `{handle}`"),
    }
  }
}
