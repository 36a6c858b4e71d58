use super::*;

/// The ranked story lists the API publishes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
pub enum Category {
  Best,
  Job,
  New,
  Show,
  Top,
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    f.write_str(self.endpoint())
  }
}

impl Category {
  #[must_use]
  pub fn all() -> &'static [Category] {
    &[
      Category::Top,
      Category::New,
      Category::Best,
      Category::Show,
      Category::Job,
    ]
  }

  #[must_use]
  pub fn endpoint(self) -> &'static str {
    match self {
      Category::Best => "beststories",
      Category::Job => "jobstories",
      Category::New => "newstories",
      Category::Show => "showstories",
      Category::Top => "topstories",
    }
  }
}
