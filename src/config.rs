use super::*;

/// Where a [`Client`] sends its requests.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
  base_url: String,
}

impl Default for Config {
  fn default() -> Self {
    Self::new(Self::DEFAULT_BASE_URL)
  }
}

impl Config {
  pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

  #[must_use]
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub(crate) fn category_url(&self, category: Category) -> String {
    self.url(category.endpoint())
  }

  pub(crate) fn item_url(&self, id: u64) -> String {
    format!("{}/item/{id}.json", self.base_url)
  }

  pub(crate) fn max_item_url(&self) -> String {
    self.url("maxitem")
  }

  pub fn new(base_url: impl Into<String>) -> Self {
    let mut base_url = base_url.into();

    let trimmed = base_url.trim_end_matches('/').len();

    base_url.truncate(trimmed);

    Self { base_url }
  }

  pub(crate) fn updates_url(&self) -> String {
    self.url("updates")
  }

  fn url(&self, path: &str) -> String {
    format!("{}/{path}.json", self.base_url)
  }

  pub(crate) fn user_url(&self, handle: &str) -> String {
    format!(
      "{}/user/{}.json",
      self.base_url,
      encode_path_segment(handle)
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config() -> Config {
    Config::new("http://localhost:8080/v0")
  }

  #[test]
  fn default_points_at_firebase() {
    assert_eq!(
      Config::default().base_url(),
      "https://hacker-news.firebaseio.com/v0"
    );
  }

  #[test]
  fn trailing_slashes_are_stripped() {
    assert_eq!(
      Config::new("http://localhost:8080/v0//").base_url(),
      "http://localhost:8080/v0"
    );
  }

  #[test]
  fn builds_endpoint_urls() {
    let config = config();

    assert_eq!(config.item_url(8863), "http://localhost:8080/v0/item/8863.json");
    assert_eq!(config.user_url("jl"), "http://localhost:8080/v0/user/jl.json");
    assert_eq!(config.max_item_url(), "http://localhost:8080/v0/maxitem.json");
    assert_eq!(config.updates_url(), "http://localhost:8080/v0/updates.json");
    assert_eq!(
      config.category_url(Category::Best),
      "http://localhost:8080/v0/beststories.json"
    );
  }

  #[test]
  fn user_handle_is_escaped() {
    assert_eq!(
      config().user_url("../item/1?print=pretty"),
      "http://localhost:8080/v0/user/..%2Fitem%2F1%3Fprint%3Dpretty.json"
    );
  }
}
