use super::*;

/// One method per API endpoint. Each call performs exactly one request and
/// wraps any failure in [`Error::Operation`] naming the call.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
  config: Config,
  transport: T,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Config::default())
  }
}

impl Client {
  #[must_use]
  pub fn new(config: Config) -> Self {
    Self::with_transport(config, HttpTransport::default())
  }
}

impl<T: Transport> Client<T> {
  pub fn comment_by_id(&self, id: u64) -> Result<Comment> {
    self.request(Operation::Comment(id), &self.config.item_url(id), |payload| {
      decode_generic(payload)?.to_comment()
    })
  }

  #[must_use]
  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn generic_item_by_id(&self, id: u64) -> Result<GenericItem> {
    self.request(
      Operation::GenericItem(id),
      &self.config.item_url(id),
      decode_generic,
    )
  }

  pub fn item_by_id(&self, id: u64) -> Result<Item> {
    self.request(Operation::Item(id), &self.config.item_url(id), resolve)
  }

  pub fn max_id(&self) -> Result<u64> {
    self.request(
      Operation::MaxId,
      &self.config.max_item_url(),
      resolver::decode,
    )
  }

  pub fn poll_by_id(&self, id: u64) -> Result<Poll> {
    self.request(Operation::Poll(id), &self.config.item_url(id), |payload| {
      decode_generic(payload)?.to_poll()
    })
  }

  pub fn poll_opt_by_id(&self, id: u64) -> Result<PollOpt> {
    self.request(
      Operation::PollOpt(id),
      &self.config.item_url(id),
      |payload| decode_generic(payload)?.to_poll_opt(),
    )
  }

  fn request<R>(
    &self,
    operation: Operation,
    url: &str,
    decode: impl FnOnce(&[u8]) -> Result<R>,
  ) -> Result<R> {
    debug!(%operation, url, "sending request");

    self
      .transport
      .get(url)
      .and_then(|payload| decode(payload.as_slice()))
      .map_err(|source| Error::Operation {
        operation,
        source: Box::new(source),
      })
  }

  pub fn story_by_id(&self, id: u64) -> Result<Story> {
    self.request(Operation::Story(id), &self.config.item_url(id), |payload| {
      decode_generic(payload)?.to_story()
    })
  }

  /// Ids in the order the API ranks them.
  pub fn top_ids(&self, category: Category) -> Result<Vec<u64>> {
    self.request(
      Operation::TopIds(category),
      &self.config.category_url(category),
      resolver::decode,
    )
  }

  pub fn updates(&self) -> Result<Updates> {
    self.request(
      Operation::Updates,
      &self.config.updates_url(),
      resolver::decode,
    )
  }

  pub fn user_by_id(&self, handle: &str) -> Result<User> {
    self.request(
      Operation::User(handle.to_string()),
      &self.config.user_url(handle),
      resolver::decode,
    )
  }

  pub fn with_transport(config: Config, transport: T) -> Self {
    Self { config, transport }
  }
}
