use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("could not read response body from {url}")]
  BodyRead { source: reqwest::Error, url: String },
  #[error("malformed payload")]
  MalformedPayload {
    #[from]
    source: serde_json::Error,
  },
  #[error("resource not found")]
  NotFound,
  #[error("could not {operation}")]
  Operation {
    operation: Operation,
    source: Box<Error>,
  },
  #[error("could not send request to {url}")]
  Transport { source: reqwest::Error, url: String },
  #[error("expected {expected} item but found `{actual}`")]
  TypeMismatch {
    actual: ItemKind,
    expected: &'static str,
  },
  #[error("unexpected status {status} from {url}")]
  UnexpectedStatus { status: u16, url: String },
  #[error("unknown item type `{0}`")]
  UnknownItemType(String),
}

impl Error {
  /// The innermost error, with any operation context peeled off.
  #[must_use]
  pub fn root(&self) -> &Error {
    let mut error = self;

    while let Error::Operation { source, .. } = error {
      error = &**source;
    }

    error
  }
}
