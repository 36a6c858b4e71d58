use super::*;

/// Performs one blocking GET and hands back the raw body.
pub trait Transport {
  fn get(&self, url: &str) -> Result<Vec<u8>>;
}

#[derive(Clone, Debug)]
pub struct HttpTransport {
  client: reqwest::blocking::Client,
}

impl Default for HttpTransport {
  fn default() -> Self {
    Self {
      client: reqwest::blocking::Client::new(),
    }
  }
}

impl HttpTransport {
  #[must_use]
  pub fn new(client: reqwest::blocking::Client) -> Self {
    Self { client }
  }
}

impl Transport for HttpTransport {
  fn get(&self, url: &str) -> Result<Vec<u8>> {
    let response =
      self
        .client
        .get(url)
        .send()
        .map_err(|source| Error::Transport {
          source,
          url: url.to_string(),
        })?;

    let status = response.status();

    debug!(url, %status, "received response");

    if !status.is_success() {
      return Err(Error::UnexpectedStatus {
        status: status.as_u16(),
        url: url.to_string(),
      });
    }

    let body = response.bytes().map_err(|source| Error::BodyRead {
      source,
      url: url.to_string(),
    })?;

    Ok(body.to_vec())
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use {
    super::*,
    std::{
      io::{Read, Write},
      net::TcpListener,
      thread,
    },
  };

  /// Serves `response` verbatim to the first connection and returns the
  /// server's base URL.
  pub(crate) fn serve_once(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();

    let address = listener.local_addr().unwrap();

    thread::spawn(move || {
      let (mut stream, _) = listener.accept().unwrap();
      let mut request = [0; 4096];
      let _ = stream.read(&mut request);
      let _ = stream.write_all(response.as_bytes());
    });

    format!("http://{address}")
  }

  pub(crate) fn transport() -> HttpTransport {
    HttpTransport::new(
      reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .unwrap(),
    )
  }

  #[test]
  fn returns_body_on_success() {
    let base = serve_once(
      "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 7\r\nConnection: close\r\n\r\n[1,2,3]",
    );

    assert_eq!(
      transport().get(&format!("{base}/topstories.json")).unwrap(),
      b"[1,2,3]"
    );
  }

  #[test]
  fn non_success_status_is_reported() {
    let base = serve_once(
      "HTTP/1.1 401 Unauthorized\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot json!",
    );

    let url = format!("{base}/item/1.json");

    match transport().get(&url) {
      Err(Error::UnexpectedStatus { status, url: reported }) => {
        assert_eq!(status, 401);
        assert_eq!(reported, url);
      }
      other => panic!("expected unexpected status, got {other:?}"),
    }
  }

  #[test]
  fn truncated_body_is_a_read_error() {
    let base = serve_once(
      "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n[1,2",
    );

    assert!(matches!(
      transport().get(&format!("{base}/topstories.json")),
      Err(Error::BodyRead { .. })
    ));
  }

  #[test]
  fn refused_connection_is_a_transport_error() {
    let address = TcpListener::bind("127.0.0.1:0")
      .unwrap()
      .local_addr()
      .unwrap();

    assert!(matches!(
      transport().get(&format!("http://{address}/maxitem.json")),
      Err(Error::Transport { .. })
    ));
  }
}
