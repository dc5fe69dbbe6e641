use {reqwest::StatusCode, thiserror::Error};

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to decode listing")]
  Decode(#[source] serde_json::Error),
  #[error("unexpected response status {status}")]
  Status { status: StatusCode },
  #[error("request failed")]
  Transport(#[source] reqwest::Error),
}
