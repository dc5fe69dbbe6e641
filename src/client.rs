use super::*;

/// Fetches feed listings from a reddit-compatible host.
#[derive(Clone, Debug)]
pub struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Default for Client {
  fn default() -> Self {
    Self::with_base_url(Self::BASE_URL)
  }
}

impl Client {
  pub const BASE_URL: &str = "https://www.reddit.com/r";

  /// Listing URL for `feed`, interpolated without escaping.
  #[must_use]
  pub fn feed_url(&self, feed: &str) -> String {
    format!("{}/{feed}.json", self.base_url)
  }

  /// Fetches the first page of `feed` and flattens it into posts, in the
  /// order the server listed them.
  ///
  /// # Errors
  ///
  /// Returns [`Error::Transport`] if the request or the body read fails,
  /// [`Error::Status`] for any status other than `200 OK`, and
  /// [`Error::Decode`] if the body is not a listing.
  pub async fn fetch(&self, feed: &str) -> Result<Vec<Post>> {
    let response = self
      .client
      .get(self.feed_url(feed))
      .send()
      .await
      .map_err(Error::Transport)?;

    let status = response.status();

    if status != StatusCode::OK {
      return Err(Error::Status { status });
    }

    let body = response.bytes().await.map_err(Error::Transport)?;

    Ok(
      serde_json::from_slice::<Listing>(&body)
        .map_err(Error::Decode)?
        .into_posts(),
    )
  }

  /// Client for another host; a trailing `/` on `base_url` is dropped.
  #[must_use]
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into().trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
    }
  }
}
