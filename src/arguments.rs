use super::*;

#[derive(Debug, Parser)]
#[command(about = "Print the latest posts of a reddit feed", version)]
pub(crate) struct Arguments {
  #[arg(long, default_value = Client::BASE_URL, help = "Listing endpoint to fetch feeds from")]
  base_url: String,
  #[arg(help = "Feed name, already path-safe (e.g. `rust`)")]
  feed: String,
  #[arg(long, help = "Print at most this many posts")]
  limit: Option<usize>,
}

impl Arguments {
  /// Renderings of at most `limit` posts separated by blank lines, or `None`
  /// when the feed itself had no posts.
  fn output(&self, posts: &[Post]) -> Option<String> {
    if posts.is_empty() {
      return None;
    }

    Some(
      posts
        .iter()
        .take(self.limit.unwrap_or(usize::MAX))
        .map(Post::render)
        .collect::<Vec<_>>()
        .join("\n\n"),
    )
  }

  pub(crate) async fn run(self) -> Result {
    let client = Client::with_base_url(&self.base_url);

    info!(feed = %self.feed, url = %client.feed_url(&self.feed), "fetching feed");

    let posts = client
      .fetch(&self.feed)
      .await
      .with_context(|| format!("failed to fetch r/{}", self.feed))?;

    debug!(count = posts.len(), "fetched posts");

    match self.output(&posts) {
      None => info!(feed = %self.feed, "feed is empty"),
      Some(output) if output.is_empty() => {}
      Some(output) => println!("{output}"),
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_to_public_base() {
    let arguments = Arguments::try_parse_from(["reddit", "golang"]).unwrap();

    assert_eq!(arguments.base_url, Client::BASE_URL);
    assert_eq!(arguments.feed, "golang");
    assert_eq!(arguments.limit, None);
  }

  #[test]
  fn accepts_base_url_and_limit() {
    let arguments = Arguments::try_parse_from([
      "reddit",
      "--base-url",
      "http://localhost:8080/r",
      "--limit",
      "5",
      "rust",
    ])
    .unwrap();

    assert_eq!(arguments.base_url, "http://localhost:8080/r");
    assert_eq!(arguments.feed, "rust");
    assert_eq!(arguments.limit, Some(5));
  }

  fn posts() -> Vec<Post> {
    vec![
      Post {
        comments: 2,
        title: "first".into(),
        url: "https://a".into(),
      },
      Post {
        comments: 0,
        title: "second".into(),
        url: "https://b".into(),
      },
    ]
  }

  #[test]
  fn output_separates_posts_with_blank_line() {
    let arguments = Arguments::try_parse_from(["reddit", "rust"]).unwrap();

    assert_eq!(
      arguments.output(&posts()).as_deref(),
      Some("first (2 comments)\nhttps://a\n\nsecond\nhttps://b")
    );
  }

  #[test]
  fn output_respects_limit() {
    let arguments =
      Arguments::try_parse_from(["reddit", "--limit", "1", "rust"]).unwrap();

    assert_eq!(
      arguments.output(&posts()).as_deref(),
      Some("first (2 comments)\nhttps://a")
    );
  }

  #[test]
  fn output_with_zero_limit_is_not_an_empty_feed() {
    let arguments =
      Arguments::try_parse_from(["reddit", "--limit", "0", "rust"]).unwrap();

    assert_eq!(arguments.output(&posts()).as_deref(), Some(""));
    assert_eq!(arguments.output(&[]), None);
  }

  #[test]
  fn requires_a_feed() {
    assert!(Arguments::try_parse_from(["reddit"]).is_err());
  }
}
