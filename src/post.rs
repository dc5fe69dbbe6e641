use super::*;

/// One post of a feed listing, as reddit reported it at fetch time.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
pub struct Post {
  #[serde(
    default,
    deserialize_with = "null_as_default",
    rename = "num_comments"
  )]
  pub comments: i64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub title: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub url: String,
}

impl Display for Post {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.title)?;

    if let Some(comments) = format_comments(self.comments) {
      write!(f, " ({comments})")?;
    }

    write!(f, "\n{}", self.url)
  }
}

impl Post {
  /// Title line, with the comment count when there is one, then the link.
  #[must_use]
  pub fn render(&self) -> String {
    self.to_string()
  }
}
