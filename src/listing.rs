use super::*;

#[derive(Debug, Deserialize)]
struct Child {
  data: Post,
}

/// The `data.children[].data` envelope reddit wraps a feed page in.
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
  data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
  children: Vec<Child>,
}

impl Listing {
  pub(crate) fn into_posts(self) -> Vec<Post> {
    self
      .data
      .children
      .into_iter()
      .map(|child| child.data)
      .collect()
  }
}
