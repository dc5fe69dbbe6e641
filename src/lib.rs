//! A small client for the public feed listings of reddit.
//!
//! [`fetch`] issues one GET against `https://www.reddit.com/r/<feed>.json`
//! and flattens the listing into a list of [`Post`]s, each of which renders
//! as a title line followed by its link.

use {
  listing::Listing,
  reqwest::StatusCode,
  serde::{Deserialize, Deserializer},
  std::fmt::{self, Display, Formatter},
  utils::{format_comments, null_as_default},
};

pub use {client::Client, error::Error, post::Post};

mod client;
mod error;
mod listing;
mod post;
mod utils;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Fetches the current first page of `feed` with a default [`Client`].
///
/// `feed` goes into the URL path as is, so it must already be path-safe.
///
/// # Errors
///
/// Returns [`Error::Transport`] if the request or the body read fails,
/// [`Error::Status`] for any status other than `200 OK`, and
/// [`Error::Decode`] if the body is not a listing.
pub async fn fetch(feed: &str) -> Result<Vec<Post>> {
  Client::default().fetch(feed).await
}
