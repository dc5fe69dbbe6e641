use super::*;

/// Reads a field that may be absent or `null` as its type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn format_comments(count: i64) -> Option<String> {
  match count {
    0 => None,
    1 => Some("1 comment".to_string()),
    _ => Some(format!("{count} comments")),
  }
}
