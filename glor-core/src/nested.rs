use serde_json::Value;
use thiserror::Error;

/// Raised when a path segment cannot be resolved. Carries only the
/// offending key, not the full path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}'")]
pub struct KeyNotFound(pub String);

/// Walk `path` left to right through a tree of json objects.
///
/// An empty path returns the root untouched, whatever its shape. The first
/// key that is absent, or applied to a non-object value, stops the walk
/// with a [`KeyNotFound`].
pub fn access_nested<'a>(container: &'a Value, path: &[&str]) -> Result<&'a Value, KeyNotFound> {
    let mut current = container;
    for key in path {
        current = match current.get(key) {
            Some(value) => value,
            None => return Err(KeyNotFound((*key).to_string())),
        };
    }
    Ok(current)
}
