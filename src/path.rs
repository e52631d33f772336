use crate::errors::BindError;
use std::fmt;

/// Normalized root path of a bound collection.
///
/// Always starts with exactly one `/` and never ends with one, except for the
/// root collection `/` itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPath(String);

impl CollectionPath {
    /// Normalize `raw` into a collection path.
    ///
    /// An empty string binds the root collection. A missing leading slash is
    /// added and repeated leading or trailing slashes are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`BindError`] if a segment is empty or carries router syntax
    /// (`{..}`, `*..`, `:..`), which would clash with the generated `{id}` route.
    pub fn parse(raw: &str) -> Result<Self, BindError> {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self("/".to_string()));
        }

        for segment in trimmed.split('/') {
            if segment.is_empty() {
                return Err(BindError::EmptySegment {
                    path: raw.to_string(),
                });
            }
            if segment.contains(['{', '}']) || segment.starts_with(['*', ':']) {
                return Err(BindError::RouteSyntax {
                    path: raw.to_string(),
                    segment: segment.to_string(),
                });
            }
        }

        Ok(Self(format!("/{trimmed}")))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route for a single document, `{path}/{id}`.
    #[must_use]
    pub fn item_route(&self) -> String {
        if self.0 == "/" {
            "/{id}".to_string()
        } else {
            format!("{}/{{id}}", self.0)
        }
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CollectionPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
