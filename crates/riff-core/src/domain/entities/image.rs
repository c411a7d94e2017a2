use std::fmt;

use serde::Serialize;

/// A container image reference: `<repository>:<tag>`.
///
/// The repository is `<account>/<name>`; the platform pulls it from the
/// registry the account belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageRef {
    repository: String,
    tag: String,
}

impl ImageRef {
    pub fn new(account: &str, name: &str, tag: &str) -> Self {
        Self {
            repository: format!("{account}/{name}"),
            tag: tag.to_string(),
        }
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}
