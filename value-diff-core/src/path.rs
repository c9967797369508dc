use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// One step into a nested value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Map key.
    Key(String),
    /// Sequence index.
    Index(usize),
}

/// Location of a node within a nested value, from the root down.
///
/// An empty path addresses the root value itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<PathSegment>);

impl Path {
    /// The path of the root value.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Return this path extended by a map key.
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        Self(segments)
    }

    /// Return this path extended by a sequence index.
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        Self(segments)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn displays_keys_and_indices() {
        let path = Path::root()
            .child_key("Pool")
            .child_index(0)
            .child_key("ServicePort")
            .child_index(2);
        assert_eq!(path.to_string(), "Pool[0].ServicePort[2]");
    }

    #[test]
    fn root_displays_as_placeholder() {
        assert_eq!(Path::root().to_string(), "(root)");
    }
}
