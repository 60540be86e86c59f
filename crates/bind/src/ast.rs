//! Parsed form of a binding expression such as `party.name|customer.name`.
use std::fmt;

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `name`).
    Key(String),
    /// An all-digit step (e.g., `0`): a sequence index, or a decimal object key.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => f.write_str(k),
            PathSegment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// A non-empty, dot-separated traversal into the view.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingPath {
    segments: Vec<PathSegment>,
}

impl BindingPath {
    /// Returns `None` for an empty segment list.
    pub fn new(segments: Vec<PathSegment>) -> Option<Self> {
        (!segments.is_empty()).then_some(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for BindingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// An ordered, non-empty fallback chain of paths. The first path yielding a
/// value wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BindingExpr {
    paths: Vec<BindingPath>,
}

impl BindingExpr {
    /// Returns `None` for an empty path list.
    pub fn new(paths: Vec<BindingPath>) -> Option<Self> {
        (!paths.is_empty()).then_some(Self { paths })
    }

    pub fn paths(&self) -> &[BindingPath] {
        &self.paths
    }
}

impl fmt::Display for BindingExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{}", path)?;
        }
        Ok(())
    }
}
