use std::collections::HashMap;

use crate::error::{Result, SourceError};
use crate::math::Point3;

/// Provider of the vertex set of a part.
///
/// The pipeline never talks to a CAD application directly. Anything that
/// can hand back the vertex coordinates of a part implements this trait;
/// tests and demos use [`InMemorySource`].
pub trait VertexSource {
    /// Returns every vertex of every solid body in `part`.
    ///
    /// Duplicates and arbitrary ordering are allowed. An empty list is a
    /// valid answer and is reported downstream as empty input.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when no vertex data can be obtained for
    /// `part` at all.
    fn vertices(&self, part: &str) -> Result<Vec<Point3>>;
}

/// Vertex source backed by canned point lists keyed by part identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    parts: HashMap<String, Vec<Point3>>,
}

impl InMemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the vertices of `part`.
    #[must_use]
    pub fn with_part(mut self, part: impl Into<String>, vertices: Vec<Point3>) -> Self {
        self.insert(part, vertices);
        self
    }

    /// Registers (or replaces) the vertices of `part`.
    pub fn insert(&mut self, part: impl Into<String>, vertices: Vec<Point3>) {
        self.parts.insert(part.into(), vertices);
    }

    /// Returns the number of registered parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` if no part is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl VertexSource for InMemorySource {
    fn vertices(&self, part: &str) -> Result<Vec<Point3>> {
        if self.parts.is_empty() {
            return Err(SourceError::NoInputAvailable("no parts loaded".to_owned()).into());
        }
        self.parts
            .get(part)
            .cloned()
            .ok_or_else(|| SourceError::PartNotFound(part.to_owned()).into())
    }
}

impl<S: VertexSource + ?Sized> VertexSource for &S {
    fn vertices(&self, part: &str) -> Result<Vec<Point3>> {
        (**self).vertices(part)
    }
}
