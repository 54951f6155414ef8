//! Depth-aware field paths shared by every recursive walker.

use std::fmt::{Display, Formatter, Result};

use crate::error::ShapeError;

/// Maximum number of path segments any walker may descend into.
pub const MAX_DEPTH: usize = 64;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Named struct member or top-level column.
    Field(String),
    /// Position inside a list.
    Index(usize),
    /// Key inside a map.
    Key(String),
    /// List element or map value when walking a schema rather than a value.
    Element,
}

impl Segment {
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }
}

/// Path from the record root to the node currently being visited.
///
/// Walkers push a segment before recursing and pop it on the way out through
/// [`FieldPath::scoped`], so one buffer serves the whole traversal. Pushing
/// past [`MAX_DEPTH`] fails with a [`ShapeError`] naming the path instead of
/// recursing further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Run `f` with `segment` pushed onto the path.
    pub fn scoped<T, E>(
        &mut self,
        segment: Segment,
        f: impl FnOnce(&mut Self) -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        E: From<ShapeError>,
    {
        if self.segments.len() >= MAX_DEPTH {
            let detail = format!("nesting exceeds {MAX_DEPTH} levels");
            self.segments.push(segment);
            let err = ShapeError::new(&*self, detail);
            self.segments.pop();
            return Err(err.into());
        }
        self.segments.push(segment);
        let out = f(self);
        self.segments.pop();
        out
    }

    /// Name derived from the field segments only, joined with `_`.
    ///
    /// List positions, map keys and element markers do not contribute, so the
    /// struct element of a list column `l` is named `l`.
    pub fn type_name(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if let Segment::Field(name) = segment {
                if !out.is_empty() {
                    out.push('_');
                }
                out.push_str(name);
            }
        }
        out
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Field(name) if i == 0 => f.write_str(name)?,
                Segment::Field(name) => write!(f, ".{name}")?,
                Segment::Index(idx) => write!(f, "[{idx}]")?,
                Segment::Key(key) => write!(f, "[{key:?}]")?,
                Segment::Element => f.write_str("[]")?,
            }
        }
        Ok(())
    }
}
