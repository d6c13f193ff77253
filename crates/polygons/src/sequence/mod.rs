//! Sequence of regular polygons with vertex counts `3..=max_edges`.
//!
//! Purpose
//! - Build every member eagerly at construction; read-only afterwards.
//! - Indexed access (`at`, `get`, `Index`), length, max-efficiency selection,
//!   and independent forward-only cursors (`iter`).
//!
//! Concurrency
//! - `PolygonSequence` is immutable and `Send + Sync`; share it by reference
//!   and spawn one cursor per traversal. A cursor advances through `&mut self`
//!   and is not meant to be shared between traversals.

mod cursor;

use std::fmt;
use std::ops::Index;

use crate::error::PolygonError;
use crate::polygon::{check_circumradius, Polygon};

pub use cursor::{CursorState, SequenceCursor};

/// Polygons `Polygon(3, R), Polygon(4, R), …, Polygon(max_edges, R)`.
///
/// Invariants:
/// - `max_edges >= 3`, so the sequence is never empty.
/// - Members share `circumradius` and are sorted by ascending vertex count
///   with no gaps; `members[i].count_vertices() == i + 3`.
#[derive(Clone, Debug)]
pub struct PolygonSequence {
    max_edges: usize,
    circumradius: f64,
    members: Vec<Polygon>,
}

impl PolygonSequence {
    pub fn new(max_edges: usize, circumradius: f64) -> Result<Self, PolygonError> {
        if max_edges < 3 {
            return Err(PolygonError::invalid("max_edges must be >= 3"));
        }
        check_circumradius(circumradius)?;
        let members = (3..=max_edges)
            .map(|n| Polygon::new(n, circumradius))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            max_edges,
            circumradius,
            members,
        })
    }

    #[inline]
    pub fn max_edges(&self) -> usize {
        self.max_edges
    }

    #[inline]
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Number of members, `max_edges - 2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.max_edges - 2
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Polygon] {
        &self.members
    }

    /// Zero-based access. Negative indices are rejected, not wrapped.
    pub fn at(&self, index: isize) -> Result<&Polygon, PolygonError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.members.get(i))
            .ok_or(PolygonError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.members.get(index)
    }

    /// Member maximizing `area / perimeter`; the first maximum wins on exact ties.
    ///
    /// Never fails: construction guarantees at least one member.
    pub fn max_efficiency_polygon(&self) -> &Polygon {
        let mut best = &self.members[0];
        let mut best_eff = best.efficiency();
        for p in &self.members[1..] {
            let eff = p.efficiency();
            if eff > best_eff {
                best = p;
                best_eff = eff;
            }
        }
        best
    }

    /// Fresh cursor at position 0, independent of any other cursor.
    #[inline]
    pub fn iter(&self) -> SequenceCursor<'_> {
        SequenceCursor::new(&self.members)
    }
}

impl Index<usize> for PolygonSequence {
    type Output = Polygon;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.members[index]
    }
}

impl<'a> IntoIterator for &'a PolygonSequence {
    type Item = &'a Polygon;
    type IntoIter = SequenceCursor<'a>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygons(m={}, R={})", self.max_edges, self.circumradius)
    }
}

#[cfg(test)]
mod tests;
