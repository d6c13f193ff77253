//! Forward-only cursor over the members of a `PolygonSequence`.
//!
//! State machine: `Active` while `position < len`, `Exhausted` once
//! `position == len`. Exhausted is terminal; there is no reset or seek.

use std::iter::FusedIterator;

use crate::error::PolygonError;
use crate::polygon::Polygon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    Active,
    Exhausted,
}

/// One traversal over a borrowed slice of polygons.
///
/// Invariant: `0 <= position <= members.len()`.
#[derive(Clone, Debug)]
pub struct SequenceCursor<'a> {
    members: &'a [Polygon],
    position: usize,
}

impl<'a> SequenceCursor<'a> {
    #[inline]
    pub(crate) fn new(members: &'a [Polygon]) -> Self {
        Self {
            members,
            position: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn state(&self) -> CursorState {
        if self.position < self.members.len() {
            CursorState::Active
        } else {
            CursorState::Exhausted
        }
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.state() == CursorState::Exhausted
    }

    /// Like `next`, but reports the end as `PolygonError::StopIteration`.
    ///
    /// Once exhausted, every further call returns the same error.
    pub fn try_next(&mut self) -> Result<&'a Polygon, PolygonError> {
        let members = self.members;
        let p = members
            .get(self.position)
            .ok_or(PolygonError::StopIteration)?;
        self.position += 1;
        Ok(p)
    }
}

impl<'a> Iterator for SequenceCursor<'a> {
    type Item = &'a Polygon;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.members.len() - self.position;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for SequenceCursor<'_> {}
impl FusedIterator for SequenceCursor<'_> {}
