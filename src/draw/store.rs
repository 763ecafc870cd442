//! Immutable stroke store snapshots.

use super::eraser;
use super::stroke::{Point, Stroke};
use std::sync::Arc;

/// Ordered collection of committed strokes (first = bottom layer, last = top layer).
///
/// A store is a persistent snapshot: [`commit`](Self::commit) and
/// [`erase`](Self::erase) return a new store and leave `self` untouched, so
/// earlier snapshots remain valid for undo and for recomputing an erase
/// gesture from its starting point. Cloning is cheap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StrokeStore {
    strokes: Arc<[Stroke]>,
}

impl StrokeStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Returns a store with `stroke` appended on top.
    pub fn commit(&self, stroke: Stroke) -> Self {
        let mut strokes = self.strokes.to_vec();
        strokes.push(stroke);
        Self {
            strokes: strokes.into(),
        }
    }

    /// Returns a store with every stroke split against `path`.
    pub fn erase(&self, path: &[Point], radius: f64) -> Self {
        Self {
            strokes: eraser::erase_strokes(self.strokes.iter(), path, radius).into(),
        }
    }

    /// Whether both snapshots share the same underlying strokes.
    pub fn same_snapshot(&self, other: &StrokeStore) -> bool {
        Arc::ptr_eq(&self.strokes, &other.strokes)
    }
}

impl FromIterator<Stroke> for StrokeStore {
    fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
        Self {
            strokes: iter.into_iter().collect(),
        }
    }
}
