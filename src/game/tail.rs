//! Tail Segments
//!
//! The tail is an ordered run of cells behind the player: segment 0 is the
//! cell the player vacated most recently, the last segment is the oldest.
//! Each logic step shifts every segment one place toward the end and feeds
//! the player's vacated cell in at the front. Growth appends a segment at
//! the cell the final segment itself just vacated, so a new segment never
//! appears at a stale position.

use crate::game::grid::GridPos;

/// Shift-register tail with a hard segment cap.
///
/// The cap equals the cell count of the grid, so segment count stays equal
/// to the score for any round that can physically occur.
#[derive(Debug)]
pub struct Tail {
    segments: Vec<GridPos>,
    max_len: usize,
    /// Cell freed by the most recent shift; where the next growth lands.
    vacated: GridPos,
}

impl Tail {
    pub fn new(max_len: usize, origin: GridPos) -> Self {
        Self {
            segments: Vec::with_capacity(max_len),
            max_len,
            vacated: origin,
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments front (newest, right behind the player) to back (oldest).
    pub fn segments(&self) -> &[GridPos] {
        &self.segments
    }

    /// True when any segment sits on `pos`.
    pub fn occupies(&self, pos: GridPos) -> bool {
        self.segments.iter().any(|&segment| segment == pos)
    }

    /// Advance the register one step: the oldest segment's cell becomes the
    /// growth cell and `head_cell` (the cell the player is leaving) becomes
    /// segment 0. With no segments, only the growth cell is recorded.
    pub fn shift(&mut self, head_cell: GridPos) {
        match self.segments.pop() {
            Some(last) => {
                self.vacated = last;
                self.segments.insert(0, head_cell);
            }
            None => self.vacated = head_cell,
        }
    }

    /// Append one segment at the most recently vacated cell. Called when a
    /// consumption pays out, keeping segment count equal to score.
    pub fn grow(&mut self) {
        if self.segments.len() < self.max_len {
            self.segments.push(self.vacated);
        }
    }
}
