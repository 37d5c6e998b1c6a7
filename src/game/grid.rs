//! Grid Coordinates and Headings
//!
//! Game logic runs on an integer cell grid: origin at the top-left,
//! x grows rightward, y grows downward. One logic step moves the player
//! exactly one cell, so every reachable position is an exact cell
//! coordinate. Cells are scaled to pixels only at the drawing layer.

use crate::platform::SpriteId;

/// A cell coordinate on the playfield grid.
///
/// Positions one step outside the grid are representable on purpose: the
/// player leaves the grid by a single step before the round ends, so
/// bounds checking belongs to the round, not to the coordinate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step along `heading`.
    pub fn stepped(self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Travel direction of the player.
///
/// Steering polls directions in `ALL` order every frame and the last
/// accepted request wins (see `Round::steer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Every heading, in steering poll order.
    pub const ALL: [Heading; 4] = [Heading::Left, Heading::Right, Heading::Up, Heading::Down];

    /// Unit cell step for this heading (y grows downward).
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
        }
    }

    /// The 180-degree reverse of this heading.
    pub const fn opposite(self) -> Heading {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
        }
    }

    /// True when `other` is the exact reverse of this heading.
    pub fn is_opposite(self, other: Heading) -> bool {
        other == self.opposite()
    }

    /// Player sprite shown while travelling this way.
    pub const fn sprite(self) -> SpriteId {
        match self {
            Heading::Left => SpriteId::HeadLeft,
            Heading::Right => SpriteId::HeadRight,
            Heading::Up => SpriteId::HeadUp,
            Heading::Down => SpriteId::HeadDown,
        }
    }
}
