//! Game Core Module
//!
//! Everything that decides what happens on the grid, kept free of windowing
//! and audio so a round can run headless under test.
//!
//! Key concepts:
//! - GridPos/Heading: integer cell coordinates and travel direction
//! - Tail: the shift register of body segments trailing the player
//! - Round: one round's state plus the rules that advance it
//! - FixedRate: accumulator that turns frame deltas into fixed steps
//! - Session: ties a round to the platform services, one frame at a time

pub mod events;
pub mod grid;
pub mod round;
pub mod scheduler;
pub mod session;
pub mod tail;

// Re-export what the driver loop works with
pub use round::Round;
pub use session::{FrameOutcome, Session};
