//! Platform Services
//!
//! The session talks to the outside world through four narrow traits:
//! a frame clock, a keyboard, a drawing canvas, and an audio sink. Live
//! implementations (`backend`) wrap macroquad; tests substitute recording
//! fakes. The services are constructed in `main` and handed to the session
//! once; nothing in here is a global.

pub mod assets;
pub mod backend;
pub mod icon;

use crate::game::grid::Heading;

/// Wall-clock frame delta provider.
pub trait Clock {
    /// Seconds elapsed since the previous frame; never negative.
    fn delta_seconds(&mut self) -> f32;
}

/// Keyboard state, split edge/held the way macroquad's own API is.
pub trait InputSource {
    /// True only on the frame the direction's key went down.
    fn direction_pressed(&self, heading: Heading) -> bool;

    /// True on every frame the direction's key is held.
    fn direction_held(&self, heading: Heading) -> bool;

    /// Escape, or the window-close request.
    fn exit_requested(&self) -> bool;
}

/// Drawing surface measured in window pixels.
///
/// The canvas knows sprite sizes (cells, or the whole window for the
/// background); callers position sprites by their top-left corner. The
/// surface does not retain the previous frame, so callers issue the full
/// scene every frame.
pub trait Canvas {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32);

    /// Marks the end of one pass. The live backend draws immediately, so
    /// this is where a buffered implementation would flip.
    fn present(&mut self);
}

/// Fire-and-forget sound playback. Implementations with no working audio
/// treat `play` as a no-op.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Every drawable sprite. `ALL` drives asset loading and the fallback
/// palette; the order is also each sprite's slot in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Background,
    Body,
    HeadUp,
    HeadDown,
    HeadLeft,
    HeadRight,
    Apple,
    RottenApple,
}

impl SpriteId {
    pub const ALL: [SpriteId; 8] = [
        SpriteId::Background,
        SpriteId::Body,
        SpriteId::HeadUp,
        SpriteId::HeadDown,
        SpriteId::HeadLeft,
        SpriteId::HeadRight,
        SpriteId::Apple,
        SpriteId::RottenApple,
    ];

    /// File stem under `assets/sprites/`.
    pub fn asset_name(self) -> &'static str {
        match self {
            SpriteId::Background => "background",
            SpriteId::Body => "body",
            SpriteId::HeadUp => "head_up",
            SpriteId::HeadDown => "head_down",
            SpriteId::HeadLeft => "head_left",
            SpriteId::HeadRight => "head_right",
            SpriteId::Apple => "apple",
            SpriteId::RottenApple => "rotten_apple",
        }
    }
}

/// One-shot sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Eat,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 2] = [SoundCue::Eat, SoundCue::GameOver];

    /// File stem under `assets/sounds/`.
    pub fn asset_name(self) -> &'static str {
        match self {
            SoundCue::Eat => "eat",
            SoundCue::GameOver => "game_over",
        }
    }
}
