//! Live Platform Services
//!
//! The macroquad-backed implementations of the platform traits. Each one
//! is a thin veneer: the frame clock reads macroquad's frame delta, the
//! keyboard polls arrows plus WASD, the canvas positions the sprite bank
//! on the cell grid, and the speaker plays bank slots. All the decisions
//! live in the session; nothing here keeps state between frames beyond
//! the loaded banks.

use macroquad::audio::{play_sound, PlaySoundParams};
use macroquad::prelude::*;

use crate::config::GameConfig;
use crate::game::grid::Heading;
use crate::platform::assets::{SoundBank, SpriteBank};
use crate::platform::{AudioSink, Canvas, Clock, InputSource, SoundCue, SpriteId};

pub struct FrameClock;

impl Clock for FrameClock {
    fn delta_seconds(&mut self) -> f32 {
        get_frame_time()
    }
}

/// Arrow keys and WASD, either works. Escape or the window close button
/// requests exit; `main` calls `prevent_quit()` so the close button is
/// seen here instead of killing the process mid-frame.
pub struct Keyboard;

impl Keyboard {
    fn keys(heading: Heading) -> [KeyCode; 2] {
        match heading {
            Heading::Left => [KeyCode::Left, KeyCode::A],
            Heading::Right => [KeyCode::Right, KeyCode::D],
            Heading::Up => [KeyCode::Up, KeyCode::W],
            Heading::Down => [KeyCode::Down, KeyCode::S],
        }
    }
}

impl InputSource for Keyboard {
    fn direction_pressed(&self, heading: Heading) -> bool {
        Self::keys(heading).iter().any(|&key| is_key_pressed(key))
    }

    fn direction_held(&self, heading: Heading) -> bool {
        Self::keys(heading).iter().any(|&key| is_key_down(key))
    }

    fn exit_requested(&self) -> bool {
        is_key_pressed(KeyCode::Escape) || is_quit_requested()
    }
}

/// Draws the sprite bank on the cell grid. Sprites are cell-sized except
/// the background, which covers the window.
pub struct ScreenCanvas {
    sprites: SpriteBank,
    font: Option<Font>,
    cell_px: f32,
    window_w: f32,
    window_h: f32,
}

impl ScreenCanvas {
    pub fn new(config: &GameConfig, sprites: SpriteBank, font: Option<Font>) -> Self {
        Self {
            sprites,
            font,
            cell_px: config.cell_px as f32,
            window_w: (config.grid_width * config.cell_px) as f32,
            window_h: (config.grid_height * config.cell_px) as f32,
        }
    }
}

impl Canvas for ScreenCanvas {
    fn draw_sprite(&mut self, sprite: SpriteId, x: f32, y: f32) {
        match sprite {
            SpriteId::Background => {
                self.sprites
                    .draw(sprite, 0.0, 0.0, self.window_w, self.window_h)
            }
            _ => self.sprites.draw(sprite, x, y, self.cell_px, self.cell_px),
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32) {
        draw_text_ex(
            text,
            x,
            y,
            TextParams {
                font: self.font.as_ref(),
                font_size: size as u16,
                color: WHITE,
                ..Default::default()
            },
        );
    }

    fn present(&mut self) {
        // macroquad flips in next_frame(); draws above went straight out.
    }
}

pub struct Speaker {
    sounds: SoundBank,
    volume: f32,
}

impl Speaker {
    pub fn new(config: &GameConfig, sounds: SoundBank) -> Self {
        Self {
            sounds,
            volume: config.volume,
        }
    }
}

impl AudioSink for Speaker {
    fn play(&mut self, cue: SoundCue) {
        // Slots that failed to load stay silent.
        if let Some(sound) = self.sounds.get(cue) {
            play_sound(
                sound,
                PlaySoundParams {
                    looped: false,
                    volume: self.volume,
                },
            );
        }
    }
}
