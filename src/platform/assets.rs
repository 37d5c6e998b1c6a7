//! Sprite and Sound Banks
//!
//! Loads the game's eight sprites and two sound effects from `assets/`,
//! falling back to generated stand-ins when a file is missing or broken:
//! sprites get a 16x16 pixel-art placeholder, sounds get a synthesized
//! sine beep. A load failure is reported and never fatal, so the game
//! runs (silently, or with placeholder art) from a bare checkout.

use macroquad::audio::{load_sound, load_sound_from_bytes, Sound};
use macroquad::prelude::*;

use crate::platform::{SoundCue, SpriteId};

/// Side length of generated placeholder sprites, in texels.
const FALLBACK_SIDE: u16 = 16;

type Rgba = [u8; 4];

const GRASS: Rgba = [28, 34, 26, 255];
const SNAKE: Rgba = [80, 170, 60, 255];
const SNAKE_EDGE: Rgba = [40, 95, 35, 255];
const EYE: Rgba = [15, 15, 15, 255];
const APPLE_RED: Rgba = [205, 40, 40, 255];
const APPLE_STEM: Rgba = [95, 60, 20, 255];
const ROT_BASE: Rgba = [120, 100, 35, 255];
const ROT_BLOTCH: Rgba = [70, 55, 20, 255];
const CLEAR: Rgba = [0, 0, 0, 0];

/// All textures, indexed by `SpriteId` discriminant.
pub struct SpriteBank {
    textures: Vec<Texture2D>,
}

impl SpriteBank {
    pub async fn load() -> Self {
        let mut textures = Vec::with_capacity(SpriteId::ALL.len());
        for sprite in SpriteId::ALL {
            let path = format!("assets/sprites/{}.png", sprite.asset_name());
            let texture = match load_texture(&path).await {
                Ok(texture) => texture,
                Err(e) => {
                    eprintln!("Failed to load sprite {}: {}", path, e);
                    fallback_texture(sprite)
                }
            };
            texture.set_filter(FilterMode::Nearest);
            textures.push(texture);
        }
        Self { textures }
    }

    /// Draw `sprite` with its top-left corner at `(x, y)`, stretched to
    /// `w` by `h` pixels.
    pub fn draw(&self, sprite: SpriteId, x: f32, y: f32, w: f32, h: f32) {
        draw_texture_ex(
            &self.textures[sprite as usize],
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                ..Default::default()
            },
        );
    }
}

fn fallback_texture(sprite: SpriteId) -> Texture2D {
    Texture2D::from_rgba8(FALLBACK_SIDE, FALLBACK_SIDE, &fallback_pixels(sprite))
}

/// RGBA buffer of the placeholder art for one sprite.
fn fallback_pixels(sprite: SpriteId) -> Vec<u8> {
    let side = FALLBACK_SIDE as i32;
    let mut buf = vec![0u8; (side * side * 4) as usize];
    match sprite {
        SpriteId::Background => fill(&mut buf, GRASS),
        SpriteId::Body => {
            fill(&mut buf, SNAKE_EDGE);
            rect(&mut buf, 1, 1, side - 2, side - 2, SNAKE);
        }
        SpriteId::HeadUp => head(&mut buf, (4, 3), (10, 3)),
        SpriteId::HeadDown => head(&mut buf, (4, 11), (10, 11)),
        SpriteId::HeadLeft => head(&mut buf, (3, 4), (3, 10)),
        SpriteId::HeadRight => head(&mut buf, (11, 4), (11, 10)),
        SpriteId::Apple => {
            fill(&mut buf, CLEAR);
            disc(&mut buf, 8, 9, 6, APPLE_RED);
            rect(&mut buf, 7, 1, 2, 3, APPLE_STEM);
        }
        SpriteId::RottenApple => {
            fill(&mut buf, CLEAR);
            disc(&mut buf, 8, 9, 6, ROT_BASE);
            rect(&mut buf, 5, 7, 2, 2, ROT_BLOTCH);
            rect(&mut buf, 9, 10, 3, 2, ROT_BLOTCH);
            rect(&mut buf, 7, 1, 2, 3, APPLE_STEM);
        }
    }
    buf
}

/// Snake head: body tile plus a pair of eyes toward the travel edge.
fn head(buf: &mut [u8], eye_a: (i32, i32), eye_b: (i32, i32)) {
    let side = FALLBACK_SIDE as i32;
    fill(buf, SNAKE_EDGE);
    rect(buf, 1, 1, side - 2, side - 2, SNAKE);
    rect(buf, eye_a.0, eye_a.1, 2, 2, EYE);
    rect(buf, eye_b.0, eye_b.1, 2, 2, EYE);
}

fn fill(buf: &mut [u8], color: Rgba) {
    for texel in buf.chunks_exact_mut(4) {
        texel.copy_from_slice(&color);
    }
}

fn rect(buf: &mut [u8], x: i32, y: i32, w: i32, h: i32, color: Rgba) {
    for py in y..y + h {
        for px in x..x + w {
            put(buf, px, py, color);
        }
    }
}

fn disc(buf: &mut [u8], cx: i32, cy: i32, r: i32, color: Rgba) {
    let side = FALLBACK_SIDE as i32;
    for py in 0..side {
        for px in 0..side {
            let dx = px - cx;
            let dy = py - cy;
            if dx * dx + dy * dy <= r * r {
                put(buf, px, py, color);
            }
        }
    }
}

fn put(buf: &mut [u8], x: i32, y: i32, color: Rgba) {
    let side = FALLBACK_SIDE as i32;
    if x < 0 || x >= side || y < 0 || y >= side {
        return;
    }
    let at = ((y * side + x) * 4) as usize;
    buf[at..at + 4].copy_from_slice(&color);
}

/// All sound effects, indexed by `SoundCue` discriminant. A slot is `None`
/// when both the file and the synthesized fallback failed to decode; the
/// speaker then skips that cue.
pub struct SoundBank {
    sounds: Vec<Option<Sound>>,
}

impl SoundBank {
    pub async fn load() -> Self {
        let mut sounds = Vec::with_capacity(SoundCue::ALL.len());
        for cue in SoundCue::ALL {
            let path = format!("assets/sounds/{}.wav", cue.asset_name());
            let sound = match load_sound(&path).await {
                Ok(sound) => Some(sound),
                Err(e) => {
                    eprintln!("Failed to load sound {}: {}", path, e);
                    match load_sound_from_bytes(&fallback_wav(cue)).await {
                        Ok(sound) => Some(sound),
                        Err(e) => {
                            eprintln!("Failed to decode fallback beep for {}: {}", path, e);
                            None
                        }
                    }
                }
            };
            sounds.push(sound);
        }
        Self { sounds }
    }

    pub fn get(&self, cue: SoundCue) -> Option<&Sound> {
        self.sounds[cue as usize].as_ref()
    }
}

fn fallback_wav(cue: SoundCue) -> Vec<u8> {
    match cue {
        SoundCue::Eat => sine_wav(880.0, 0.08, 0.6),
        SoundCue::GameOver => sine_wav(110.0, 0.4, 0.7),
    }
}

/// A mono 16-bit 44.1 kHz WAV of a sine tone with a linear fade-out.
fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 44100;
    let num_samples = (duration_seconds * SAMPLE_RATE as f32) as u32;
    let data_size = num_samples * 2;
    let mut data = Vec::with_capacity(44 + data_size as usize);

    // RIFF header, then a single PCM fmt chunk: mono, 16-bit.
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes());
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&(SAMPLE_RATE * 2).to_le_bytes());
    data.extend_from_slice(&2u16.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let fade = 1.0 - n as f32 / num_samples as f32;
        let sample =
            (amplitude * fade * (std::f32::consts::TAU * frequency_hz * t).sin() * i16::MAX as f32)
                as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}
