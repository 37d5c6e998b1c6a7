//! NIBBLES: a small real-time snake arcade game
//!
//! Classic rules on a fixed grid: eat apples, grow, avoid the walls and
//! your own tail, and from ten points on, the rotten apple too. Logic
//! runs on a fixed 0.1 s step, drawing at 60 Hz, input resolving every
//! frame in between.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod platform;

use std::sync::OnceLock;

use macroquad::prelude::*;
// The prelude glob carries macroquad's own `rand` module, so these two
// name the crate from the root.
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use config::GameConfig;
use game::{FrameOutcome, Round, Session};
use platform::assets::{SoundBank, SpriteBank};
use platform::backend::{FrameClock, Keyboard, ScreenCanvas, Speaker};
use platform::icon::window_icon;

/// The config file is read once; `window_conf` runs before `main`, so
/// both go through this accessor.
fn config() -> &'static GameConfig {
    static CONFIG: OnceLock<GameConfig> = OnceLock::new();
    CONFIG.get_or_init(GameConfig::load_or_default)
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: format!("NIBBLES v{}", VERSION),
        window_width: config.grid_width * config.cell_px,
        window_height: config.grid_height * config.cell_px,
        window_resizable: false,
        high_dpi: true,
        icon: Some(window_icon()),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    println!(
        "NIBBLES v{} ({}x{} cells)",
        VERSION, config.grid_width, config.grid_height
    );

    // Catch the close button so the round ends through its own exit path.
    prevent_quit();

    let sprites = SpriteBank::load().await;
    let sounds = SoundBank::load().await;
    let font = match load_ttf_font("assets/fonts/nibbles.ttf").await {
        Ok(font) => Some(font),
        Err(e) => {
            println!("Failed to load font: {}, using the built-in one", e);
            None
        }
    };

    let round = Round::new(config, StdRng::seed_from_u64(get_time().to_bits()));
    let mut session = Session::new(
        config,
        round,
        FrameClock,
        Keyboard,
        ScreenCanvas::new(config, sprites, font),
        Speaker::new(config, sounds),
    );

    loop {
        if session.frame() == FrameOutcome::Exit {
            break;
        }

        // Give the core back for a moment even when vsync is off.
        #[cfg(not(target_arch = "wasm32"))]
        std::thread::sleep(std::time::Duration::from_millis(1));

        next_frame().await;
    }

    println!("Final score: {}", session.round().score());
}
