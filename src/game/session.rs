//! Session Driver
//!
//! Owns one round plus the injected platform services and advances the
//! whole game a single displayed frame at a time. The pipeline per frame:
//! exit check, steering, feed both schedules, logic step if due,
//! consumption payout when the draw cadence fires, a full draw pass,
//! every-frame collision checks, sound-cue drain, end-of-round
//! bookkeeping. The driver loop in `main` only repeats `frame()` and
//! yields; everything observable happens in here, which is what makes the
//! game testable without a window.

use crate::config::GameConfig;
use crate::game::grid::GridPos;
use crate::game::round::{OverReason, Round, RoundState};
use crate::game::scheduler::FixedRate;
use crate::platform::{AudioSink, Canvas, Clock, InputSource, SpriteId};

/// Score readout position and size, in window pixels.
const SCORE_POS: (f32, f32) = (8.0, 24.0);
const SCORE_SIZE: f32 = 24.0;
const BANNER_SIZE: f32 = 32.0;

/// What the driver loop should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Exit,
}

pub struct Session<C, I, R, A> {
    clock: C,
    input: I,
    canvas: R,
    audio: A,

    round: Round,
    logic: FixedRate,
    render: FixedRate,

    cell_px: f32,
    window_w: f32,
    window_h: f32,

    /// How long the final frame stays up before the loop exits.
    over_hold: f32,
    over_elapsed: f32,
    over_announced: bool,
}

impl<C: Clock, I: InputSource, R: Canvas, A: AudioSink> Session<C, I, R, A> {
    pub fn new(config: &GameConfig, round: Round, clock: C, input: I, canvas: R, audio: A) -> Self {
        Self {
            clock,
            input,
            canvas,
            audio,
            round,
            logic: FixedRate::new(config.logic_interval),
            render: FixedRate::new(config.render_interval),
            cell_px: config.cell_px as f32,
            window_w: (config.grid_width * config.cell_px) as f32,
            window_h: (config.grid_height * config.cell_px) as f32,
            over_hold: config.over_hold,
            over_elapsed: 0.0,
            over_announced: false,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    #[cfg(test)]
    pub fn round_mut(&mut self) -> &mut Round {
        &mut self.round
    }

    /// Advance one displayed frame; `Exit` when the loop should stop.
    pub fn frame(&mut self) -> FrameOutcome {
        // ===== Exit request =====
        if self.input.exit_requested() {
            self.round.quit();
            return FrameOutcome::Exit;
        }

        // ===== Steering =====
        let input = &self.input;
        self.round
            .steer(|h| input.direction_pressed(h) || input.direction_held(h));

        // ===== Schedules =====
        let delta = self.clock.delta_seconds();
        let logic_due = self.logic.tick(delta);
        let render_due = self.render.tick(delta);

        // ===== Logic step =====
        if logic_due {
            self.round.logic_tick();
        }

        // ===== Consumption payout =====
        if render_due {
            if let Some(score) = self.round.settle_apple() {
                println!("Score: {}", score);
            }
        }

        // ===== Draw pass =====
        // The live canvas starts every frame cleared, so the scene is
        // reissued every frame; only the payout above follows the draw
        // cadence, and state still mutates only on ticks.
        self.draw();

        // ===== Frame checks =====
        self.round.frame_checks();

        // ===== Sound cues =====
        for cue in self.round.sounds.drain() {
            self.audio.play(cue);
        }

        // ===== End of round =====
        match self.round.state() {
            RoundState::Playing => FrameOutcome::Continue,
            RoundState::Over(OverReason::Quit) => FrameOutcome::Exit,
            RoundState::Over(reason) => {
                if !self.over_announced {
                    self.over_announced = true;
                    println!("Game over: {}", reason.label());
                }
                self.over_elapsed += delta;
                if self.over_elapsed >= self.over_hold {
                    FrameOutcome::Exit
                } else {
                    FrameOutcome::Continue
                }
            }
        }
    }

    /// One draw pass in fixed order: background, tail, player, apple,
    /// rotten apple when active, score readout, end banner when finished,
    /// present.
    fn draw(&mut self) {
        self.canvas.draw_sprite(SpriteId::Background, 0.0, 0.0);

        for i in 0..self.round.tail().len() {
            let (x, y) = self.to_px(self.round.tail().segments()[i]);
            self.canvas.draw_sprite(SpriteId::Body, x, y);
        }

        let (px, py) = self.to_px(self.round.player());
        self.canvas.draw_sprite(self.round.heading().sprite(), px, py);

        let (ax, ay) = self.to_px(self.round.apple());
        self.canvas.draw_sprite(SpriteId::Apple, ax, ay);

        if self.round.rotten_active() {
            let (rx, ry) = self.to_px(self.round.rotten_apple());
            self.canvas.draw_sprite(SpriteId::RottenApple, rx, ry);
        }

        let score_text = format!("Score: {}", self.round.score());
        self.canvas
            .draw_text(&score_text, SCORE_POS.0, SCORE_POS.1, SCORE_SIZE);

        if let RoundState::Over(reason) = self.round.state() {
            if reason != OverReason::Quit {
                let banner = format!("GAME OVER - score {}", self.round.score());
                // Default-font glyphs run about half the point size wide.
                let approx_w = banner.len() as f32 * BANNER_SIZE * 0.5;
                let x = (self.window_w - approx_w) * 0.5;
                self.canvas
                    .draw_text(&banner, x, self.window_h * 0.5, BANNER_SIZE);
            }
        }

        self.canvas.present();
    }

    fn to_px(&self, pos: GridPos) -> (f32, f32) {
        (pos.x as f32 * self.cell_px, pos.y as f32 * self.cell_px)
    }
}
