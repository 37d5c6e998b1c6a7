//! Round State and Rules
//!
//! One round of play: the player advances on the fixed logic cadence, the
//! tail follows as a shift register, and the round ends on a wall, the
//! tail, or the rotten apple. Apple contact is detected every frame but
//! paid out at the draw cadence, matching the feel the game was tuned for.

use rand::rngs::StdRng;
use rand::Rng;

use crate::config::GameConfig;
use crate::game::events::EventQueue;
use crate::game::grid::{GridPos, Heading};
use crate::game::tail::Tail;
use crate::platform::SoundCue;

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverReason {
    OutOfBounds,
    SelfCollision,
    RottenApple,
    Quit,
}

impl OverReason {
    pub fn label(self) -> &'static str {
        match self {
            OverReason::OutOfBounds => "left the playfield",
            OverReason::SelfCollision => "ran into the tail",
            OverReason::RottenApple => "ate a rotten apple",
            OverReason::Quit => "quit",
        }
    }
}

/// Playing, or finished for good. Once `Over`, nothing in the round
/// mutates again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Over(OverReason),
}

/// Full state of one round plus the rules that advance it.
///
/// The round owns its RNG so apple placement is deterministic under a
/// seeded test and the session stays free of randomness.
pub struct Round {
    grid_width: i32,
    grid_height: i32,
    rotten_threshold: u32,

    player: GridPos,
    heading: Heading,
    tail: Tail,
    apple: GridPos,
    rotten_apple: GridPos,
    score: u32,
    state: RoundState,
    /// Apple contact seen by the frame check, not yet paid out.
    apple_pending: bool,

    rng: StdRng,
    /// Sound cues awaiting the session's per-frame drain.
    pub sounds: EventQueue<SoundCue>,
}

impl Round {
    pub fn new(config: &GameConfig, mut rng: StdRng) -> Self {
        let start = GridPos::new(0, 0);
        let cells = (config.grid_width * config.grid_height) as usize;
        let apple = random_cell(&mut rng, config.grid_width, config.grid_height);
        let rotten_apple = random_cell(&mut rng, config.grid_width, config.grid_height);
        Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            rotten_threshold: config.rotten_threshold,
            player: start,
            heading: Heading::Right,
            tail: Tail::new(cells, start),
            apple,
            rotten_apple,
            score: 0,
            state: RoundState::Playing,
            apple_pending: false,
            rng,
            sounds: EventQueue::new(),
        }
    }

    pub fn player(&self) -> GridPos {
        self.player
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn tail(&self) -> &Tail {
        &self.tail
    }

    pub fn apple(&self) -> GridPos {
        self.apple
    }

    pub fn rotten_apple(&self) -> GridPos {
        self.rotten_apple
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// The rotten apple is shown and lethal only from this score on.
    pub fn rotten_active(&self) -> bool {
        self.score >= self.rotten_threshold
    }

    /// Apply this frame's steering requests in `Heading::ALL` order; the
    /// last accepted request wins. A request opposite to the heading held
    /// at the start of the pass is ignored, so a single pass can never
    /// turn the player back into its own tail.
    pub fn steer<F: Fn(Heading) -> bool>(&mut self, requested: F) {
        if self.state != RoundState::Playing {
            return;
        }
        let before = self.heading;
        for heading in Heading::ALL {
            if requested(heading) && !heading.is_opposite(before) {
                self.heading = heading;
            }
        }
    }

    /// One fixed logic step: shift the tail, then advance the player one
    /// cell along the heading. Ends the round instead when a tail segment
    /// already sits on the player's cell, which is how the previous step's
    /// advance into the tail becomes visible. The check runs against the
    /// pre-shift segments, because after the shift the player's cell
    /// legitimately holds segment 0.
    pub fn logic_tick(&mut self) {
        if self.state != RoundState::Playing {
            return;
        }
        let head_cell = self.player;
        if self.tail.occupies(head_cell) {
            self.finish(OverReason::SelfCollision);
            return;
        }
        self.tail.shift(head_cell);
        self.player = head_cell.stepped(self.heading);
    }

    /// Every-frame checks, independent of both cadences: apple contact is
    /// latched for the next draw tick, rotten-apple and bounds contact end
    /// the round at once.
    pub fn frame_checks(&mut self) {
        if self.state != RoundState::Playing {
            return;
        }
        if self.player == self.apple {
            self.apple_pending = true;
        }
        if self.rotten_active() && self.player == self.rotten_apple {
            self.finish(OverReason::RottenApple);
            return;
        }
        if !self.in_bounds(self.player) {
            self.finish(OverReason::OutOfBounds);
        }
    }

    /// Pay out a latched apple: relocate it, bump the score, grow the
    /// tail, relocate the rotten apple, cue the eat sound. Runs at the
    /// draw cadence; returns the new score when something was paid out.
    pub fn settle_apple(&mut self) -> Option<u32> {
        if self.state != RoundState::Playing || !self.apple_pending {
            return None;
        }
        self.apple_pending = false;
        self.apple = random_cell(&mut self.rng, self.grid_width, self.grid_height);
        self.score += 1;
        self.tail.grow();
        self.rotten_apple = random_cell(&mut self.rng, self.grid_width, self.grid_height);
        self.sounds.send(SoundCue::Eat);
        Some(self.score)
    }

    /// End of round by the player's own exit request; no terminal cue.
    pub fn quit(&mut self) {
        if self.state == RoundState::Playing {
            self.state = RoundState::Over(OverReason::Quit);
        }
    }

    fn finish(&mut self, reason: OverReason) {
        self.state = RoundState::Over(reason);
        self.sounds.send(SoundCue::GameOver);
    }

    fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < self.grid_width && pos.y >= 0 && pos.y < self.grid_height
    }
}

#[cfg(test)]
impl Round {
    pub fn place_player(&mut self, pos: GridPos) {
        self.player = pos;
    }

    pub fn place_apple(&mut self, pos: GridPos) {
        self.apple = pos;
    }

    pub fn place_rotten_apple(&mut self, pos: GridPos) {
        self.rotten_apple = pos;
    }

    pub fn force_score(&mut self, score: u32) {
        self.score = score;
    }
}

fn random_cell(rng: &mut StdRng, grid_width: i32, grid_height: i32) -> GridPos {
    GridPos::new(rng.gen_range(0..grid_width), rng.gen_range(0..grid_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_round() -> Round {
        Round::new(&GameConfig::default(), StdRng::seed_from_u64(7))
    }

    fn in_grid(round: &Round, pos: GridPos) -> bool {
        pos.x >= 0 && pos.x < round.grid_width && pos.y >= 0 && pos.y < round.grid_height
    }

    #[test]
    fn test_new_round_initial_state() {
        let round = test_round();
        assert_eq!(round.player(), GridPos::new(0, 0));
        assert_eq!(round.heading(), Heading::Right);
        assert_eq!(round.score(), 0);
        assert!(round.tail().is_empty());
        assert_eq!(round.state(), RoundState::Playing);
        assert!(in_grid(&round, round.apple()));
        assert!(in_grid(&round, round.rotten_apple()));
    }

    #[test]
    fn test_steer_single_direction() {
        let mut round = test_round();
        round.steer(|h| h == Heading::Down);
        assert_eq!(round.heading(), Heading::Down);
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut round = test_round();
        round.steer(|h| h == Heading::Left);
        assert_eq!(round.heading(), Heading::Right);
    }

    #[test]
    fn test_steer_last_checked_wins() {
        let mut round = test_round();
        // Up and Down both held while travelling Right: Down is polled
        // after Up and neither reverses Right, so Down wins.
        round.steer(|h| h == Heading::Up || h == Heading::Down);
        assert_eq!(round.heading(), Heading::Down);
    }

    #[test]
    fn test_steer_cannot_reverse_through_a_pair() {
        let mut round = test_round();
        round.steer(|h| h == Heading::Up);
        assert_eq!(round.heading(), Heading::Up);

        // Left plus Down in one pass: Down reverses the pass-start heading
        // and is dropped even though Left was accepted first.
        round.steer(|h| h == Heading::Left || h == Heading::Down);
        assert_eq!(round.heading(), Heading::Left);
    }

    #[test]
    fn test_logic_tick_advances_one_cell() {
        let mut round = test_round();
        round.logic_tick();
        assert_eq!(round.player(), GridPos::new(1, 0));
        round.logic_tick();
        assert_eq!(round.player(), GridPos::new(2, 0));
    }

    #[test]
    fn test_tail_follows_and_length_tracks_score() {
        let mut round = test_round();

        round.place_apple(GridPos::new(1, 0));
        round.logic_tick();
        round.frame_checks();
        assert_eq!(round.settle_apple(), Some(1));
        assert_eq!(round.tail().segments(), &[GridPos::new(0, 0)]);

        round.place_apple(GridPos::new(2, 0));
        round.logic_tick();
        round.frame_checks();
        assert_eq!(round.settle_apple(), Some(2));
        assert_eq!(
            round.tail().segments(),
            &[GridPos::new(1, 0), GridPos::new(0, 0)]
        );

        round.steer(|h| h == Heading::Down);
        round.logic_tick();
        assert_eq!(round.player(), GridPos::new(2, 1));
        assert_eq!(
            round.tail().segments(),
            &[GridPos::new(2, 0), GridPos::new(1, 0)]
        );
        assert_eq!(round.tail().len() as u32, round.score());
    }

    #[test]
    fn test_settle_without_contact_pays_nothing() {
        let mut round = test_round();
        round.place_apple(GridPos::new(9, 9));
        round.logic_tick();
        round.frame_checks();
        assert_eq!(round.settle_apple(), None);
        assert_eq!(round.score(), 0);
        assert!(round.sounds.is_empty());
    }

    #[test]
    fn test_eat_cues_sound_and_relocates() {
        let mut round = test_round();
        round.place_apple(GridPos::new(1, 0));
        round.place_rotten_apple(GridPos::new(9, 9));

        round.logic_tick();
        round.frame_checks();
        assert_eq!(round.settle_apple(), Some(1));

        let cues: Vec<_> = round.sounds.drain().collect();
        assert_eq!(cues, vec![SoundCue::Eat]);
        assert!(in_grid(&round, round.apple()));
        assert!(in_grid(&round, round.rotten_apple()));
        // Settling is a one-shot: nothing more to pay out.
        assert_eq!(round.settle_apple(), None);
    }

    #[test]
    fn test_apple_relocated_onto_player_is_eaten_again() {
        let mut round = test_round();
        round.place_apple(round.player());
        round.frame_checks();
        assert_eq!(round.settle_apple(), Some(1));
    }

    #[test]
    fn test_leaving_the_grid_ends_the_round() {
        let mut round = test_round();
        round.steer(|h| h == Heading::Up);
        round.logic_tick();
        assert_eq!(round.player(), GridPos::new(0, -1));
        round.frame_checks();
        assert_eq!(round.state(), RoundState::Over(OverReason::OutOfBounds));

        let cues: Vec<_> = round.sounds.drain().collect();
        assert_eq!(cues, vec![SoundCue::GameOver]);
    }

    #[test]
    fn test_heading_left_at_the_left_edge_leaves_the_grid() {
        let mut round = test_round();
        round.logic_tick();
        round.steer(|h| h == Heading::Down);
        round.logic_tick();
        round.steer(|h| h == Heading::Left);
        round.logic_tick();
        assert_eq!(round.player(), GridPos::new(0, 1));
        round.frame_checks();
        assert_eq!(round.state(), RoundState::Playing);

        round.logic_tick();
        assert_eq!(round.player(), GridPos::new(-1, 1));
        round.frame_checks();
        assert_eq!(round.state(), RoundState::Over(OverReason::OutOfBounds));
    }

    #[test]
    fn test_tail_grows_in_step_with_score_over_a_long_run() {
        let mut round = test_round();
        let parked = GridPos::new(31, 23);
        round.place_apple(parked);

        // Serpentine across the rows for 60 ticks, feeding the apple into
        // the player's path on the first eight third ticks. Eight eats keep
        // the rotten apple inert wherever its relocations land.
        let mut fed = 0;
        let mut prev = round.player();
        for tick in 0..60 {
            let x = round.player().x;
            match round.heading() {
                Heading::Right if x == 31 => round.steer(|h| h == Heading::Down),
                Heading::Left if x == 0 => round.steer(|h| h == Heading::Down),
                Heading::Down if x == 31 => round.steer(|h| h == Heading::Left),
                Heading::Down => round.steer(|h| h == Heading::Right),
                _ => {}
            }
            if tick % 3 == 0 && fed < 8 {
                round.place_apple(round.player().stepped(round.heading()));
                fed += 1;
            }

            round.logic_tick();
            round.frame_checks();
            round.settle_apple();
            round.place_apple(parked);

            assert_eq!(round.state(), RoundState::Playing, "tick {}", tick);
            let cells_moved =
                (round.player().x - prev.x).abs() + (round.player().y - prev.y).abs();
            assert_eq!(cells_moved, 1, "tick {}", tick);
            assert_eq!(round.tail().len() as u32, round.score(), "tick {}", tick);
            prev = round.player();
        }
        assert_eq!(round.score(), 8);
    }

    #[test]
    fn test_self_collision_detected_before_the_shift() {
        let mut round = test_round();
        // Five segments, the way a score-5 round would have laid them out.
        for x in 1..=5 {
            round.tail.shift(GridPos::new(x, 0));
            round.tail.grow();
        }
        round.force_score(5);

        let hit = round.tail().segments()[3];
        round.place_player(hit);
        round.logic_tick();

        assert_eq!(round.state(), RoundState::Over(OverReason::SelfCollision));
        // The tick stopped at detection: no movement, no shift.
        assert_eq!(round.player(), hit);
        assert_eq!(round.tail().len(), 5);
    }

    #[test]
    fn test_rotten_apple_inert_below_threshold() {
        let mut round = test_round();
        round.place_rotten_apple(round.player());
        round.frame_checks();
        assert_eq!(round.state(), RoundState::Playing);
    }

    #[test]
    fn test_rotten_apple_ends_round_at_threshold() {
        let mut round = test_round();
        round.force_score(10);
        assert!(round.rotten_active());
        round.place_rotten_apple(round.player());
        round.frame_checks();
        assert_eq!(round.state(), RoundState::Over(OverReason::RottenApple));
    }

    #[test]
    fn test_nothing_mutates_after_over() {
        let mut round = test_round();
        round.steer(|h| h == Heading::Up);
        round.logic_tick();
        round.frame_checks();
        assert_eq!(round.state(), RoundState::Over(OverReason::OutOfBounds));
        round.sounds.drain().count();

        let player = round.player();
        let heading = round.heading();
        let score = round.score();
        let apple = round.apple();

        round.steer(|_| true);
        round.logic_tick();
        round.frame_checks();
        assert_eq!(round.settle_apple(), None);
        round.quit();

        assert_eq!(round.player(), player);
        assert_eq!(round.heading(), heading);
        assert_eq!(round.score(), score);
        assert_eq!(round.apple(), apple);
        assert_eq!(round.state(), RoundState::Over(OverReason::OutOfBounds));
        assert!(round.sounds.is_empty());
    }

    #[test]
    fn test_quit_sets_over_without_a_cue() {
        let mut round = test_round();
        round.quit();
        assert_eq!(round.state(), RoundState::Over(OverReason::Quit));
        assert!(round.sounds.is_empty());
    }

    #[test]
    fn test_same_seed_places_identically() {
        let config = GameConfig::default();
        let mut a = Round::new(&config, StdRng::seed_from_u64(99));
        let mut b = Round::new(&config, StdRng::seed_from_u64(99));
        assert_eq!(a.apple(), b.apple());
        assert_eq!(a.rotten_apple(), b.rotten_apple());

        for round in [&mut a, &mut b] {
            round.place_apple(round.player());
            round.frame_checks();
            round.settle_apple();
        }
        assert_eq!(a.apple(), b.apple());
        assert_eq!(a.rotten_apple(), b.rotten_apple());
    }
}
