//! Simulation core: a [`World`] owns every piece of game state and advances it
//! one tick at a time from an [`InputSnapshot`] and a monotonic millisecond clock.
//! Nothing in here touches the DOM except the `browser` driver and the canvas
//! [`Surface`] impl.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;

mod browser;
mod input;
mod particles;
mod player;
mod powerup;
mod render;
mod schedule;

pub use browser::start_game_mode;
pub use input::{InputSnapshot, InputTracker, KeyEvent, LogicalKey};
pub use particles::{Particle, ParticleSet};
pub use player::{Jump, Player};
pub use powerup::{Powerup, PowerupPhase};
pub use render::{Surface, draw_world};
pub use schedule::{Schedule, TimedAction};

/// Drawing surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Top edge of the ground strip.
    pub fn ground_y(&self, config: &GameConfig) -> f64 {
        self.height - config.ground_height
    }
}

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap; rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Runtime game state.
pub struct World {
    config: GameConfig,
    bounds: Bounds,
    player: Player,
    particles: ParticleSet,
    powerup: Powerup,
    schedule: Schedule,
    rng: StdRng,
}

impl World {
    /// World seeded from the platform entropy source.
    pub fn new(config: GameConfig, bounds: Bounds) -> Self {
        Self::with_rng(config, bounds, StdRng::from_entropy())
    }

    /// Deterministic world for tests and replays.
    pub fn with_seed(config: GameConfig, bounds: Bounds, seed: u64) -> Self {
        Self::with_rng(config, bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, bounds: Bounds, mut rng: StdRng) -> Self {
        let player = Player::new(&config, bounds);
        let powerup = Powerup::new(&config, bounds, &mut rng);
        Self {
            config,
            bounds,
            player,
            particles: ParticleSet::new(),
            powerup,
            schedule: Schedule::new(),
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn powerup(&self) -> &Powerup {
        &self.powerup
    }

    pub fn powerup_mut(&mut self) -> &mut Powerup {
        &mut self.powerup
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Adopt new surface dimensions. The powerup is pulled back inside at once;
    /// the player is clamped by its next tick.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds != self.bounds {
            log::debug!("surface resized to {}x{}", bounds.width, bounds.height);
            self.bounds = bounds;
            self.powerup.clamp_x(bounds);
        }
    }

    /// Emit a particle burst centered on the player.
    pub fn burst_at_player(&mut self) {
        let (cx, cy) = self.player.center();
        self.particles.burst(cx, cy, &self.config, &mut self.rng);
        log::debug!("burst at ({cx:.1}, {cy:.1}), {} particles live", self.particles.len());
    }

    /// Handle one fresh jump press. The second jump of a sequence bursts.
    pub fn jump(&mut self) -> Jump {
        let outcome = self.player.jump(&self.config);
        if outcome == Jump::Performed(2) {
            self.burst_at_player();
        }
        outcome
    }

    /// One full simulation step at wall-clock time `now_ms`.
    pub fn tick(&mut self, input: &InputSnapshot, now_ms: f64) {
        for action in self.schedule.take_due(now_ms) {
            self.fire(action, now_ms);
        }

        for _ in 0..input.jumps {
            self.jump();
        }
        let jumps_before = self.player.jump_count;
        if self.player.update(input, &self.config, self.bounds) && jumps_before > 0 {
            log::trace!("landed after {jumps_before} jump(s)");
        }
        self.particles.update(&self.config);

        if self.powerup.update(self.player.rect(), self.bounds, &mut self.rng) {
            self.on_powerup_collected(now_ms);
        }
    }

    fn on_powerup_collected(&mut self, now_ms: f64) {
        self.player.color = self.config.alert_color.clone();
        // Drop any stale timers before arming the revert.
        if self.schedule.cancel(TimedAction::RespawnPowerup) {
            log::debug!("pending powerup respawn cancelled");
        }
        self.schedule
            .schedule(TimedAction::RevertPlayerColor, now_ms + self.config.color_revert_ms);
        log::info!("powerup collected at {now_ms:.0}ms");
    }

    fn fire(&mut self, action: TimedAction, now_ms: f64) {
        match action {
            TimedAction::RevertPlayerColor => {
                self.player.color = self.player.default_color.clone();
                self.powerup.revert();
                self.schedule
                    .schedule(TimedAction::RespawnPowerup, now_ms + self.config.powerup_respawn_ms);
                log::debug!("player color reverted at {now_ms:.0}ms");
            }
            TimedAction::RespawnPowerup => {
                self.powerup.respawn(self.bounds, &mut self.rng);
                log::debug!("powerup respawned at x={:.1}", self.powerup.x);
            }
        }
    }
}
