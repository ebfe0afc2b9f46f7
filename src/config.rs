//! Tuning constants and the runtime [`GameConfig`] built from them.

use crate::error::GameError;

// --- Physics -----------------------------------------------------------------
pub const GRAVITY: f64 = 0.5;
pub const JUMP_FORCE: f64 = -12.0;
pub const GROUND_FRICTION: f64 = 0.8;

// --- Player ------------------------------------------------------------------
pub const PLAYER_SIZE: f64 = 30.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const MAX_JUMPS: u32 = 2;
pub const PLAYER_COLOR: &str = "#02C6AF";
/// Shown while a collected powerup is in effect.
pub const ALERT_COLOR: &str = "#FF3B5C";

// --- Ground ------------------------------------------------------------------
pub const GROUND_HEIGHT: f64 = 50.0;
pub const GROUND_COLOR: &str = "#333";

// --- Particles ---------------------------------------------------------------
pub const BURST_COUNT: usize = 30;
pub const PARTICLE_LIFE_DECAY: f64 = 0.02;
pub const PARTICLE_SHRINK: f64 = 0.99;
pub const PARTICLE_SIZE_MIN: f64 = 2.0;
pub const PARTICLE_SIZE_MAX: f64 = 6.0;
pub const PARTICLE_SPEED: f64 = 4.0;
pub const PARTICLE_HUE_MIN: f64 = 200.0; // blue
pub const PARTICLE_HUE_MAX: f64 = 260.0; // purple

// --- Powerup -----------------------------------------------------------------
pub const POWERUP_SIZE: f64 = 20.0;
pub const POWERUP_SPEED: f64 = 2.0;
pub const POWERUP_COLOR: &str = "#FFD166";
pub const COLOR_REVERT_MS: f64 = 5_000.0;
pub const POWERUP_RESPAWN_MS: f64 = 3_000.0;

// --- Canvas ------------------------------------------------------------------
pub const CANVAS_ID: &str = "gameCanvas";
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;

/// Every tunable the simulation reads. Speeds are in pixels per tick,
/// delays in milliseconds of wall-clock time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub gravity: f64,
    pub jump_force: f64,
    pub friction: f64,
    pub player_size: f64,
    pub player_speed: f64,
    pub max_jumps: u32,
    pub player_color: String,
    pub alert_color: String,
    pub ground_height: f64,
    pub ground_color: String,
    pub burst_count: usize,
    pub particle_life_decay: f64,
    pub particle_shrink: f64,
    pub particle_size_min: f64,
    pub particle_size_max: f64,
    pub particle_speed: f64,
    pub particle_hue_min: f64,
    pub particle_hue_max: f64,
    pub powerup_size: f64,
    pub powerup_speed: f64,
    pub powerup_color: String,
    pub color_revert_ms: f64,
    pub powerup_respawn_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            friction: GROUND_FRICTION,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            max_jumps: MAX_JUMPS,
            player_color: PLAYER_COLOR.to_string(),
            alert_color: ALERT_COLOR.to_string(),
            ground_height: GROUND_HEIGHT,
            ground_color: GROUND_COLOR.to_string(),
            burst_count: BURST_COUNT,
            particle_life_decay: PARTICLE_LIFE_DECAY,
            particle_shrink: PARTICLE_SHRINK,
            particle_size_min: PARTICLE_SIZE_MIN,
            particle_size_max: PARTICLE_SIZE_MAX,
            particle_speed: PARTICLE_SPEED,
            particle_hue_min: PARTICLE_HUE_MIN,
            particle_hue_max: PARTICLE_HUE_MAX,
            powerup_size: POWERUP_SIZE,
            powerup_speed: POWERUP_SPEED,
            powerup_color: POWERUP_COLOR.to_string(),
            color_revert_ms: COLOR_REVERT_MS,
            powerup_respawn_ms: POWERUP_RESPAWN_MS,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GameError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("player_size", self.player_size),
            ("powerup_size", self.powerup_size),
            ("particle_size_min", self.particle_size_min),
            ("particle_life_decay", self.particle_life_decay),
            // Bursts sample velocities from -speed..speed.
            ("particle_speed", self.particle_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(GameError::InvalidConfig(format!("{name} must be > 0, got {value}")));
            }
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(GameError::InvalidConfig(format!(
                "friction must be within 0..=1, got {}",
                self.friction
            )));
        }
        if self.max_jumps == 0 {
            return Err(GameError::InvalidConfig("max_jumps must be at least 1".into()));
        }
        let ranges = [
            ("particle_size", self.particle_size_min, self.particle_size_max),
            ("particle_hue", self.particle_hue_min, self.particle_hue_max),
        ];
        for (name, lo, hi) in ranges {
            if !(lo < hi) {
                return Err(GameError::InvalidConfig(format!("{name} range {lo}..{hi} is empty")));
            }
        }
        if self.color_revert_ms < 0.0 || self.powerup_respawn_ms < 0.0 {
            return Err(GameError::InvalidConfig("delays must not be negative".into()));
        }
        Ok(())
    }
}
