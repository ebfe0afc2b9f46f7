use super::{Bounds, Rect};
use super::input::InputSnapshot;
use crate::config::GameConfig;

/// The controlled square.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    pub speed: f64,
    pub color: String,
    pub default_color: String,
    pub jump_count: u32,
    pub max_jumps: u32,
}

/// Result of a jump request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Jump {
    /// Already used every jump; nothing changed.
    Refused,
    /// Jump applied; carries the new jump count.
    Performed(u32),
}

impl Player {
    /// Spawn at the center of the canvas, at rest.
    pub fn new(config: &GameConfig, bounds: Bounds) -> Self {
        Self {
            x: bounds.width / 2.0,
            y: bounds.height / 2.0,
            size: config.player_size,
            vx: 0.0,
            vy: 0.0,
            speed: config.player_speed,
            color: config.player_color.clone(),
            default_color: config.player_color.clone(),
            jump_count: 0,
            max_jumps: config.max_jumps,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.size / 2.0, self.y + self.size / 2.0)
    }

    /// Instant upward impulse; overrides any accumulated vertical velocity.
    pub fn jump(&mut self, config: &GameConfig) -> Jump {
        if self.jump_count >= self.max_jumps {
            return Jump::Refused;
        }
        self.vy = config.jump_force;
        self.jump_count += 1;
        Jump::Performed(self.jump_count)
    }

    /// One physics step. Returns true when the ground clamp fired this tick.
    pub fn update(&mut self, input: &InputSnapshot, config: &GameConfig, bounds: Bounds) -> bool {
        if input.left {
            self.vx = -self.speed;
        } else if input.right {
            self.vx = self.speed;
        } else {
            self.vx *= config.friction;
        }

        self.vy += config.gravity;

        self.x += self.vx;
        self.y += self.vy;

        let ground_y = bounds.ground_y(config);
        let mut landed = false;
        if self.y + self.size > ground_y {
            self.y = ground_y - self.size;
            self.vy = 0.0;
            self.jump_count = 0;
            landed = true;
        }

        if self.x < 0.0 {
            self.x = 0.0;
            self.vx = 0.0;
        }
        if self.x + self.size > bounds.width {
            self.x = bounds.width - self.size;
            self.vx = 0.0;
        }
        landed
    }
}
