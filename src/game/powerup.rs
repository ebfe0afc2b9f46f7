use rand::Rng;

use super::{Bounds, Rect};
use crate::config::GameConfig;

/// Where the powerup is in its collect / revert / respawn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerupPhase {
    /// Visible and dropping; can be collected.
    Falling,
    /// Picked up; player shows the alert color until the revert fires.
    Collected,
    /// Player color restored; waiting to respawn.
    Cooldown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Powerup {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub phase: PowerupPhase,
}

impl Powerup {
    /// Start falling from just above the top edge at a random column.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, bounds: Bounds, rng: &mut R) -> Self {
        let mut p = Self {
            x: 0.0,
            y: 0.0,
            size: config.powerup_size,
            speed: config.powerup_speed,
            phase: PowerupPhase::Falling,
        };
        p.respawn(bounds, rng);
        p
    }

    pub fn is_active(&self) -> bool {
        self.phase == PowerupPhase::Falling
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }

    /// Relocate above the visible area at a fresh random x and resume falling.
    pub fn respawn<R: Rng + ?Sized>(&mut self, bounds: Bounds, rng: &mut R) {
        let span = (bounds.width - self.size).max(0.0);
        self.x = if span > 0.0 { rng.gen_range(0.0..span) } else { 0.0 };
        self.y = -self.size;
        self.phase = PowerupPhase::Falling;
    }

    /// Keep the powerup horizontally inside `bounds` after a resize.
    pub fn clamp_x(&mut self, bounds: Bounds) {
        self.x = self.x.clamp(0.0, (bounds.width - self.size).max(0.0));
    }

    /// Fall one step and test against the player. Returns true on collection.
    /// Inactive powerups neither move nor collide.
    pub fn update<R: Rng + ?Sized>(&mut self, player: Rect, bounds: Bounds, rng: &mut R) -> bool {
        if !self.is_active() {
            return false;
        }
        self.y += self.speed;

        if player.overlaps(&self.rect()) {
            self.phase = PowerupPhase::Collected;
            return true;
        }

        if self.y > bounds.height {
            self.respawn(bounds, rng);
        }
        false
    }

    pub fn revert(&mut self) {
        if self.phase == PowerupPhase::Collected {
            self.phase = PowerupPhase::Cooldown;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn far_away() -> Rect {
        Rect::new(-1_000.0, -1_000.0, 1.0, 1.0)
    }

    #[test]
    fn spawns_above_screen_within_width() {
        let cfg = GameConfig::default();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let p = Powerup::new(&cfg, bounds, &mut rng);
            assert_eq!(p.y, -p.size);
            assert!(p.x >= 0.0 && p.x < bounds.width - p.size);
            assert!(p.is_active());
        }
    }

    #[test]
    fn falls_at_constant_speed_and_wraps_without_deactivating() {
        let cfg = GameConfig::default();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(11);
        let mut p = Powerup::new(&cfg, bounds, &mut rng);
        let mut last_y = p.y;
        let mut wrapped = false;
        for _ in 0..400 {
            assert!(!p.update(far_away(), bounds, &mut rng));
            if p.y < last_y {
                wrapped = true;
                assert_eq!(p.y, -p.size);
                break;
            }
            assert_eq!(p.y - last_y, cfg.powerup_speed);
            last_y = p.y;
        }
        assert!(wrapped);
        assert!(p.is_active());
    }

    #[test]
    fn collection_deactivates_and_freezes() {
        let cfg = GameConfig::default();
        let bounds = Bounds::new(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Powerup::new(&cfg, bounds, &mut rng);
        p.x = 100.0;
        p.y = 100.0;
        let player = Rect::new(95.0, 95.0, 30.0, 30.0);
        assert!(p.update(player, bounds, &mut rng));
        assert_eq!(p.phase, PowerupPhase::Collected);
        let y = p.y;
        assert!(!p.update(player, bounds, &mut rng));
        assert_eq!(p.y, y);

        p.revert();
        assert_eq!(p.phase, PowerupPhase::Cooldown);
        p.respawn(bounds, &mut rng);
        assert!(p.is_active());
    }
}
