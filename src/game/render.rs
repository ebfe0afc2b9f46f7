//! Back-to-front drawing of a [`World`] onto any [`Surface`].

use web_sys::CanvasRenderingContext2d;

use super::World;

/// The handful of 2D primitives the game needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn set_alpha(&mut self, alpha: f64);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.set_fill_style_str(color);
        self.begin_path();
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU).ok();
        self.fill();
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.set_global_alpha(alpha);
    }
}

/// Clear, ground, powerup (if falling), particles, player.
pub fn draw_world<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let bounds = world.bounds();
    let config = world.config();
    surface.clear(bounds.width, bounds.height);

    let ground_y = bounds.ground_y(config);
    surface.fill_rect(0.0, ground_y, bounds.width, bounds.height - ground_y, &config.ground_color);

    let powerup = world.powerup();
    if powerup.is_active() {
        surface.fill_rect(powerup.x, powerup.y, powerup.size, powerup.size, &config.powerup_color);
    }

    for p in world.particles().iter() {
        surface.set_alpha(p.life);
        surface.fill_circle(p.x, p.y, p.size, &p.css_color());
        surface.set_alpha(1.0);
    }

    let player = world.player();
    surface.fill_rect(player.x, player.y, player.size, player.size, &player.color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::input::InputSnapshot;
    use crate::game::Bounds;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Rect { y: f64, color: String, alpha: f64 },
        Circle { color: String, alpha: f64 },
    }

    struct Recorder {
        ops: Vec<Op>,
        alpha: f64,
    }

    impl Recorder {
        fn new() -> Self {
            Self { ops: Vec::new(), alpha: 1.0 }
        }
    }

    impl Surface for Recorder {
        fn clear(&mut self, _w: f64, _h: f64) {
            self.ops.push(Op::Clear);
        }
        fn fill_rect(&mut self, _x: f64, y: f64, _w: f64, _h: f64, color: &str) {
            self.ops.push(Op::Rect { y, color: color.to_string(), alpha: self.alpha });
        }
        fn fill_circle(&mut self, _x: f64, _y: f64, _r: f64, color: &str) {
            self.ops.push(Op::Circle { color: color.to_string(), alpha: self.alpha });
        }
        fn set_alpha(&mut self, alpha: f64) {
            self.alpha = alpha;
        }
    }

    #[test]
    fn draws_back_to_front() {
        let cfg = GameConfig::default();
        let mut world = World::with_seed(cfg.clone(), Bounds::new(800.0, 600.0), 9);
        world.player_mut().y = 520.0;
        world.player_mut().vy = 0.0;
        world.burst_at_player();
        world.tick(&InputSnapshot::idle(), 16.0);

        let mut rec = Recorder::new();
        draw_world(&world, &mut rec);

        assert_eq!(rec.ops.first(), Some(&Op::Clear));
        assert!(matches!(&rec.ops[1], Op::Rect { y, color, .. } if *y == 550.0 && *color == cfg.ground_color));
        assert!(matches!(&rec.ops[2], Op::Rect { color, .. } if *color == cfg.powerup_color));
        let circles = rec.ops.iter().filter(|op| matches!(op, Op::Circle { .. })).count();
        assert_eq!(circles, cfg.burst_count);
        assert!(matches!(rec.ops.last(), Some(Op::Rect { color, alpha, .. })
            if *color == cfg.player_color && *alpha == 1.0));
    }

    #[test]
    fn particle_alpha_tracks_life_and_is_restored() {
        let mut world = World::with_seed(GameConfig::default(), Bounds::new(800.0, 600.0), 1);
        world.burst_at_player();
        world.tick(&InputSnapshot::idle(), 16.0);
        let mut rec = Recorder::new();
        draw_world(&world, &mut rec);
        for op in &rec.ops {
            if let Op::Circle { alpha, .. } = op {
                assert!((alpha - 0.98).abs() < 1e-12);
            }
        }
        assert_eq!(rec.alpha, 1.0);
    }

    #[test]
    fn collected_powerup_is_not_drawn() {
        let cfg = GameConfig::default();
        let mut world = World::with_seed(cfg.clone(), Bounds::new(800.0, 600.0), 2);
        world.powerup_mut().phase = crate::game::PowerupPhase::Cooldown;
        let mut rec = Recorder::new();
        draw_world(&world, &mut rec);
        assert!(!rec.ops.iter().any(|op| matches!(op, Op::Rect { color, .. } if *color == cfg.powerup_color)));
        assert_eq!(rec.ops.len(), 3);
    }
}
