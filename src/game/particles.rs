use rand::Rng;

use crate::config::GameConfig;

/// Short-lived burst decoration. `life` doubles as draw opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub life: f64,
    pub hue: f64,
}

impl Particle {
    pub fn spawn<R: Rng + ?Sized>(x: f64, y: f64, config: &GameConfig, rng: &mut R) -> Self {
        let speed = config.particle_speed;
        Self {
            x,
            y,
            vx: rng.gen_range(-speed..speed),
            vy: rng.gen_range(-speed..speed),
            size: rng.gen_range(config.particle_size_min..config.particle_size_max),
            life: 1.0,
            hue: rng.gen_range(config.particle_hue_min..config.particle_hue_max),
        }
    }

    /// Velocity is constant; particles ignore gravity.
    fn advance(&mut self, config: &GameConfig) {
        self.x += self.vx;
        self.y += self.vy;
        self.life -= config.particle_life_decay;
        self.size *= config.particle_shrink;
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }

    pub fn css_color(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.hue)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit `config.burst_count` particles centered on `(x, y)`.
    pub fn burst<R: Rng + ?Sized>(&mut self, x: f64, y: f64, config: &GameConfig, rng: &mut R) {
        self.particles.reserve(config.burst_count);
        for _ in 0..config.burst_count {
            self.particles.push(Particle::spawn(x, y, config, rng));
        }
    }

    /// Advance every particle and drop the ones whose life ran out this tick.
    pub fn update(&mut self, config: &GameConfig) {
        self.particles.retain_mut(|p| {
            p.advance(config);
            !p.is_expired()
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_adds_exactly_configured_count() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut set = ParticleSet::new();
        set.burst(100.0, 50.0, &cfg, &mut rng);
        assert_eq!(set.len(), 30);
        set.burst(0.0, 0.0, &cfg, &mut rng);
        assert_eq!(set.len(), 60);
    }

    #[test]
    fn spawned_particles_stay_within_ranges() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut set = ParticleSet::new();
        for _ in 0..10 {
            set.burst(10.0, 20.0, &cfg, &mut rng);
        }
        for p in set.iter() {
            assert_eq!((p.x, p.y), (10.0, 20.0));
            assert_eq!(p.life, 1.0);
            assert!((2.0..6.0).contains(&p.size));
            assert!((-4.0..4.0).contains(&p.vx));
            assert!((-4.0..4.0).contains(&p.vy));
            assert!((200.0..260.0).contains(&p.hue));
        }
    }

    #[test]
    fn update_moves_fades_and_shrinks() {
        let cfg = GameConfig::default();
        let mut set = ParticleSet::new();
        set.particles.push(Particle { x: 0.0, y: 0.0, vx: 1.5, vy: -2.0, size: 4.0, life: 1.0, hue: 220.0 });
        set.update(&cfg);
        let p = set.iter().next().unwrap();
        assert_eq!((p.x, p.y), (1.5, -2.0));
        assert!((p.life - 0.98).abs() < 1e-12);
        assert!((p.size - 3.96).abs() < 1e-12);
        assert_eq!((p.vx, p.vy), (1.5, -2.0));
    }

    #[test]
    fn expired_particles_are_pruned_without_skipping_neighbours() {
        let cfg = GameConfig::default();
        let mut set = ParticleSet::new();
        let lives = [0.01, 0.5, 0.02, 0.015, 0.9];
        for life in lives {
            set.particles.push(Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, size: 2.0, life, hue: 210.0 });
        }
        set.update(&cfg);
        let left: Vec<f64> = set.iter().map(|p| p.life).collect();
        assert_eq!(left.len(), 2);
        assert!((left[0] - 0.48).abs() < 1e-12);
        assert!((left[1] - 0.88).abs() < 1e-12);
    }

    #[test]
    fn css_color_is_hsl() {
        let p = Particle { x: 0.0, y: 0.0, vx: 0.0, vy: 0.0, size: 2.0, life: 1.0, hue: 230.5 };
        assert_eq!(p.css_color(), "hsl(230.5, 100%, 50%)");
    }
}
