use kurbo::Vec2;

use crate::foundation::rng::RandomSource;

/// Downward acceleration per tick.
const GRAVITY: Vec2 = Vec2::new(0.0, 0.2);
/// Velocity retained by a spark each tick (air drag).
const SPARK_DRAG: f64 = 0.95;
/// Lifespan lost by a spark each tick.
const SPARK_FADE: f64 = 3.0;
/// Sparks spawned per explosion.
const SPARKS_PER_BURST: usize = 150;

/// One particle record. A single flat variant covers both rocket and
/// spark; `rocket` only changes the spawn velocity and the explode
/// trigger, the per-tick update rule is shared.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Position in canvas space.
    pub pos: Vec2,
    /// Velocity per tick.
    pub vel: Vec2,
    /// Hue in `[0, 255)`, shared by a rocket and its sparks.
    pub hue: f64,
    /// Remaining life; a particle is dead below zero. Rockets do not fade.
    pub lifespan: f64,
    /// True until the particle explodes at its apex.
    pub rocket: bool,
}

/// Fixed-capacity firework field, advanced once per display tick.
///
/// Purely decorative state for the presentation layer; the field never
/// feeds back into selection or animation timing.
#[derive(Clone, Debug)]
pub struct FireworkField {
    particles: Vec<Particle>,
    capacity: usize,
    width: f64,
    height: f64,
}

impl FireworkField {
    /// Create a field over a canvas of the given size, holding at most
    /// `capacity` live particles.
    pub fn new(width: f64, height: f64, capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
            capacity,
            width,
            height,
        }
    }

    /// Live particles, for rendering.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Launch one rocket from the bottom edge at a random x.
    pub fn launch(&mut self, rng: &mut dyn RandomSource) {
        if self.particles.len() >= self.capacity {
            return;
        }
        self.particles.push(Particle {
            pos: Vec2::new(rng.next_f64_below(self.width), self.height),
            vel: Vec2::new(0.0, rng.next_f64_range(-18.0, -10.0)),
            hue: rng.next_f64_below(255.0),
            lifespan: 255.0,
            rocket: true,
        });
    }

    /// Launch a volley of rockets (the initial winner burst).
    pub fn launch_volley(&mut self, count: usize, rng: &mut dyn RandomSource) {
        for _ in 0..count {
            self.launch(rng);
        }
    }

    /// Advance every particle one tick; rockets past their apex explode
    /// into sparks, dead sparks are dropped.
    pub fn update(&mut self, rng: &mut dyn RandomSource) {
        let mut bursts: Vec<(Vec2, f64)> = Vec::new();

        self.particles.retain_mut(|p| {
            p.vel = p.vel + GRAVITY;
            if !p.rocket {
                p.vel = p.vel * SPARK_DRAG;
                p.lifespan -= SPARK_FADE;
            }
            p.pos = p.pos + p.vel;

            if p.rocket && p.vel.y >= 0.0 {
                bursts.push((p.pos, p.hue));
                return false;
            }
            p.lifespan >= 0.0
        });

        for (origin, hue) in bursts {
            self.explode(origin, hue, rng);
        }
    }

    fn explode(&mut self, origin: Vec2, hue: f64, rng: &mut dyn RandomSource) {
        for _ in 0..SPARKS_PER_BURST {
            if self.particles.len() >= self.capacity {
                return;
            }
            let angle = rng.next_f64_below(std::f64::consts::TAU);
            let speed = rng.next_f64_range(2.0, 20.0);
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                hue,
                lifespan: 255.0,
                rocket: false,
            });
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fx/particles.rs"]
mod tests;
