// Drifting background particles and the proximity links drawn between them.
// The field owns a fixed set of particles for the lifetime of the page; the
// per-frame work is advance + screen wrap, then an all-pairs distance pass.

use crate::color::Color;
use rand::Rng;
use vecmath;
use vecmath::Vector2;

pub const PARTICLE_COUNT: usize = 100;

// Everything on the hero canvas is drawn in the one accent hue
pub const FIELD_COLOR: Color = Color {
    r: 0,
    g: 212,
    b: 255,
};

// Particles closer than this get a connecting line, fading out to
// nothing right at the cutoff
pub const LINK_RADIUS: f64 = 150.0;
pub const LINK_MAX_ALPHA: f64 = 0.2;
pub const LINK_WIDTH: f64 = 1.0;

pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, size: f64, opacity: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            size,
            opacity,
        }
    }

    // Size, velocity, and opacity are rolled once here and never touched again
    pub fn spawn<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let size = rng.gen::<f64>() * 2.0 + 1.0;
        let vel_x = rng.gen::<f64>() - 0.5;
        let vel_y = rng.gen::<f64>() - 0.5;
        let opacity = rng.gen::<f64>() * 0.5 + 0.2;
        Particle::new(pos_x, pos_y, vel_x, vel_y, size, opacity)
    }
}

// A connecting segment between two nearby particles for the current frame
pub struct Link {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub alpha: f64,
}

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng>(rng: &mut R, width: f64, height: f64, count: usize) -> ParticleField {
        let mut particles = Vec::new();
        particles.reserve(count);
        for _ in 0..count {
            particles.push(Particle::spawn(rng, width, height));
        }
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn with_particles(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Only the wrap bounds change; particle positions are left where they are
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    // Advance every particle by its per-frame velocity, wrapping offscreen
    // particles back in on the opposite edge. Each axis wraps on its own, so
    // a particle drifting past a corner re-enters at the opposite corner.
    pub fn update(&mut self) {
        for particle in &mut self.particles {
            particle.pos[0] += particle.vel[0];
            particle.pos[1] += particle.vel[1];

            if particle.pos[0] > self.width {
                particle.pos[0] = 0.0;
            }
            if particle.pos[0] < 0.0 {
                particle.pos[0] = self.width;
            }
            if particle.pos[1] > self.height {
                particle.pos[1] = 0.0;
            }
            if particle.pos[1] < 0.0 {
                particle.pos[1] = self.height;
            }
        }
    }

    // All-pairs proximity pass, in storage order, so the link set for a
    // given arrangement is always the same. Quadratic on purpose; at 100
    // particles that is 4,950 distance checks per frame.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a: Vector2<f64> = self.particles[i].pos;
                let b: Vector2<f64> = self.particles[j].pos;
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a, b));
                if distance < LINK_RADIUS {
                    links.push(Link {
                        from: a,
                        to: b,
                        alpha: LINK_MAX_ALPHA * (1.0 - distance / LINK_RADIUS),
                    });
                }
            }
        }
        links
    }
}
