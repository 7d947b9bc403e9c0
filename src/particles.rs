use rand::Rng;
use raylib::prelude::*;

use crate::constants::PARTICLE_COUNT;

struct Particle {
    position: Vector2,
    velocity: Vector2,
    radius: f32,
    alpha: u8,
}

/// Decorative drifting dots behind the slides. Purely cosmetic; the deck
/// never knows these exist.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        let mut rng = rand::rng();
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                position: Vector2::new(
                    rng.random_range(0.0..width),
                    rng.random_range(0.0..height),
                ),
                velocity: Vector2::new(
                    rng.random_range(-12.0..12.0),
                    rng.random_range(-8.0..8.0),
                ),
                radius: rng.random_range(1.0..3.0),
                alpha: rng.random_range(30..90),
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn update(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.position.x += p.velocity.x * dt;
            p.position.y += p.velocity.y * dt;

            // Wrap around the stage edges.
            if p.position.x < 0.0 {
                p.position.x += self.width;
            } else if p.position.x > self.width {
                p.position.x -= self.width;
            }
            if p.position.y < 0.0 {
                p.position.y += self.height;
            } else if p.position.y > self.height {
                p.position.y -= self.height;
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for p in &self.particles {
            d.draw_circle_v(p.position, p.radius, Color::new(0, 242, 255, p.alpha));
        }
    }
}
