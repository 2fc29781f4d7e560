use egui::{Color32, Painter, Pos2, Vec2};
use rand::seq::SliceRandom;
use rand::Rng;

const GRAVITY: f32 = 650.0;
const DRAG: f32 = 0.6;
const LIFETIME: f32 = 2.5;
const SPREAD_DEGREES: f32 = 100.0;

const COLORS: [Color32; 5] = [
    Color32::from_rgb(14, 165, 233),
    Color32::from_rgb(236, 72, 153),
    Color32::from_rgb(245, 158, 11),
    Color32::from_rgb(255, 255, 255),
    Color32::from_rgb(229, 231, 235),
];

#[derive(Debug, Clone, PartialEq)]
struct Particle {
    pos: Pos2,
    vel: Vec2,
    color: Color32,
    radius: f32,
    age: f32,
}

/// Win celebration: a fan of particles thrown upwards that falls and fades.
#[derive(Debug, Default)]
pub struct Confetti {
    particles: Vec<Particle>,
}

impl Confetti {
    pub fn burst(&mut self, origin: Pos2, count: usize, rng: &mut impl Rng) {
        let half_spread = SPREAD_DEGREES.to_radians() / 2.0;
        let up = -std::f32::consts::FRAC_PI_2;

        self.particles.extend((0..count).map(|_| {
            let angle = up + rng.gen_range(-half_spread..=half_spread);
            let speed = rng.gen_range(250.0..600.0);
            Particle {
                pos: origin,
                vel: Vec2::angled(angle) * speed,
                color: *COLORS.choose(rng).unwrap_or(&Color32::WHITE),
                radius: rng.gen_range(2.5..5.0),
                age: 0.0,
            }
        }));
    }

    pub fn step(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.vel.y += GRAVITY * dt;
            p.vel *= 1.0 - DRAG * dt;
            p.pos += p.vel * dt;
            p.age += dt;
        }
        self.particles.retain(|p| p.age < LIFETIME);
    }

    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn paint(&self, painter: &Painter) {
        for p in &self.particles {
            let alpha = 1.0 - p.age / LIFETIME;
            painter.circle_filled(p.pos, p.radius, p.color.gamma_multiply(alpha));
        }
    }
}
