// Simple particle struct to keep track of individual position, velocity, radius and color

use crate::color::Color;
use crate::config::FieldConfig;
use rand::Rng;
use vecmath::{vec2_add, vec2_len, vec2_sub};

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64, color: Color) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color,
        }
    }

    // Uniform position over the surface, everything else from the config ranges
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = rng.gen::<f64>() * config.radius_span + config.radius_min;
        let vel_x = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let vel_y = (rng.gen::<f64>() - 0.5) * 2.0 * config.max_speed;
        let alpha = rng.gen::<f64>() * config.alpha_span + config.alpha_min;
        let color = config.color.with_alpha(alpha);
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius, color)
    }

    // Moves one step and wraps around the edges of a width x height torus
    pub fn advance(&mut self, width: f64, height: f64) {
        let [x, y] = vec2_add(self.pos, self.vel);
        self.pos = [wrap(x, width), wrap(y, height)];
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vec2_len(vec2_sub(self.pos, other.pos))
    }
}

// Leaving past the far edge re-enters at 0, leaving past 0 re-enters near the far edge.
// The result always lies in [0, bound).
fn wrap(v: f64, bound: f64) -> f64 {
    if v >= bound {
        0.0
    } else if v < 0.0 {
        let wrapped = v + bound;
        if wrapped >= 0.0 && wrapped < bound {
            wrapped
        } else {
            0.0
        }
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn blue() -> Color {
        FieldConfig::default().color
    }

    #[test]
    fn crossing_far_edge_lands_on_zero() {
        let mut p = Particle::new(99.95, 10.0, 0.3, 0.0, 2.0, blue());
        p.advance(100.0, 50.0);
        assert_eq!(p.pos, [0.0, 10.0]);
    }

    #[test]
    fn crossing_near_edge_lands_inside_far_edge() {
        let mut p = Particle::new(5.0, 0.05, 0.0, -0.1, 2.0, blue());
        p.advance(100.0, 50.0);
        assert_eq!(p.pos[0], 5.0);
        assert!(p.pos[1] < 50.0 && p.pos[1] > 49.9);
    }

    #[test]
    fn exactly_on_far_edge_wraps() {
        let mut p = Particle::new(99.9, 0.0, 0.1, 0.0, 1.0, blue());
        p.advance(100.0, 50.0);
        assert!(p.pos[0] < 100.0);
    }

    #[test]
    fn random_particles_respect_ranges() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let p = Particle::random(&mut rng, 640.0, 480.0, &config);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 640.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 480.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            for v in p.vel.iter() {
                assert!(*v >= -0.15 && *v < 0.15);
            }
            assert!(p.color.a >= 0.1 && p.color.a < 0.4);
            assert_eq!((p.color.r, p.color.g, p.color.b), (37, 99, 235));
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Particle::new(0.0, 0.0, 0.0, 0.0, 1.0, blue());
        let b = Particle::new(3.0, 4.0, 0.0, 0.0, 1.0, blue());
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
