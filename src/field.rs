// The particle field: a fixed-size surface full of drifting points that get linked
// to their neighbours. Knows nothing about the browser; it draws through `Surface`.

use crate::config::FieldConfig;
use crate::error::Result;
use crate::particle::Particle;
use crate::renderer::Surface;
use rand::Rng;

// Number of particles for a `width` x `height` surface.
pub fn particle_count(width: u32, height: u32, area_per_particle: f64) -> usize {
    let area = width as f64 * height as f64;
    (area / area_per_particle).floor() as usize
}

// Opacity of the link between two particles `distance` apart, or `None`
// when they are too far apart to be linked.
pub fn link_opacity(distance: f64, config: &FieldConfig) -> Option<f64> {
    if distance < config.link_distance {
        Some(config.link_opacity * (1.0 - distance / config.link_distance))
    } else {
        None
    }
}

pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng>(width: u32, height: u32, config: FieldConfig, rng: &mut R) -> ParticleField {
        let mut field = ParticleField {
            width,
            height,
            particles: Vec::new(),
            config,
        };
        field.seed(rng);
        field
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    // Throws away every particle and seeds a fresh set for the new dimensions,
    // even when the dimensions did not change.
    pub fn resize<R: Rng>(&mut self, width: u32, height: u32, rng: &mut R) {
        self.width = width;
        self.height = height;
        self.seed(rng);
    }

    fn seed<R: Rng>(&mut self, rng: &mut R) {
        let count = particle_count(self.width, self.height, self.config.area_per_particle);
        let (w, h) = (self.width as f64, self.height as f64);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle::random(rng, w, h, &self.config));
        }
    }

    // Advances every particle one step without drawing.
    pub fn step(&mut self) {
        let (w, h) = (self.width as f64, self.height as f64);
        for particle in &mut self.particles {
            particle.advance(w, h);
        }
    }

    // One animation frame: clear, then for each particle in order move it, draw it
    // and link it to every other particle in range. Particles later in the list
    // are still at last frame's position when earlier ones link to them.
    pub fn render<S: Surface>(&mut self, surface: &mut S) -> Result<()> {
        let (w, h) = (self.width as f64, self.height as f64);
        surface.clear(w, h);

        for i in 0..self.particles.len() {
            self.particles[i].advance(w, h);
            let p = self.particles[i];
            surface.fill_circle(p.pos, p.radius, p.color)?;

            for (j, other) in self.particles.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(opacity) = link_opacity(p.distance_to(other), &self.config) {
                    let color = self.config.color.with_alpha(opacity);
                    surface.stroke_line(p.pos, other.pos, self.config.link_width, color);
                }
            }
        }
        Ok(())
    }
}
