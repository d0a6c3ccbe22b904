// Tunables for the particle background and the typewriter headline.

use crate::color::Color;

#[derive(Copy, Clone, Debug)]
pub struct FieldConfig {
    pub canvas_id: &'static str,
    // Surface area (px²) that earns one particle
    pub area_per_particle: f64,
    pub link_distance: f64,
    pub link_opacity: f64,
    pub link_width: f64,
    // Per-axis velocity is drawn from [-max_speed, max_speed)
    pub max_speed: f64,
    pub radius_min: f64,
    pub radius_span: f64,
    pub alpha_min: f64,
    pub alpha_span: f64,
    pub color: Color,
    // Wrap each frame in console.time/timeEnd
    pub profile: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            canvas_id: "particleCanvas",
            area_per_particle: 12000.0,
            link_distance: 120.0,
            link_opacity: 0.1,
            link_width: 0.5,
            max_speed: 0.15,
            radius_min: 1.0,
            radius_span: 3.0,
            alpha_min: 0.1,
            alpha_span: 0.3,
            color: Color::from_u32(0x2563ebff),
            profile: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub selector: &'static str,
    pub phrases: Vec<String>,
    pub start_delay_ms: i32,
    pub type_delay_ms: i32,
    pub delete_delay_ms: i32,
    pub hold_delay_ms: i32,
    pub next_phrase_delay_ms: i32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        let phrases = [
            "Full Stack Web Developer",
            "IT Professional",
            "UI/UX Designer",
            "Mobile App Developer",
            "Problem Solver",
        ];
        TypewriterConfig {
            selector: ".typed-text",
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            start_delay_ms: 2000,
            type_delay_ms: 100,
            delete_delay_ms: 50,
            hold_delay_ms: 2000,
            next_phrase_delay_ms: 500,
        }
    }
}
