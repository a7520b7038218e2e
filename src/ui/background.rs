//! Animated particle background behind the home screen.
//!
//! Layout (positions, periods, phases) is drawn once from a seedable RNG;
//! animation is a pure function of the tick so rendering stays stateless.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::ui::theme::{COLOR_BLUSH, COLOR_SAGE, COLOR_SKY};

pub const DRIFTER_COUNT: usize = 20;
pub const ORB_COUNT: usize = 8;
pub const RISER_COUNT: usize = 12;

/// UI ticks per second (16ms tick)
const TICKS_PER_SEC: f32 = 62.5;

const PALETTE: [ratatui::style::Color; 3] = [COLOR_BLUSH, COLOR_SAGE, COLOR_SKY];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Small dot wandering around its anchor
    Drifter,
    /// Large faint orb that pulses
    Orb,
    /// Tiny dot rising from the bottom edge
    Riser,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: ParticleKind,
    /// Anchor as a fraction of the area, 0.0..1.0
    pub x: f32,
    pub y: f32,
    /// Index into the palette
    pub color: usize,
    /// Loop length in ticks
    pub period: u64,
    /// Start offset in ticks
    pub delay: u64,
}

impl Particle {
    /// Fraction of the loop completed at `tick`
    fn phase(&self, tick: u64) -> f32 {
        ((tick + self.delay) % self.period) as f32 / self.period as f32
    }

    /// Cell for this particle at `tick`, if it is inside `area`
    pub fn position(&self, area: Rect, tick: u64) -> Option<(u16, u16)> {
        if area.width == 0 || area.height == 0 {
            return None;
        }
        let t = self.phase(tick) * std::f32::consts::TAU;
        let (dx, dy) = match self.kind {
            // Roughly the 50/-30 and -30/20 wander, in cells
            ParticleKind::Drifter => (t.sin() * 5.0, (t * 2.0).sin() * -2.0),
            ParticleKind::Orb => (t.sin() * 4.0, t.cos() * -1.5),
            ParticleKind::Riser => (0.0, 0.0),
        };

        let w = area.width as f32;
        let h = area.height as f32;
        let fx = self.x * w + dx;
        let fy = match self.kind {
            ParticleKind::Riser => h * (1.0 - self.phase(tick)),
            _ => self.y * h + dy,
        };
        if fx < 0.0 || fy < 0.0 || fx >= w || fy >= h {
            return None;
        }
        Some((area.x + fx as u16, area.y + fy as u16))
    }

    /// Glyph at `tick`; orbs and drifters breathe between sizes
    pub fn glyph(&self, tick: u64) -> &'static str {
        let p = self.phase(tick);
        match self.kind {
            ParticleKind::Drifter => {
                if p < 0.5 {
                    "•"
                } else {
                    "·"
                }
            }
            ParticleKind::Orb => {
                if p < 0.3 {
                    "◦"
                } else if p < 0.7 {
                    "○"
                } else {
                    "◌"
                }
            }
            ParticleKind::Riser => "˙",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Background {
    particles: Vec<Particle>,
}

fn secs(rng: &mut StdRng, min: f32, span: f32) -> u64 {
    ((min + rng.gen::<f32>() * span) * TICKS_PER_SEC).max(1.0) as u64
}

impl Background {
    /// Lay out the particles; `None` draws the layout from entropy
    pub fn with_seed(seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut particles = Vec::with_capacity(DRIFTER_COUNT + ORB_COUNT + RISER_COUNT);
        for i in 0..DRIFTER_COUNT {
            particles.push(Particle {
                kind: ParticleKind::Drifter,
                x: rng.gen(),
                y: rng.gen(),
                color: i % PALETTE.len(),
                period: secs(&mut rng, 10.0, 15.0),
                delay: secs(&mut rng, 0.0, 5.0),
            });
        }
        for i in 0..ORB_COUNT {
            particles.push(Particle {
                kind: ParticleKind::Orb,
                x: rng.gen(),
                y: rng.gen(),
                color: i % PALETTE.len(),
                period: secs(&mut rng, 15.0, 20.0),
                delay: secs(&mut rng, 0.0, 8.0),
            });
        }
        for i in 0..RISER_COUNT {
            particles.push(Particle {
                kind: ParticleKind::Riser,
                x: rng.gen(),
                y: 1.0,
                color: i % PALETTE.len(),
                period: secs(&mut rng, 8.0, 6.0),
                delay: secs(&mut rng, 0.0, 10.0),
            });
        }
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Draw every visible particle into empty cells of `area`
    pub fn render(&self, buf: &mut Buffer, area: Rect, tick: u64) {
        for particle in &self.particles {
            let Some((x, y)) = particle.position(area, tick) else {
                continue;
            };
            let cell = &mut buf[(x, y)];
            if cell.symbol() != " " {
                continue;
            }
            cell.set_symbol(particle.glyph(tick))
                .set_style(Style::default().fg(PALETTE[particle.color]));
        }
    }
}
