// pr_model: particle model for rendering

use crate::color::Rgb;
use crate::frontend::Frontend;

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f64; 2],
	pub radius: f64,
	pub color: Rgb,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrModel {
	pub background: Rgb,
	pub particles: Vec<PrParticle>,
}

impl PrModel {
	pub fn draw<F: Frontend + ?Sized>(&self, frontend: &mut F) {
		frontend.clear(self.background);
		for p in self.particles.iter() {
			frontend.draw_disc(p.pos, p.radius, p.color);
		}
	}
}
