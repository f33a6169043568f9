use crate::V2;
use protocol::color::Rgb;
use protocol::pr_model::PrParticle;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub pos: V2,
	pub vel: V2,
	pub radius: f64,
	pub color: Rgb,
}

impl Particle {
	pub fn new(pos: V2, radius: f64, color: Rgb) -> Self {
		Self {
			pos,
			vel: V2::zeros(),
			radius,
			color,
		}
	}

	pub fn with_vel(mut self, vel: V2) -> Self {
		self.vel = vel;
		self
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_vel(&self) -> V2 {
		self.vel
	}

	// add force, then damp what comes out; not an integrator step
	pub fn update(&mut self, force: V2, damping: f64) {
		self.vel = (self.vel + force) * damping;
		self.pos += self.vel;
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			radius: self.radius,
			color: self.color,
		}
	}
}
