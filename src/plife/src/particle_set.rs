use rand::Rng;

use crate::particle::Particle;
use crate::V2;
use protocol::color::Rgb;
use protocol::pr_model::PrParticle;

/// One population. The length is fixed once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleSet {
	particles: Vec<Particle>,
}

impl ParticleSet {
	pub fn initialize<R: Rng + ?Sized>(
		count: usize,
		canvas_width: f64,
		canvas_height: f64,
		radius: f64,
		color: Rgb,
		rng: &mut R,
	) -> Self {
		let particles = (0..count)
			.map(|_| {
				let x = rng.gen_range(0.0..canvas_width);
				let y = rng.gen_range(0.0..canvas_height);
				Particle::new(V2::new(x, y), radius, color)
			})
			.collect();
		Self { particles }
	}

	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn get(&self, idx: usize) -> Option<&Particle> {
		self.particles.get(idx)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
		self.particles.iter()
	}

	pub fn as_slice(&self) -> &[Particle] {
		&self.particles
	}

	pub(crate) fn as_mut_slice(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn pr_particles(&self) -> Vec<PrParticle> {
		self.particles.iter().map(|p| p.render()).collect()
	}
}

impl std::ops::Index<usize> for ParticleSet {
	type Output = Particle;
	fn index(&self, idx: usize) -> &Self::Output {
		&self.particles[idx]
	}
}
