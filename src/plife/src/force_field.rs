use crate::config::Config;
use crate::particle::Particle;
use crate::particle_set::ParticleSet;
use crate::posbox::Posbox;
use crate::V2;

/// The pairwise rule: inverse-distance push or pull inside a hard cutoff.
pub struct ForceField {
	pub cutoff_dist2: f64,
	pub damping: f64,
	pub posbox: Posbox,
}

impl ForceField {
	pub fn new(cutoff_dist2: f64, damping: f64, posbox: Posbox) -> Self {
		Self {
			cutoff_dist2,
			damping,
			posbox,
		}
	}

	pub fn from_config(config: &Config) -> Self {
		Self::new(
			config.cutoff_dist2,
			config.damping,
			Posbox::from_canvas(config.canvas_size()),
		)
	}

	/// Net force on a particle sitting at `pos`.
	///
	/// Every source within the cutoff contributes `g` along the unit vector
	/// pointing from the source to `pos`, so positive `g` repels.
	pub fn force_on(&self, pos: V2, source: &[Particle], g: f64) -> V2 {
		let mut force = V2::zeros();
		for b in source.iter() {
			let d = pos - b.pos;
			let dist2 = d[0] * d[0] + d[1] * d[1];
			// zero covers the particle itself as well as exact overlap
			if dist2 > 0.0 && dist2 < self.cutoff_dist2 {
				let f = g / dist2.sqrt();
				force += d * f;
			}
		}
		force
	}

	fn step(&self, a: &mut Particle, force: V2) {
		a.update(force, self.damping);
		self.posbox.apply(a);
	}

	/// Self-interaction pass. Particles are moved one at a time, so particle
	/// `i` already sees the new positions of `0..i`.
	#[allow(clippy::needless_range_loop)]
	pub fn apply_within(&self, set: &mut ParticleSet, g: f64) {
		let particles = set.as_mut_slice();
		for idx in 0..particles.len() {
			let force = self.force_on(particles[idx].pos, particles, g);
			self.step(&mut particles[idx], force);
		}
	}

	/// Moves every particle of `target` under the pull of `source`.
	#[cfg(not(debug_assertions))]
	pub fn apply(&self, target: &mut ParticleSet, source: &ParticleSet, g: f64) {
		use rayon::prelude::*;
		let source = source.as_slice();
		target.as_mut_slice().par_iter_mut().for_each(|a| {
			let force = self.force_on(a.pos, source, g);
			self.step(a, force);
		});
	}

	/// Moves every particle of `target` under the pull of `source`.
	#[cfg(debug_assertions)]
	pub fn apply(&self, target: &mut ParticleSet, source: &ParticleSet, g: f64) {
		let source = source.as_slice();
		target.as_mut_slice().iter_mut().for_each(|a| {
			let force = self.force_on(a.pos, source, g);
			self.step(a, force);
		});
	}
}
